//! `mms-auth`: client-side authentication state.
//!
//! Holds "who is logged in" and "has the startup session check finished" for
//! the lifetime of a client session. Token handling and session rehydration
//! are the caller's job; this crate is decoupled from HTTP and storage.

pub mod store;
pub mod subscription;

pub use store::{AuthState, AuthStore};
pub use subscription::Subscription;
