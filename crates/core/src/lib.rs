//! `mms-core`: building blocks shared by every MMS record crate.
//!
//! This crate contains **pure data** primitives (no IO, no HTTP, no storage):
//! record identifiers, the embedded-or-id reference type, and the paginated
//! list wrapper returned by the API.

pub mod entity;
pub mod error;
pub mod id;
pub mod page;
pub mod reference;
pub mod wire;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::RecordId;
pub use page::ListResponse;
pub use reference::Reference;
