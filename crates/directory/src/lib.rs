//! Organisational records: users, bases and units.
//!
//! This crate only declares the shapes the API exchanges (no IO, no HTTP,
//! no storage). Lifecycle rules live in the backend.

pub mod base;
pub mod unit;
pub mod user;

pub use base::{Base, BaseId, BaseStatus, BaseSummary, BaseType, BasesResponse, Coordinates};
pub use unit::{Unit, UnitId, UnitStatus, UnitSummary, UnitType, UnitsResponse};
pub use user::{Role, User, UserId, UserSummary};
