//! Materiel records: assets and the movements that change their balances.
//!
//! Like the rest of the data layer this crate is declarations plus opt-in
//! consumer-side checks; it never enforces backend invariants on its own.

pub mod asset;
pub mod assignment;
pub mod purchase;
pub mod transfer;

pub use asset::{Asset, AssetId, AssetSummary, AssetsResponse};
pub use assignment::{Assignee, Assignment, AssignmentId, AssignmentStatus, AssignmentsResponse};
pub use purchase::{Purchase, PurchaseId, PurchaseStatus, PurchasesResponse};
pub use transfer::{Transfer, TransferId, TransferStatus, TransfersResponse};
