//! Domain error model.

use thiserror::Error;

/// Result type used across the record crates.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Nothing in the data layer enforces backend invariants on its own; these
/// errors come from explicit parsing (`FromStr`) and from opt-in
/// consumer-side checks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A backend invariant does not hold for a delivered record.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. empty `_id`).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A wire enum received a string outside its value set.
    #[error("unknown {kind} value: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },
}

impl DomainError {
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}
