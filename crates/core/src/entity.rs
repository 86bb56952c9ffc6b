//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Implemented by every API record and by every embedded summary, so a
/// [`Reference`](crate::Reference) can hand out an id regardless of which
/// form the backend delivered.
pub trait Entity {
    /// Strongly-typed entity identifier (backed by the `_id` string).
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + AsRef<str>;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
