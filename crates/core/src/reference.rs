//! Links between records.
//!
//! The API links records in one of three ways: it embeds a summary object,
//! it sends just the `_id` string, or it sends nothing (`null` / missing).
//! [`Reference`] makes all three explicit so consumers have to handle the
//! unresolved form instead of assuming the embedded one.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::entity::Entity;

/// A link to another record, in whichever form the API delivered it.
///
/// ## Wire format
///
/// | JSON                 | Variant                |
/// |----------------------|------------------------|
/// | missing / `null`     | `Absent`               |
/// | `"64b7…"`            | `Unresolved(id)`       |
/// | `{ "_id": …, … }`    | `Resolved(summary)`    |
///
/// Record fields use `#[serde(default, skip_serializing_if = "Reference::is_absent")]`
/// so an absent link is left out when encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference<T: Entity> {
    /// No link.
    Absent,
    /// Only the identifier is known.
    Unresolved(T::Id),
    /// The backend populated the linked record.
    Resolved(T),
}

impl<T: Entity> Reference<T> {
    /// Identifier of the linked record, for either present form.
    pub fn id(&self) -> Option<&T::Id> {
        match self {
            Reference::Absent => None,
            Reference::Unresolved(id) => Some(id),
            Reference::Resolved(value) => Some(value.id()),
        }
    }

    /// Identifier as a plain string slice.
    pub fn id_str(&self) -> Option<&str> {
        self.id().map(AsRef::as_ref)
    }

    /// The embedded record, if the backend populated it.
    pub fn resolved(&self) -> Option<&T> {
        match self {
            Reference::Resolved(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Reference::Absent)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Reference::Resolved(_))
    }

    /// Whether this link points at `id` (regardless of form).
    pub fn points_to(&self, id: &T::Id) -> bool {
        self.id() == Some(id)
    }

    /// Drop the embedded data, keeping only the identifier.
    pub fn into_unresolved(self) -> Self {
        match self {
            Reference::Resolved(value) => Reference::Unresolved(value.id().clone()),
            other => other,
        }
    }
}

impl<T: Entity> Default for Reference<T> {
    fn default() -> Self {
        Reference::Absent
    }
}

impl<T: Entity> From<T> for Reference<T> {
    fn from(value: T) -> Self {
        Reference::Resolved(value)
    }
}

impl<T: Entity> From<Option<T>> for Reference<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Reference::Absent, Reference::Resolved)
    }
}

impl<T> Serialize for Reference<T>
where
    T: Entity + Serialize,
    T::Id: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Reference::Absent => serializer.serialize_none(),
            Reference::Unresolved(id) => id.serialize(serializer),
            Reference::Resolved(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T> Deserialize<'de> for Reference<T>
where
    T: Entity + Deserialize<'de>,
    T::Id: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Id first: a summary struct never decodes from a bare string.
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Wire<I, V> {
            Id(I),
            Embedded(V),
        }

        let wire: Option<Wire<T::Id, T>> = Option::deserialize(deserializer)?;
        Ok(match wire {
            None => Reference::Absent,
            Some(Wire::Id(id)) => Reference::Unresolved(id),
            Some(Wire::Embedded(value)) => Reference::Resolved(value),
        })
    }
}
