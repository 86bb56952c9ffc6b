use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mms_core::{Entity, ListResponse, Reference};

use crate::user::UserSummary;

mms_core::record_id! {
    /// Identifier of a base (physical installation).
    BaseId
}

mms_core::wire_enum! {
    /// Branch / function of a base.
    BaseType("base type") {
        Army => "Army",
        Navy => "Navy",
        AirForce => "AirForce",
        Joint => "Joint",
        Training => "Training",
        Logistics => "Logistics",
    }
}

mms_core::wire_enum! {
    /// Operational status of a base.
    BaseStatus("base status") {
        Active => "Active",
        Inactive => "Inactive",
        Maintenance => "Maintenance",
        Decommissioned => "Decommissioned",
    }
}

/// Allowed drift between the delivered and the recomputed occupancy ratio.
pub const OCCUPANCY_RATE_TOLERANCE: f64 = 0.005;

/// Geographic position of a base.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A base as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Base {
    #[serde(rename = "_id")]
    pub id: BaseId,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub base_type: BaseType,
    pub capacity: u32,
    pub current_occupancy: u32,
    /// `current_occupancy / capacity` as a ratio, computed by the backend.
    pub occupancy_rate: f64,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub commander: Reference<UserSummary>,
    pub status: BaseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facilities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Base {
    /// `current_occupancy / capacity`; 0 for a zero-capacity base.
    pub fn expected_occupancy_rate(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        f64::from(self.current_occupancy) / f64::from(self.capacity)
    }

    /// Consumer-side check of the backend's occupancy figure.
    pub fn occupancy_rate_is_consistent(&self) -> bool {
        let drift = (self.occupancy_rate - self.expected_occupancy_rate()).abs();
        if drift > OCCUPANCY_RATE_TOLERANCE {
            tracing::warn!(
                base_id = %self.id,
                delivered = self.occupancy_rate,
                expected = self.expected_occupancy_rate(),
                "base occupancy rate disagrees with occupancy/capacity"
            );
            return false;
        }
        true
    }

    pub fn is_over_capacity(&self) -> bool {
        self.current_occupancy > self.capacity
    }

    /// Seats left before reaching capacity (0 once full or over).
    pub fn remaining_capacity(&self) -> u32 {
        self.capacity.saturating_sub(self.current_occupancy)
    }
}

impl Entity for Base {
    type Id = BaseId;

    fn id(&self) -> &BaseId {
        &self.id
    }
}

/// Embedded form of a base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseSummary {
    #[serde(rename = "_id")]
    pub id: BaseId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Entity for BaseSummary {
    type Id = BaseId;

    fn id(&self) -> &BaseId {
        &self.id
    }
}

impl From<&Base> for BaseSummary {
    fn from(base: &Base) -> Self {
        Self {
            id: base.id.clone(),
            name: base.name.clone(),
            location: Some(base.location.clone()),
        }
    }
}

pub type BasesResponse = ListResponse<Base>;
