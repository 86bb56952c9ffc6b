use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mms_core::{Entity, ListResponse, Reference};
use mms_directory::{BaseSummary, UserSummary};

use crate::asset::AssetSummary;

mms_core::record_id! {
    /// Identifier of an assignment.
    AssignmentId
}

mms_core::wire_enum! {
    /// Assignment lifecycle. Transitions out of `Active` are made by the
    /// backend only.
    AssignmentStatus("assignment status") {
        Active => "Active",
        Returned => "Returned",
        Lost => "Lost",
        Damaged => "Damaged",
    }
}

impl AssignmentStatus {
    /// Every status other than `Active` closes the assignment.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AssignmentStatus::Active)
    }
}

/// The person an asset quantity is issued to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignee {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_number: Option<String>,
}

/// Allocation of an asset quantity to a person for a purpose and time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(rename = "_id")]
    pub id: AssignmentId,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub asset: Reference<AssetSummary>,
    pub asset_name: String,
    pub asset_type: String,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub base: Reference<BaseSummary>,
    pub quantity: u32,
    pub assigned_to: Assignee,
    pub assigned_by: UserSummary,
    pub purpose: String,
    pub start_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub status: AssignmentStatus,
    #[serde(default)]
    pub returned_quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Assignment {
    /// Quantity still out with the assignee.
    pub fn outstanding_quantity(&self) -> u32 {
        self.quantity.saturating_sub(self.returned_quantity)
    }

    pub fn is_open(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Whether the window has ended by `now` (open-ended assignments never do).
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.is_open() && self.end_date.is_some_and(|end| end < now)
    }
}

impl Entity for Assignment {
    type Id = AssignmentId;

    fn id(&self) -> &AssignmentId {
        &self.id
    }
}

pub type AssignmentsResponse = ListResponse<Assignment>;
