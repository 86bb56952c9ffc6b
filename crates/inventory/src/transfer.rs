use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mms_core::{DomainError, DomainResult, Entity, ListResponse, Reference};
use mms_directory::{BaseSummary, UserSummary};

use crate::asset::AssetSummary;

mms_core::record_id! {
    /// Identifier of a transfer record.
    TransferId
}

mms_core::wire_enum! {
    /// Transfer lifecycle.
    TransferStatus("transfer status") {
        Pending => "Pending",
        Completed => "Completed",
        Cancelled => "Cancelled",
    }
}

/// Movement of an asset quantity between two bases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    #[serde(rename = "_id")]
    pub id: TransferId,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub asset: Reference<AssetSummary>,
    pub asset_name: String,
    pub asset_type: String,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub from_base: Reference<BaseSummary>,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub to_base: Reference<BaseSummary>,
    pub quantity: u32,
    pub status: TransferStatus,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub transferred_by: Reference<UserSummary>,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub approved_by: Reference<UserSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Transfer {
    /// Source and destination must differ. Passes when either side is
    /// unknown.
    pub fn check_distinct_bases(&self) -> DomainResult<()> {
        match (self.from_base.id(), self.to_base.id()) {
            (Some(from), Some(to)) if from == to => {
                tracing::warn!(
                    transfer_id = %self.id,
                    base_id = %from,
                    "transfer source and destination are the same base"
                );
                Err(DomainError::invariant(format!(
                    "transfer {}: from and to base are both {from}",
                    self.id
                )))
            }
            _ => Ok(()),
        }
    }

    /// Whether this transfer moves stock out of (`true`) or into (`false`)
    /// `base`; `None` when it does not touch `base`.
    pub fn is_outbound_for(&self, base: &mms_directory::BaseId) -> Option<bool> {
        if self.from_base.points_to(base) {
            Some(true)
        } else if self.to_base.points_to(base) {
            Some(false)
        } else {
            None
        }
    }
}

impl Entity for Transfer {
    type Id = TransferId;

    fn id(&self) -> &TransferId {
        &self.id
    }
}

pub type TransfersResponse = ListResponse<Transfer>;
