use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mms_core::{DomainError, DomainResult, Entity, ListResponse, Reference};
use mms_directory::{BaseSummary, UserSummary};

use crate::asset::AssetSummary;

mms_core::record_id! {
    /// Identifier of a purchase record.
    PurchaseId
}

mms_core::wire_enum! {
    /// Purchase lifecycle.
    PurchaseStatus("purchase status") {
        Ordered => "Ordered",
        Delivered => "Delivered",
        Cancelled => "Cancelled",
    }
}

/// Allowed rounding drift between `total_cost` and `quantity * unit_cost`.
pub const TOTAL_COST_TOLERANCE: f64 = 0.01;

/// Acquisition of an asset quantity from a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    #[serde(rename = "_id")]
    pub id: PurchaseId,
    /// Absent when the purchase introduces a new asset type.
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub asset: Reference<AssetSummary>,
    pub asset_name: String,
    pub asset_type: String,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub base: Reference<BaseSummary>,
    pub quantity: u32,
    pub unit_cost: f64,
    pub total_cost: f64,
    pub supplier: String,
    pub purchase_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<DateTime<Utc>>,
    pub status: PurchaseStatus,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub purchased_by: Reference<UserSummary>,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub approved_by: Reference<UserSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Purchase {
    pub fn expected_total_cost(&self) -> f64 {
        f64::from(self.quantity) * self.unit_cost
    }

    /// Verify the delivered total against `quantity * unit_cost`.
    pub fn check_total_cost(&self) -> DomainResult<()> {
        let expected = self.expected_total_cost();
        if (self.total_cost - expected).abs() > TOTAL_COST_TOLERANCE {
            tracing::warn!(
                purchase_id = %self.id,
                total_cost = self.total_cost,
                expected,
                "purchase total cost does not match quantity x unit cost"
            );
            return Err(DomainError::invariant(format!(
                "purchase {}: total cost {} != {} x {}",
                self.id, self.total_cost, self.quantity, self.unit_cost
            )));
        }
        Ok(())
    }

    pub fn is_approved(&self) -> bool {
        !self.approved_by.is_absent()
    }
}

impl Entity for Purchase {
    type Id = PurchaseId;

    fn id(&self) -> &PurchaseId {
        &self.id
    }
}

pub type PurchasesResponse = ListResponse<Purchase>;
