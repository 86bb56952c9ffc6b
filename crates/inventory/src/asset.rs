use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mms_core::{DomainError, DomainResult, Entity, ListResponse, Reference};
use mms_directory::BaseSummary;

mms_core::record_id! {
    /// Identifier of an asset (inventory item type held at a base).
    AssetId
}

/// An asset with its balance accounting for the reporting period.
///
/// All balance fields come from the backend. The closing balance is expected
/// to equal
/// `opening + purchases + transfer_in - transfer_out - assigned - expended`;
/// [`Asset::check_balance`] verifies that on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(rename = "_id")]
    pub id: AssetId,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub base: Reference<BaseSummary>,
    pub opening_balance: i64,
    pub closing_balance: i64,
    pub purchases: i64,
    pub transfer_in: i64,
    pub transfer_out: i64,
    pub assigned: i64,
    pub expended: i64,
    pub available: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Asset {
    /// `None` when the movement fields overflow `i64`.
    pub fn expected_closing_balance(&self) -> Option<i64> {
        self.opening_balance
            .checked_add(self.purchases)?
            .checked_add(self.transfer_in)?
            .checked_sub(self.transfer_out)?
            .checked_sub(self.assigned)?
            .checked_sub(self.expended)
    }

    /// Net change over the period (in minus out).
    pub fn net_movement(&self) -> Option<i64> {
        self.expected_closing_balance()?.checked_sub(self.opening_balance)
    }

    /// Verify the delivered closing balance against the movement fields.
    pub fn check_balance(&self) -> DomainResult<()> {
        let Some(expected) = self.expected_closing_balance() else {
            tracing::warn!(asset_id = %self.id, "asset balance movements overflow");
            return Err(DomainError::invariant(format!(
                "asset {}: balance movements overflow",
                self.id
            )));
        };
        if self.closing_balance != expected {
            tracing::warn!(
                asset_id = %self.id,
                closing_balance = self.closing_balance,
                expected,
                "asset closing balance does not match its movements"
            );
            return Err(DomainError::invariant(format!(
                "asset {}: closing balance {} != expected {expected}",
                self.id, self.closing_balance
            )));
        }
        Ok(())
    }
}

impl Entity for Asset {
    type Id = AssetId;

    fn id(&self) -> &AssetId {
        &self.id
    }
}

/// Embedded form of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSummary {
    #[serde(rename = "_id")]
    pub id: AssetId,
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
}

impl Entity for AssetSummary {
    type Id = AssetId;

    fn id(&self) -> &AssetId {
        &self.id
    }
}

impl From<&Asset> for AssetSummary {
    fn from(asset: &Asset) -> Self {
        Self {
            id: asset.id.clone(),
            name: asset.name.clone(),
            asset_type: Some(asset.asset_type.clone()),
        }
    }
}

pub type AssetsResponse = ListResponse<Asset>;
