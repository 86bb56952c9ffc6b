use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use mms_core::{Entity, ListResponse, Reference};

use crate::base::BaseSummary;
use crate::user::UserSummary;

mms_core::record_id! {
    /// Identifier of an organisational unit.
    UnitId
}

mms_core::wire_enum! {
    /// Kind of unit.
    UnitType("unit type") {
        Infantry => "Infantry",
        Armor => "Armor",
        Artillery => "Artillery",
        Aviation => "Aviation",
        Engineering => "Engineering",
        Signal => "Signal",
        Medical => "Medical",
        Logistics => "Logistics",
        Intelligence => "Intelligence",
        SpecialForces => "SpecialForces",
    }
}

mms_core::wire_enum! {
    /// Readiness status of a unit.
    UnitStatus("unit status") {
        Active => "Active",
        Inactive => "Inactive",
        Deployed => "Deployed",
        Training => "Training",
    }
}

/// A unit as returned by the API.
///
/// `parent_unit` links form a tree. Cycles would be a backend bug and are
/// not detected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    #[serde(rename = "_id")]
    pub id: UnitId,
    pub name: String,
    #[serde(rename = "type")]
    pub unit_type: UnitType,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub base: Reference<BaseSummary>,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub commander: Reference<UserSummary>,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub parent_unit: Reference<UnitSummary>,
    pub capacity: u32,
    pub current_strength: u32,
    pub status: UnitStatus,
    /// Member entries are passed through untouched; their shape is not part
    /// of the published contract yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Unit {
    pub fn is_top_level(&self) -> bool {
        self.parent_unit.is_absent()
    }

    /// `current_strength / capacity`, or `None` for a zero-capacity unit.
    pub fn strength_ratio(&self) -> Option<f64> {
        (self.capacity > 0).then(|| f64::from(self.current_strength) / f64::from(self.capacity))
    }

    pub fn member_count(&self) -> usize {
        self.members.as_ref().map_or(0, Vec::len)
    }
}

impl Entity for Unit {
    type Id = UnitId;

    fn id(&self) -> &UnitId {
        &self.id
    }
}

/// Embedded form of a unit (e.g. a parent unit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSummary {
    #[serde(rename = "_id")]
    pub id: UnitId,
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<UnitType>,
}

impl Entity for UnitSummary {
    type Id = UnitId;

    fn id(&self) -> &UnitId {
        &self.id
    }
}

impl From<&Unit> for UnitSummary {
    fn from(unit: &Unit) -> Self {
        Self {
            id: unit.id.clone(),
            name: unit.name.clone(),
            unit_type: Some(unit.unit_type),
        }
    }
}

pub type UnitsResponse = ListResponse<Unit>;

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND_PLATOON: &str = r#"{
        "_id": "n2",
        "name": "2nd Platoon",
        "type": "SpecialForces",
        "base": "b1",
        "commander": null,
        "parentUnit": { "_id": "n1", "name": "1st Battalion", "type": "Infantry" },
        "capacity": 40,
        "currentStrength": 30,
        "status": "Deployed",
        "members": [{ "name": "Pvt. Reyes" }, "u8"]
    }"#;

    #[test]
    fn decodes_unit_with_mixed_reference_forms() {
        let unit: Unit = serde_json::from_str(SECOND_PLATOON).unwrap();
        assert_eq!(unit.unit_type, UnitType::SpecialForces);
        assert_eq!(unit.status, UnitStatus::Deployed);
        assert_eq!(unit.base, Reference::Unresolved("b1".into()));
        assert!(unit.commander.is_absent());
        assert_eq!(
            unit.parent_unit.resolved().map(|p| p.unit_type),
            Some(Some(UnitType::Infantry))
        );
        assert!(!unit.is_top_level());
    }

    #[test]
    fn members_are_kept_opaque() {
        let unit: Unit = serde_json::from_str(SECOND_PLATOON).unwrap();
        assert_eq!(unit.member_count(), 2);

        let encoded = serde_json::to_value(&unit).unwrap();
        assert_eq!(encoded["members"][0]["name"], "Pvt. Reyes");
        assert_eq!(encoded["members"][1], "u8");
    }

    #[test]
    fn strength_ratio_handles_zero_capacity() {
        let mut unit: Unit = serde_json::from_str(SECOND_PLATOON).unwrap();
        assert_eq!(unit.strength_ratio(), Some(0.75));

        unit.capacity = 0;
        assert_eq!(unit.strength_ratio(), None);
    }

    #[test]
    fn unit_type_wire_strings() {
        let wire: Vec<&str> = UnitType::ALL.iter().map(UnitType::as_str).collect();
        assert_eq!(wire, ["Infantry", "Armor", "Artillery", "Aviation", "Engineering", "Signal", "Medical", "Logistics", "Intelligence", "SpecialForces"]);

        for value in UnitType::ALL {
            let json = serde_json::to_string(value).unwrap();
            assert_eq!(json, format!("\"{}\"", value.as_str()));
            assert_eq!(serde_json::from_str::<UnitType>(&json).unwrap(), *value);
            assert_eq!(value.as_str().parse::<UnitType>().unwrap(), *value);
        }
    }

    #[test]
    fn unit_status_wire_strings() {
        let wire: Vec<&str> = UnitStatus::ALL.iter().map(UnitStatus::as_str).collect();
        assert_eq!(wire, ["Active", "Inactive", "Deployed", "Training"]);

        for value in UnitStatus::ALL {
            let json = serde_json::to_string(value).unwrap();
            assert_eq!(json, format!("\"{}\"", value.as_str()));
            assert_eq!(serde_json::from_str::<UnitStatus>(&json).unwrap(), *value);
            assert_eq!(value.as_str().parse::<UnitStatus>().unwrap(), *value);
        }
    }
}
