use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mms_core::{Entity, Reference};

use crate::base::BaseSummary;

mms_core::record_id! {
    /// Identifier of a user account.
    UserId
}

mms_core::wire_enum! {
    /// Role of an account. Authorization decisions based on it are made
    /// elsewhere; this layer only carries the value.
    Role("role") {
        Admin => "Admin",
        BaseCommander => "BaseCommander",
        LogisticsOfficer => "LogisticsOfficer",
    }
}

/// A user account as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Reference::is_absent")]
    pub assigned_base: Reference<BaseSummary>,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}

/// Embedded form of a user (e.g. a base commander or an approver).
///
/// The backend populates a varying subset of fields depending on the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl UserSummary {
    /// Best human-readable label: full name, then username, then the id.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or_else(|| self.id.as_str())
    }
}

impl Entity for UserSummary {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: Some(user.username.clone()),
            full_name: Some(user.full_name.clone()),
            email: Some(user.email.clone()),
            role: Some(user.role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mms_core::DomainError;

    const ALICE: &str = r#"{
        "_id": "u1",
        "username": "alice",
        "email": "alice@example.mil",
        "fullName": "Alice Carter",
        "role": "BaseCommander",
        "assignedBase": { "_id": "b1", "name": "Fort Alpha", "location": "North Ridge" },
        "active": true,
        "createdAt": "2024-03-01T08:00:00.000Z"
    }"#;

    #[test]
    fn decodes_user_with_embedded_base() {
        let user: User = serde_json::from_str(ALICE).unwrap();
        assert_eq!(user.id.as_str(), "u1");
        assert_eq!(user.full_name, "Alice Carter");
        assert_eq!(user.role, Role::BaseCommander);
        assert_eq!(user.assigned_base.id_str(), Some("b1"));
        assert!(user.assigned_base.is_resolved());
        assert!(user.created_at.is_some());
        assert!(user.updated_at.is_none());
    }

    #[test]
    fn assigned_base_may_be_an_id_or_missing() {
        let json = r#"{"_id":"u2","username":"bob","email":"b@x","fullName":"Bob",
                       "role":"Admin","assignedBase":"b7","active":false}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.assigned_base, Reference::Unresolved("b7".into()));

        let json = r#"{"_id":"u3","username":"cy","email":"c@x","fullName":"Cy",
                       "role":"LogisticsOfficer","active":true}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.assigned_base.is_absent());

        let encoded = serde_json::to_value(&user).unwrap();
        assert!(encoded.get("assignedBase").is_none());
        assert_eq!(encoded["fullName"], "Cy");
    }

    #[test]
    fn role_parsing_is_case_sensitive() {
        assert!(matches!(
            "admin".parse::<Role>(),
            Err(DomainError::UnknownVariant { kind: "role", .. })
        ));
    }

    #[test]
    fn summary_prefers_full_name_for_display() {
        let user: User = serde_json::from_str(ALICE).unwrap();
        let summary = UserSummary::from(&user);
        assert_eq!(summary.display_name(), "Alice Carter");

        let bare = UserSummary {
            id: "u9".into(),
            username: None,
            full_name: None,
            email: None,
            role: None,
        };
        assert_eq!(bare.display_name(), "u9");
    }

    #[test]
    fn role_wire_strings() {
        let wire: Vec<&str> = Role::ALL.iter().map(Role::as_str).collect();
        assert_eq!(wire, ["Admin", "BaseCommander", "LogisticsOfficer"]);

        for value in Role::ALL {
            let json = serde_json::to_string(value).unwrap();
            assert_eq!(json, format!("\"{}\"", value.as_str()));
            assert_eq!(serde_json::from_str::<Role>(&json).unwrap(), *value);
            assert_eq!(value.as_str().parse::<Role>().unwrap(), *value);
        }
    }
}
