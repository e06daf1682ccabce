//! Seed document model.
//!
//! The input file is the single source of truth for intent; the server is
//! the source of truth for current state. Field names are camelCase on the
//! wire to match the Admin API's own representations.

use realmseed_admin::models::UserRepresentation;
use serde::Deserialize;

/// Top-level seed document: one realm, an ordered list of desired users.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedDocument {
    #[serde(default)]
    pub realm: String,
    #[serde(default)]
    pub users: Vec<SeedUser>,
}

/// A desired user. `username` is the case-insensitive match key against the
/// remote realm; everything else is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedUser {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub attributes: Option<serde_json::Value>,
    #[serde(default)]
    pub password: Option<PasswordSpec>,
    /// Absolute slash-paths of groups the user must belong to.
    #[serde(default)]
    pub groups: Vec<String>,
    /// Realm role names the user must hold.
    #[serde(default)]
    pub realm_roles: Vec<String>,
}

/// Desired password. An empty `value` means "do not touch the password".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PasswordSpec {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub temporary: bool,
}

impl SeedUser {
    /// Project the allow-listed profile fields into the representation sent
    /// to the server. Absent fields are omitted, never null.
    #[must_use]
    pub fn profile_repr(&self) -> UserRepresentation {
        UserRepresentation {
            id: None,
            username: Some(self.username.clone()),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            enabled: self.enabled,
            email_verified: self.email_verified,
            attributes: self.attributes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_full_user() {
        let doc: SeedDocument = serde_json::from_value(json!({
            "realm": "demo",
            "users": [{
                "username": "alice",
                "email": "alice@example.com",
                "firstName": "Alice",
                "enabled": true,
                "emailVerified": false,
                "attributes": {"team": ["eng"]},
                "password": {"value": "x", "temporary": true},
                "groups": ["/eng"],
                "realmRoles": ["tester"]
            }]
        }))
        .unwrap();

        assert_eq!(doc.realm, "demo");
        let user = &doc.users[0];
        assert_eq!(user.username, "alice");
        assert_eq!(user.first_name.as_deref(), Some("Alice"));
        assert_eq!(user.groups, vec!["/eng"]);
        assert_eq!(user.realm_roles, vec!["tester"]);
        let pw = user.password.as_ref().unwrap();
        assert_eq!(pw.value, "x");
        assert!(pw.temporary);
    }

    #[test]
    fn temporary_defaults_to_false() {
        let user: SeedUser = serde_json::from_value(json!({
            "username": "bob",
            "password": {"value": "secret"}
        }))
        .unwrap();
        assert!(!user.password.unwrap().temporary);
    }

    #[test]
    fn missing_users_defaults_to_empty() {
        let doc: SeedDocument = serde_json::from_value(json!({"realm": "demo"})).unwrap();
        assert!(doc.users.is_empty());
    }

    #[test]
    fn profile_repr_drops_absent_fields() {
        let user: SeedUser = serde_json::from_value(json!({
            "username": "alice",
            "password": {"value": "x"},
            "groups": ["/eng"]
        }))
        .unwrap();
        let body = serde_json::to_value(user.profile_repr()).unwrap();
        assert_eq!(body, json!({"username": "alice"}));
    }

    #[test]
    fn profile_repr_keeps_only_allow_listed_fields() {
        let user: SeedUser = serde_json::from_value(json!({
            "username": "alice",
            "email": "a@example.com",
            "lastName": "Liddell",
            "enabled": true
        }))
        .unwrap();
        let body = serde_json::to_value(user.profile_repr()).unwrap();
        assert_eq!(
            body,
            json!({
                "username": "alice",
                "email": "a@example.com",
                "lastName": "Liddell",
                "enabled": true
            })
        );
    }
}
