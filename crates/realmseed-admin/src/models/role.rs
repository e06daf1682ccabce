//! Realm role representation.

use serde::{Deserialize, Serialize};

/// A realm role, unique by name within a realm.
///
/// `name` is optional on the read path: the catalog endpoint may return
/// entries without one and those are dropped by the reader. The role-mapping
/// add endpoint requires both `id` and `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRepresentation {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
