//! Group representation.

use serde::{Deserialize, Serialize};

/// A group in the realm's hierarchy.
///
/// Identified by an opaque server id and an absolute `/`-joined path of
/// segment names. `sub_groups` is populated by the full-tree listing used by
/// the path-lookup fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRepresentation {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_groups: Vec<GroupRepresentation>,
}
