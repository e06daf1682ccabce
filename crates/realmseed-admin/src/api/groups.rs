//! Group operations: lookup by path and membership add.

use crate::client::AdminClient;
use crate::error::{AdminError, AdminResult};
use crate::models::GroupRepresentation;
use tracing::debug;

/// Normalize a group path to start with `/`.
#[must_use]
pub fn normalize_group_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

impl AdminClient {
    /// Resolve a group by its absolute slash-path.
    ///
    /// Tries the dedicated `group-by-path` endpoint first. Servers that do
    /// not support it answer 404 or 405, in which case the entire group tree
    /// is fetched and walked depth-first, comparing paths reconstructed from
    /// segment names. Any other error status is fatal.
    pub async fn group_by_path(
        &self,
        realm: &str,
        path: &str,
    ) -> AdminResult<Option<GroupRepresentation>> {
        let path = normalize_group_path(path);
        let url = format!(
            "{}/group-by-path/{}",
            self.realm_url(realm),
            path.trim_start_matches('/')
        );

        let response = self.get_raw(&url).await?;
        let status = response.status();
        if status.is_success() {
            let group = AdminClient::read_json_or_default::<Option<GroupRepresentation>>(
                &url, response,
            )
            .await?;
            return Ok(group);
        }
        if status != reqwest::StatusCode::NOT_FOUND
            && status != reqwest::StatusCode::METHOD_NOT_ALLOWED
        {
            let body = response.text().await.unwrap_or_default();
            return Err(AdminError::Api {
                method: "GET",
                url,
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        debug!("group-by-path unsupported, falling back to tree search");
        let tree_url = format!("{}/groups", self.realm_url(realm));
        let tree: Vec<GroupRepresentation> = self
            .get_json_with_query(&tree_url, &[("briefRepresentation", "false")])
            .await?;
        Ok(find_by_path(&tree, "", &path).cloned())
    }

    /// Add a user to a group. The server treats a duplicate add as a no-op,
    /// so callers do not pre-check membership.
    pub async fn add_user_to_group(
        &self,
        realm: &str,
        user_id: &str,
        group_id: &str,
    ) -> AdminResult<()> {
        let url = format!(
            "{}/users/{}/groups/{}",
            self.realm_url(realm),
            user_id,
            group_id
        );
        self.put_empty(&url).await
    }
}

/// Depth-first search of the group tree for a reconstructed path.
fn find_by_path<'a>(
    groups: &'a [GroupRepresentation],
    prefix: &str,
    target: &str,
) -> Option<&'a GroupRepresentation> {
    for group in groups {
        let current = format!("{}/{}", prefix, group.name);
        if current == target {
            return Some(group);
        }
        if let Some(found) = find_by_path(&group.sub_groups, &current, target) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: &str, name: &str, sub: Vec<GroupRepresentation>) -> GroupRepresentation {
        GroupRepresentation {
            id: id.to_string(),
            name: name.to_string(),
            path: None,
            sub_groups: sub,
        }
    }

    #[test]
    fn normalizes_missing_leading_slash() {
        assert_eq!(normalize_group_path("team/eng"), "/team/eng");
        assert_eq!(normalize_group_path("/team/eng"), "/team/eng");
    }

    #[test]
    fn finds_top_level_group() {
        let tree = vec![group("g1", "eng", vec![])];
        let found = find_by_path(&tree, "", "/eng").unwrap();
        assert_eq!(found.id, "g1");
    }

    #[test]
    fn finds_nested_group_by_reconstructed_path() {
        let tree = vec![group(
            "g1",
            "team",
            vec![group("g2", "eng", vec![group("g3", "backend", vec![])])],
        )];
        assert_eq!(find_by_path(&tree, "", "/team/eng").unwrap().id, "g2");
        assert_eq!(
            find_by_path(&tree, "", "/team/eng/backend").unwrap().id,
            "g3"
        );
    }

    #[test]
    fn absent_path_is_none() {
        let tree = vec![group("g1", "team", vec![group("g2", "eng", vec![])])];
        assert!(find_by_path(&tree, "", "/team/sales").is_none());
        // A subgroup name alone does not match without its full path.
        assert!(find_by_path(&tree, "", "/eng").is_none());
    }
}
