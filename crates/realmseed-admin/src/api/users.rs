//! User operations: search, create, update, password reset.

use crate::client::AdminClient;
use crate::error::{AdminError, AdminResult};
use crate::models::{CredentialRepresentation, UserRepresentation};

impl AdminClient {
    /// Find an existing user's id by username.
    ///
    /// The server-side `username` filter is a substring match, so the results
    /// are narrowed to a case-insensitive exact match client-side.
    pub async fn find_user_id(&self, realm: &str, username: &str) -> AdminResult<Option<String>> {
        let url = format!("{}/users", self.realm_url(realm));
        let users: Vec<UserRepresentation> = self
            .get_json_with_query(&url, &[("username", username)])
            .await?;

        let wanted = username.to_lowercase();
        Ok(users.into_iter().find_map(|u| {
            let matches = u
                .username
                .as_deref()
                .is_some_and(|n| n.to_lowercase() == wanted);
            if matches {
                u.id
            } else {
                None
            }
        }))
    }

    /// Create a user and return the server-assigned id.
    ///
    /// The id is taken from the `Location` header of the 201 response; if the
    /// header is missing or malformed the user is re-queried by username. A
    /// 409 means the user appeared between resolve and create, which this
    /// tool treats as an unexpected race, not a convergence case.
    pub async fn create_user(
        &self,
        realm: &str,
        repr: &UserRepresentation,
    ) -> AdminResult<String> {
        let username = repr.username.clone().unwrap_or_default();
        let url = format!("{}/users", self.realm_url(realm));

        let response = self.post_raw(&url, repr).await?;
        if response.status() == reqwest::StatusCode::CONFLICT {
            return Err(AdminError::Conflict(username));
        }
        let response = self.check_status("POST", &url, response).await?;

        let location = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if let Some(id) = id_from_location(&location) {
            return Ok(id);
        }

        // No usable Location header; fall back to a search by username.
        match self.find_user_id(realm, &username).await? {
            Some(id) => Ok(id),
            None => Err(AdminError::IdDiscovery(username)),
        }
    }

    /// Full-replace update of a user's profile fields.
    pub async fn update_user(
        &self,
        realm: &str,
        user_id: &str,
        repr: &UserRepresentation,
    ) -> AdminResult<()> {
        let url = format!("{}/users/{}", self.realm_url(realm), user_id);
        self.put_json(&url, repr).await
    }

    /// Force-set a user's password. Always overwrites; passwords cannot be
    /// read back for comparison.
    pub async fn reset_password(
        &self,
        realm: &str,
        user_id: &str,
        value: &str,
        temporary: bool,
    ) -> AdminResult<()> {
        let url = format!("{}/users/{}/reset-password", self.realm_url(realm), user_id);
        let payload = CredentialRepresentation::password(value, temporary);
        self.put_json(&url, &payload).await
    }
}

/// Extract the new user id from a `Location` reference such as
/// `http://kc/admin/realms/demo/users/5f1e…`.
fn id_from_location(location: &str) -> Option<String> {
    let idx = location.rfind("/users/")?;
    let id = &location[idx + "/users/".len()..];
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
