//! Admin token acquisition via the OpenID Connect password grant.

use crate::error::{AdminError, AdminResult};
use serde::Deserialize;
use tracing::debug;

/// Token endpoint response. Only the access token is consumed; the run is
/// assumed short enough that no refresh is needed.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// Exchange admin credentials for a bearer token.
///
/// POSTs a `grant_type=password` form to the admin realm's token endpoint.
/// Any status >= 400, or a success response without an `access_token`, is an
/// [`AdminError::Auth`]. Single attempt, no retry.
pub async fn acquire_token(
    http: &reqwest::Client,
    base_url: &str,
    admin_realm: &str,
    client_id: &str,
    username: &str,
    password: &str,
) -> AdminResult<String> {
    let token_url = format!(
        "{}/realms/{}/protocol/openid-connect/token",
        base_url.trim_end_matches('/'),
        admin_realm
    );
    debug!("Requesting admin token from {}", token_url);

    let response = http
        .post(&token_url)
        .form(&[
            ("grant_type", "password"),
            ("client_id", client_id),
            ("username", username),
            ("password", password),
        ])
        .send()
        .await?;

    let status = response.status();
    if status.as_u16() >= 400 {
        let body = response.text().await.unwrap_or_default();
        return Err(AdminError::Auth(format!(
            "Token request failed: POST {} -> {}\n{}",
            token_url,
            status.as_u16(),
            body.trim()
        )));
    }

    let token: TokenResponse = response.json().await.map_err(|e| {
        AdminError::Auth(format!("Failed to parse token response: {e}"))
    })?;

    token
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AdminError::Auth("No access_token returned from token endpoint".to_string()))
}
