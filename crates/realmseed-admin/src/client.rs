//! Authenticated Admin API transport (reqwest-based).

use crate::error::{AdminError, AdminResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Default per-request timeout, matching the original seeding tool.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Keycloak Admin REST API.
///
/// Holds the normalized base URL, the bearer token obtained once per run,
/// and a `reqwest::Client` with a fixed timeout. Every request that comes
/// back with a status >= 400 is surfaced as [`AdminError::Api`] carrying the
/// method, URL, status, and response body; a 204 or empty success body is
/// "no value", not an error.
#[derive(Clone)]
pub struct AdminClient {
    base_url: String,
    token: String,
    http: reqwest::Client,
}

// The bearer token is redacted so clients never leak credentials into logs.
impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl AdminClient {
    /// Create a client with the given bearer token and request timeout.
    pub fn new(base_url: &str, token: String, timeout: Duration) -> AdminResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AdminError::InvalidConfig(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self::with_http_client(base_url, token, http))
    }

    /// Create a client with a pre-built `reqwest::Client` (for testing).
    #[must_use]
    pub fn with_http_client(base_url: &str, token: String, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            http,
        }
    }

    /// The normalized base URL (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Admin base path for a realm, e.g. `{base}/admin/realms/demo`.
    pub(crate) fn realm_url(&self, realm: &str) -> String {
        format!("{}/admin/realms/{}", self.base_url, realm)
    }

    // ── Request helpers ───────────────────────────────────────────────

    /// GET a JSON value; an empty or 204 response yields `T::default()`.
    pub(crate) async fn get_json<T>(&self, url: &str) -> AdminResult<T>
    where
        T: DeserializeOwned + Default,
    {
        self.get_json_with_query::<T, &str>(url, &[]).await
    }

    /// GET with query parameters; an empty or 204 response yields `T::default()`.
    pub(crate) async fn get_json_with_query<T, V>(
        &self,
        url: &str,
        query: &[(&str, V)],
    ) -> AdminResult<T>
    where
        T: DeserializeOwned + Default,
        V: Serialize,
    {
        debug!("GET {}", url);
        let mut builder = self.http.get(url).bearer_auth(&self.token);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        let response = builder.send().await?;
        let response = self.check_status("GET", url, response).await?;
        Self::read_json_or_default(url, response).await
    }

    /// Raw GET returning the response, with no status handling. Used by the
    /// group-by-path lookup, which treats 404/405 as "endpoint unsupported"
    /// rather than fatal.
    pub(crate) async fn get_raw(&self, url: &str) -> AdminResult<reqwest::Response> {
        debug!("GET {}", url);
        let response = self.http.get(url).bearer_auth(&self.token).send().await?;
        Ok(response)
    }

    /// POST a JSON body, returning the raw response after the status check.
    /// The caller extracts what it needs (e.g. the `Location` header).
    pub(crate) async fn post_json<B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> AdminResult<reqwest::Response> {
        let response = self.post_raw(url, body).await?;
        self.check_status("POST", url, response).await
    }

    /// POST with no status handling, for callers that special-case statuses.
    pub(crate) async fn post_raw<B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> AdminResult<reqwest::Response> {
        debug!("POST {}", url);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;
        Ok(response)
    }

    /// PUT a JSON body, discarding any response payload.
    pub(crate) async fn put_json<B: Serialize>(&self, url: &str, body: &B) -> AdminResult<()> {
        debug!("PUT {}", url);
        let response = self
            .http
            .put(url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;
        self.check_status("PUT", url, response).await?;
        Ok(())
    }

    /// PUT with an empty body, discarding any response payload.
    pub(crate) async fn put_empty(&self, url: &str) -> AdminResult<()> {
        debug!("PUT {}", url);
        let response = self.http.put(url).bearer_auth(&self.token).send().await?;
        self.check_status("PUT", url, response).await?;
        Ok(())
    }

    // ── Response handling ─────────────────────────────────────────────

    /// Map any status >= 400 to [`AdminError::Api`] with the response body.
    pub(crate) async fn check_status(
        &self,
        method: &'static str,
        url: &str,
        response: reqwest::Response,
    ) -> AdminResult<reqwest::Response> {
        let status = response.status();
        if status.as_u16() < 400 {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(AdminError::Api {
            method,
            url: url.to_string(),
            status: status.as_u16(),
            body: body.trim().to_string(),
        })
    }

    pub(crate) async fn read_json_or_default<T>(
        url: &str,
        response: reqwest::Response,
    ) -> AdminResult<T>
    where
        T: DeserializeOwned + Default,
    {
        if response.status() == reqwest::StatusCode::NO_CONTENT {
            return Ok(T::default());
        }
        let body = response.text().await?;
        if body.is_empty() {
            return Ok(T::default());
        }
        serde_json::from_str(&body).map_err(|e| AdminError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
