//! Token acquisition tests for the password grant.

use realmseed_admin::auth::acquire_token;
use realmseed_admin::AdminError;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn acquires_token_via_password_grant() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/realms/master/protocol/openid-connect/token"))
        .and(body_string_contains("grant_type=password"))
        .and(body_string_contains("client_id=admin-cli"))
        .and(body_string_contains("username=admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-123",
            "expires_in": 60,
            "token_type": "Bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = acquire_token(
        &reqwest::Client::new(),
        &server.uri(),
        "master",
        "admin-cli",
        "admin",
        "pw",
    )
    .await
    .unwrap();

    assert_eq!(token, "tok-123");
}

#[tokio::test]
async fn token_rejection_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/realms/master/protocol/openid-connect/token"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "invalid_grant"})),
        )
        .mount(&server)
        .await;

    let err = acquire_token(
        &reqwest::Client::new(),
        &server.uri(),
        "master",
        "admin-cli",
        "admin",
        "wrong",
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AdminError::Auth(_)));
    let message = err.to_string();
    assert!(message.contains("401"), "missing status: {message}");
    assert!(message.contains("invalid_grant"), "missing body: {message}");
}

#[tokio::test]
async fn missing_access_token_is_an_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/realms/master/protocol/openid-connect/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token_type": "Bearer"})))
        .mount(&server)
        .await;

    let err = acquire_token(
        &reqwest::Client::new(),
        &server.uri(),
        "master",
        "admin-cli",
        "admin",
        "pw",
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AdminError::Auth(_)));
    assert!(err.to_string().contains("No access_token"));
}

#[tokio::test]
async fn trailing_slash_on_base_url_is_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/realms/master/protocol/openid-connect/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access_token": "tok"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}/", server.uri());
    let token = acquire_token(
        &reqwest::Client::new(),
        &base,
        "master",
        "admin-cli",
        "admin",
        "pw",
    )
    .await
    .unwrap();
    assert_eq!(token, "tok");
}
