//! E2E tests for the token mint endpoint.
//!
//! The suites drive a spawned real server over HTTP and assert the wire
//! contract: success shape, the unauthenticated path, and the
//! misconfigured-server path.
//!
//! ## Test Naming
//!
//! Tests follow the convention: `test_<feature>_<scenario>_<expected_result>`

#![allow(clippy::unwrap_used, clippy::expect_used)]

use reqwest::StatusCode;
use tm_service::crypto;
use tm_service::errors::TmError;
use tm_service::middleware::auth::PRINCIPAL_HEADER;
use tm_test_utils::assertions::TokenAssertions;
use tm_test_utils::server_harness::TestMintServer;

/// Happy path: an authenticated caller receives a signed token whose
/// claims satisfy the shape invariants.
#[tokio::test]
async fn test_mint_happy_path() -> Result<(), anyhow::Error> {
    // Arrange
    let server = TestMintServer::spawn("test-secret").await?;

    // Act
    let response = server
        .client()
        .post(format!("{}/api/v1/token", server.url()))
        .header(PRINCIPAL_HEADER, "uid-123")
        .send()
        .await?;

    // Assert
    assert_eq!(response.status(), StatusCode::OK, "Mint should succeed");

    let body: serde_json::Value = response.json().await?;
    let object = body.as_object().expect("Response should be a JSON object");
    assert_eq!(
        object.len(),
        1,
        "Success response carries exactly the access_token field"
    );

    let token = object["access_token"]
        .as_str()
        .expect("access_token should be a string")
        .to_string();

    token
        .assert_valid_jwt()
        .assert_for_subject("uid-123")
        .assert_role("authenticated")
        .assert_expires_in(3600);

    Ok(())
}

/// The minted token verifies with the shared secret and with nothing else,
/// exactly as the downstream service will check it.
#[tokio::test]
async fn test_mint_token_verifies_with_shared_secret() -> Result<(), anyhow::Error> {
    // Arrange
    let server = TestMintServer::spawn("test-secret").await?;

    // Act
    let response = server
        .client()
        .post(format!("{}/api/v1/token", server.url()))
        .header(PRINCIPAL_HEADER, "uid-123")
        .send()
        .await?;
    let body: serde_json::Value = response.json().await?;
    let token = body["access_token"].as_str().unwrap();

    // Assert
    let claims = crypto::verify_token(token, "test-secret")
        .expect("Token must verify with the minting secret");
    assert_eq!(claims.sub, "uid-123");
    assert_eq!(claims.role, "authenticated");
    assert_eq!(claims.exp - claims.iat, 3600);

    let err = crypto::verify_token(token, "wrong-secret")
        .expect_err("Token must not verify with another secret");
    assert!(matches!(err, TmError::InvalidToken(_)));

    Ok(())
}

/// A request without the platform identity header is unauthenticated:
/// 401, classified error body, and no token anywhere in the response.
#[tokio::test]
async fn test_mint_without_identity_header_returns_401() -> Result<(), anyhow::Error> {
    // Arrange
    let server = TestMintServer::spawn("test-secret").await?;

    // Act
    let response = server
        .client()
        .post(format!("{}/api/v1/token", server.url()))
        .send()
        .await?;

    // Assert
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["error"]["code"].as_str(), Some("UNAUTHENTICATED"));
    assert!(
        body["error"]["message"].as_str().is_some(),
        "Error carries a human-readable message"
    );
    assert!(
        body.get("access_token").is_none(),
        "No token may be produced for an unauthenticated request"
    );

    Ok(())
}

/// An empty identity header value is indistinguishable from no
/// authentication at all.
#[tokio::test]
async fn test_mint_with_empty_identity_header_returns_401() -> Result<(), anyhow::Error> {
    // Arrange
    let server = TestMintServer::spawn("test-secret").await?;

    // Act
    let response = server
        .client()
        .post(format!("{}/api/v1/token", server.url()))
        .header(PRINCIPAL_HEADER, "")
        .send()
        .await?;

    // Assert
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["error"]["code"].as_str(), Some("UNAUTHENTICATED"));

    Ok(())
}

/// A server whose signing secret is empty fails the request with a
/// generic internal error that carries no configuration detail.
#[tokio::test]
async fn test_mint_with_misconfigured_secret_returns_500() -> Result<(), anyhow::Error> {
    // Arrange - harness builds the config directly, bypassing the startup
    // validation, to simulate a misconfigured deployment
    let server = TestMintServer::spawn("").await?;

    // Act
    let response = server
        .client()
        .post(format!("{}/api/v1/token", server.url()))
        .header(PRINCIPAL_HEADER, "uid-123")
        .send()
        .await?;

    // Assert
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["error"]["code"].as_str(), Some("INTERNAL_ERROR"));
    assert_eq!(
        body["error"]["message"].as_str(),
        Some("An internal error occurred"),
        "Internal detail stays server-side"
    );
    assert!(body.get("access_token").is_none());

    Ok(())
}

/// Two mints for the same principal produce distinct tokens that both
/// satisfy the claim-shape invariants.
#[tokio::test]
async fn test_mint_twice_produces_distinct_valid_tokens() -> Result<(), anyhow::Error> {
    // Arrange
    let server = TestMintServer::spawn("test-secret").await?;

    let mint = || async {
        let response = server
            .client()
            .post(format!("{}/api/v1/token", server.url()))
            .header(PRINCIPAL_HEADER, "uid-123")
            .send()
            .await?;
        let body: serde_json::Value = response.json().await?;
        Ok::<String, anyhow::Error>(body["access_token"].as_str().unwrap().to_string())
    };

    // Act
    let first = mint().await?;
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    let second = mint().await?;

    // Assert
    assert_ne!(first, second, "Tokens minted at different instants differ");
    for token in [&first, &second] {
        token
            .assert_valid_jwt()
            .assert_for_subject("uid-123")
            .assert_role("authenticated")
            .assert_expires_in(3600);
    }

    Ok(())
}
