//! Integration tests for the liveness probe and metrics exposition.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use reqwest::StatusCode;
use tm_service::middleware::auth::PRINCIPAL_HEADER;
use tm_test_utils::server_harness::TestMintServer;

/// The liveness probe should always return 200 OK as long as the process
/// is running and able to handle HTTP requests.
#[tokio::test]
async fn test_health_endpoint_returns_ok() -> Result<(), anyhow::Error> {
    // Arrange
    let server = TestMintServer::spawn("test-secret").await?;

    // Act
    let response = server
        .client()
        .get(format!("{}/health", server.url()))
        .send()
        .await?;

    // Assert
    assert_eq!(
        response.status(),
        StatusCode::OK,
        "Health check should return 200 OK"
    );

    let body = response.text().await?;
    assert_eq!(body, "OK", "Health check body should be 'OK'");

    Ok(())
}

/// The metrics endpoint renders Prometheus text exposition.
///
/// Note: recorder installation is process-global, so the mint counter may
/// land in another harness instance's recorder when suites share the
/// process. This test only pins down the endpoint contract.
#[tokio::test]
async fn test_metrics_endpoint_returns_exposition() -> Result<(), anyhow::Error> {
    // Arrange
    let server = TestMintServer::spawn("test-secret").await?;

    // Mint once so the recorder has seen traffic
    server
        .client()
        .post(format!("{}/api/v1/token", server.url()))
        .header(PRINCIPAL_HEADER, "uid-123")
        .send()
        .await?;

    // Act
    let response = server
        .client()
        .get(format!("{}/metrics", server.url()))
        .send()
        .await?;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}
