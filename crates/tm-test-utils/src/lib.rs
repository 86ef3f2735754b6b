//! # TM Test Utilities
//!
//! Shared test utilities for the Token Minter (TM) service.
//!
//! This crate provides:
//! - Server test harness (TestMintServer for E2E tests)
//! - Custom assertions (TokenAssertions trait)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tm_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), anyhow::Error> {
//!     let server = TestMintServer::spawn("test-secret").await?;
//!
//!     let response = server
//!         .client()
//!         .post(format!("{}/api/v1/token", server.url()))
//!         .header("x-authenticated-principal", "uid-123")
//!         .send()
//!         .await?;
//!
//!     let body: serde_json::Value = response.json().await?;
//!     let token = body["access_token"].as_str().unwrap().to_string();
//!     token.assert_valid_jwt().assert_for_subject("uid-123");
//!     Ok(())
//! }
//! ```

pub mod assertions;
pub mod server_harness;

// Re-export commonly used items
pub use assertions::*;
pub use server_harness::*;
