//! Custom test assertions for expressive tests
//!
//! Provides trait-based assertions for minted tokens. All checks decode
//! the raw JWT segments without verifying the signature, so assertions
//! also work on deliberately expired or mis-signed fixtures.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::Deserialize;

/// JWT header structure
#[derive(Debug, Deserialize)]
struct JwtHeader {
    pub alg: String,
    pub typ: String,
}

/// JWT claims structure
#[derive(Debug, Deserialize)]
struct JwtClaims {
    pub sub: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Custom assertions for minted tokens
///
/// # Example
/// ```rust,ignore
/// token
///     .assert_valid_jwt()
///     .assert_for_subject("uid-123")
///     .assert_role("authenticated")
///     .assert_expires_in(3600);
/// ```
pub trait TokenAssertions {
    /// Assert that the token is a structurally valid HS256 JWT
    fn assert_valid_jwt(&self) -> &Self;

    /// Assert that the token is for the specified subject
    fn assert_for_subject(&self, subject: &str) -> &Self;

    /// Assert that the token carries the specified role claim
    fn assert_role(&self, role: &str) -> &Self;

    /// Assert that the token expires exactly `seconds` after its issue time
    fn assert_expires_in(&self, seconds: i64) -> &Self;
}

fn decode_claims(token: &str) -> JwtClaims {
    let parts: Vec<_> = token.split('.').collect();
    let payload = URL_SAFE_NO_PAD
        .decode(parts[1])
        .expect("Invalid JWT payload");
    serde_json::from_slice(&payload).expect("Failed to parse JWT claims")
}

impl TokenAssertions for String {
    fn assert_valid_jwt(&self) -> &Self {
        let parts: Vec<_> = self.split('.').collect();
        assert_eq!(
            parts.len(),
            3,
            "JWT must have 3 parts (header.payload.signature), got {}",
            parts.len()
        );

        // Decode and validate header
        let header_result = URL_SAFE_NO_PAD.decode(parts[0]);
        assert!(
            header_result.is_ok(),
            "Failed to base64 decode JWT header: {:?}",
            header_result.err()
        );

        let header: Result<JwtHeader, _> = serde_json::from_slice(&header_result.unwrap());
        assert!(
            header.is_ok(),
            "Failed to parse JWT header JSON: {:?}",
            header.err()
        );

        let header = header.unwrap();
        assert_eq!(header.alg, "HS256", "Expected HS256 algorithm");
        assert_eq!(header.typ, "JWT", "Expected JWT type");

        // Decode and validate payload
        let payload_result = URL_SAFE_NO_PAD.decode(parts[1]);
        assert!(
            payload_result.is_ok(),
            "Failed to base64 decode JWT payload: {:?}",
            payload_result.err()
        );

        let claims: Result<JwtClaims, _> = serde_json::from_slice(&payload_result.unwrap());
        assert!(
            claims.is_ok(),
            "Failed to parse JWT claims JSON: {:?}",
            claims.err()
        );

        self
    }

    fn assert_for_subject(&self, subject: &str) -> &Self {
        let claims = decode_claims(self);
        assert_eq!(
            claims.sub, subject,
            "Token subject does not match expected principal"
        );

        self
    }

    fn assert_role(&self, role: &str) -> &Self {
        let claims = decode_claims(self);
        assert_eq!(claims.role, role, "Token role claim mismatch");

        self
    }

    fn assert_expires_in(&self, seconds: i64) -> &Self {
        let claims = decode_claims(self);
        assert_eq!(
            claims.exp - claims.iat,
            seconds,
            "Token lifetime mismatch: iat={}, exp={}",
            claims.iat,
            claims.exp
        );

        self
    }
}
