use crate::errors::TmError;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Claims carried in minted tokens.
///
/// The claim set is the downstream verifier's contract: exactly `sub`,
/// `role`, `iat`, `exp`, with no additions. The `sub` field contains the
/// caller identity and should not be exposed in logs, so Debug redacts it.
#[derive(Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,  // Subject (authenticated principal)
    pub role: String, // Access tier expected by the downstream verifier
    pub iat: i64,     // Issued at timestamp
    pub exp: i64,     // Expiration timestamp
}

impl fmt::Debug for Claims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Claims")
            .field("sub", &"[REDACTED]")
            .field("role", &self.role)
            .field("iat", &self.iat)
            .field("exp", &self.exp)
            .finish()
    }
}

/// Sign claims into a compact JWT using the shared HMAC secret (HS256).
///
/// The downstream service verifies with the same secret, so the algorithm
/// and claim names here must not drift.
pub fn sign_token(claims: &Claims, secret: &str) -> Result<String, TmError> {
    let header = Header::new(Algorithm::HS256);

    encode(&header, claims, &EncodingKey::from_secret(secret.as_bytes())).map_err(|e| {
        tracing::error!(error = %e, "JWT signing operation failed");
        TmError::Signing(format!("JWT signing operation failed: {}", e))
    })
}

/// Verify a token with the shared HMAC secret and return its claims.
///
/// Validates the signature (algorithm pinned to HS256) and the `exp`
/// claim. Mirrors what the downstream verifier does with the same secret.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, TmError> {
    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!(target: "crypto", error = %e, "Token verification failed");
        TmError::InvalidToken("The token is invalid or expired".to_string())
    })
}
