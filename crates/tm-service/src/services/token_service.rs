use crate::crypto::{self, Claims};
use crate::errors::TmError;
use crate::models::TokenResponse;
use chrono::{DateTime, Utc};
use common::secret::{ExposeSecret, SecretString};

const TOKEN_EXPIRY_SECONDS: i64 = 3600; // 1 hour

/// Access tier the downstream verifier requires. Every caller gets the
/// same fixed tier; differentiated roles are a downstream policy decision,
/// not something derived from caller attributes here.
const ROLE_AUTHENTICATED: &str = "authenticated";

/// Mint a downstream access token for an authenticated principal.
///
/// Validates the principal and the signing secret, builds the claims
/// payload, and signs it with HS256. The clock is injected so callers
/// (and tests) control the instant; the host adapter passes `Utc::now()`.
///
/// Fails with `Unauthenticated` when the principal is empty and with a
/// `Configuration` error when the secret is empty — the latter is a server
/// misconfiguration, logged in full server-side and surfaced to the caller
/// only as a generic internal error. Signing never runs on either failure.
pub fn mint_token(
    principal: &str,
    secret: &SecretString,
    now: DateTime<Utc>,
) -> Result<TokenResponse, TmError> {
    if principal.is_empty() {
        return Err(TmError::Unauthenticated);
    }

    if secret.expose_secret().is_empty() {
        tracing::error!("Signing secret is missing or empty; refusing to mint");
        return Err(TmError::Configuration(
            "signing secret is missing or empty".to_string(),
        ));
    }

    let iat = now.timestamp();
    let claims = Claims {
        sub: principal.to_string(),
        role: ROLE_AUTHENTICATED.to_string(),
        iat,
        exp: iat + TOKEN_EXPIRY_SECONDS,
    };

    let token = crypto::sign_token(&claims, secret.expose_secret())?;

    Ok(TokenResponse {
        access_token: token,
    })
}
