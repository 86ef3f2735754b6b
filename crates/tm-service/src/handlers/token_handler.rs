use crate::config::Config;
use crate::errors::TmError;
use crate::models::{Principal, TokenResponse};
use crate::observability::metrics::record_token_mint;
use crate::services::token_service;
use axum::{extract::State, Extension, Json};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

/// Handle a token mint request
///
/// POST /api/v1/token
///
/// The identity middleware attaches a [`Principal`] extension when the
/// platform forwarded an authenticated caller; its absence means the
/// request is unauthenticated.
pub async fn handle_mint_token(
    State(state): State<Arc<AppState>>,
    principal: Option<Extension<Principal>>,
) -> Result<Json<TokenResponse>, TmError> {
    let start = Instant::now();

    let Some(Extension(principal)) = principal else {
        record_token_mint("unauthenticated", start.elapsed());
        return Err(TmError::Unauthenticated);
    };

    let result = token_service::mint_token(
        principal.as_str(),
        &state.config.signing_secret,
        Utc::now(),
    );

    let status = if result.is_ok() { "success" } else { "error" };
    record_token_mint(status, start.elapsed());

    result.map(Json)
}
