//! Metrics definitions for the Token Minter service
//!
//! All metrics follow Prometheus naming conventions:
//! - `tm_` prefix for Token Minter
//! - `_total` suffix for counters
//! - `_seconds` suffix for duration histograms
//!
//! # Cardinality
//!
//! Labels are bounded to prevent cardinality explosion:
//! - `status`: 3 values (success, unauthenticated, error)

use metrics::{counter, histogram};
use std::time::Duration;

/// Record token mint duration and outcome
///
/// Metric: `tm_token_mint_duration_seconds`, `tm_token_mint_total`
/// Labels: `status`
pub fn record_token_mint(status: &str, duration: Duration) {
    histogram!("tm_token_mint_duration_seconds", "status" => status.to_string())
        .record(duration.as_secs_f64());

    counter!("tm_token_mint_total", "status" => status.to_string()).increment(1);
}
