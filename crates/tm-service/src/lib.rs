//! Token Minter (TM) Service Library
//!
//! This library mints short-lived HMAC-signed access tokens for callers
//! that the hosting platform has already authenticated, so they can reach
//! a downstream service that trusts the shared signing secret.
//!
//! # Modules
//!
//! - `config` - Service configuration
//! - `crypto` - Token signing and verification (HS256)
//! - `errors` - Error types
//! - `handlers` - HTTP request handlers
//! - `middleware` - Platform identity extraction
//! - `models` - Data models
//! - `observability` - Metrics
//! - `routes` - Router assembly
//! - `services` - Business logic layer

pub mod config;
pub mod crypto;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod routes;
pub mod services;
