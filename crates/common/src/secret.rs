//! Secret types for protecting sensitive values from accidental logging.
//!
//! This module re-exports types from the [`secrecy`] crate with Token
//! Minter-specific guidance. Use these types for all sensitive values,
//! above all the downstream signing secret.
//!
//! # Compile-Time Safety
//!
//! `SecretBox<T>` and `SecretString` implement `Debug` with redaction, so
//! any code that derives `Debug` on a struct containing secrets
//! automatically gets safe logging behavior. This makes it **impossible**
//! to accidentally log the signing secret via `{:?}` or tracing.
//!
//! # Memory Safety
//!
//! Secrets are automatically zeroized when dropped, preventing sensitive
//! data from lingering in memory after use.
//!
//! # Example
//!
//! ```rust
//! use common::secret::SecretString;
//! use secrecy::ExposeSecret;
//!
//! #[derive(Debug)]
//! struct ServiceConfig {
//!     bind_address: String,
//!     signing_secret: SecretString,  // Safe: Debug shows "[REDACTED]"
//! }
//!
//! let config = ServiceConfig {
//!     bind_address: "0.0.0.0:8083".to_string(),
//!     signing_secret: SecretString::from("shared-hmac-secret"),
//! };
//!
//! // This is safe - the secret is redacted
//! println!("{:?}", config);
//!
//! // To access the actual value, you must explicitly call expose_secret()
//! let secret: &str = config.signing_secret.expose_secret();
//! ```
//!
//! # Usage Guidelines
//!
//! Use `SecretString` for:
//! - The downstream HMAC signing secret
//! - Bearer tokens handled in test fixtures
//! - Any credential read from the environment
//!
//! Use `SecretBox<T>` for:
//! - Custom secret types (e.g., `SecretBox<Vec<u8>>` for binary keys)

// Re-export the main types from secrecy
pub use secrecy::{ExposeSecret, SecretBox, SecretString};
