use common::secret::SecretString;
use std::collections::HashMap;
use std::env;
use thiserror::Error;

/// Default HTTP listen address when `BIND_ADDRESS` is not set.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8083";

/// Environment variable carrying the shared downstream signing secret.
pub const SIGNING_SECRET_VAR: &str = "TM_SIGNING_SECRET";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    /// Shared HMAC secret trusted by the downstream verifier. Held as a
    /// `SecretString` so Debug output and logs redact it.
    pub signing_secret: SecretString,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Signing secret must not be empty")]
    EmptySigningSecret,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing)
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let signing_secret = vars
            .get(SIGNING_SECRET_VAR)
            .ok_or_else(|| ConfigError::MissingEnvVar(SIGNING_SECRET_VAR.to_string()))?;

        if signing_secret.is_empty() {
            return Err(ConfigError::EmptySigningSecret);
        }

        Ok(Config {
            bind_address,
            signing_secret: SecretString::from(signing_secret.clone()),
        })
    }
}
