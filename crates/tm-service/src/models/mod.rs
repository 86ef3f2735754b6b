use serde::{Deserialize, Serialize};
use std::fmt;

/// Successful mint response. The downstream client contract is a single
/// field, so nothing else is serialized here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// The authenticated caller identity, attached to the request by the
/// identity middleware once the platform's header has been validated as
/// present and non-empty.
///
/// The inner value is an opaque identifier for a real user, so Debug
/// redacts it.
#[derive(Clone)]
pub struct Principal(String);

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Principal").field(&"[REDACTED]").finish()
    }
}
