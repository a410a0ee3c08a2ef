use std::fmt;
use std::time::Duration;

use jsonwebtoken::Algorithm;

use super::{env_lookup, must_var, Lookup};
use crate::error::AppError;

/// Longest token lifetime accepted; keeps `iat + ttl` inside the timestamp range.
pub const MAX_TOKEN_TTL: Duration = Duration::from_secs(10 * 365 * 24 * 60 * 60);

/// Token signing configuration. Immutable for the process lifetime.
#[derive(Clone)]
pub struct SecurityConfig {
    /// Secret key for signing and verifying tokens
    pub token_secret: Vec<u8>,
    /// Lifetime of an issued token
    pub token_ttl: Duration,
    /// MAC algorithm (HS256)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    pub fn new(token_secret: impl Into<Vec<u8>>, token_ttl: Duration) -> Self {
        Self {
            token_secret: token_secret.into(),
            token_ttl,
            algorithm: Algorithm::HS256,
        }
    }

    /// Load from `TOKEN_SECRET_KEY` and `TOKEN_TTL_SECONDS`; both are required.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Lookup) -> Result<Self, AppError> {
        let secret = must_var(&lookup, "TOKEN_SECRET_KEY")?;
        let ttl_raw = must_var(&lookup, "TOKEN_TTL_SECONDS")?;
        let ttl_secs = ttl_raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| {
                AppError::config(format!(
                    "TOKEN_TTL_SECONDS must be a positive integer, got '{ttl_raw}'"
                ))
            })?;
        if ttl_secs > MAX_TOKEN_TTL.as_secs() {
            return Err(AppError::config(format!(
                "TOKEN_TTL_SECONDS must not exceed {}, got '{ttl_raw}'",
                MAX_TOKEN_TTL.as_secs()
            )));
        }

        Ok(Self::new(secret.into_bytes(), Duration::from_secs(ttl_secs)))
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("algorithm", &self.algorithm)
            .finish()
    }
}
