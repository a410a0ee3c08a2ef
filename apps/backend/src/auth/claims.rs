//! Claims carried inside an issued token.

use serde::{Deserialize, Serialize};

/// The authenticated principal a token speaks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: i64,
    pub email: String,
}

/// Token payload. `exp` is always `iat + ttl`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub principal_id: i64,
    pub email: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl TokenClaims {
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.principal_id,
            email: self.email.clone(),
        }
    }
}
