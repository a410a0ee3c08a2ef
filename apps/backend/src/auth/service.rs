//! Login and token validation.

use std::sync::Arc;

use time::OffsetDateTime;

use super::claims::{Principal, TokenClaims};
use super::credentials::CredentialVerifier;
use super::token::{TokenCodec, TokenError};
use crate::config::security::SecurityConfig;
use crate::errors::{AuthError, ServiceError};
use crate::guard::WorkContext;
use crate::repos::admins::CredentialStore;

pub type Clock = fn() -> OffsetDateTime;

/// Owns the signing key for the life of the process.
#[derive(Clone)]
pub struct AuthService {
    verifier: CredentialVerifier,
    codec: TokenCodec,
    clock: Clock,
}

impl AuthService {
    pub fn new(
        security: &SecurityConfig,
        store: Arc<dyn CredentialStore>,
    ) -> Result<Self, TokenError> {
        Ok(Self {
            verifier: CredentialVerifier::new(store),
            codec: TokenCodec::new(security)?,
            clock: OffsetDateTime::now_utc,
        })
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Verify credentials and issue a token for the matching identity.
    pub async fn login_basic(
        &self,
        ctx: &WorkContext,
        email: &str,
        password: &str,
    ) -> Result<(String, TokenClaims), ServiceError> {
        let identity = self.verifier.verify(ctx, email, password).await?;

        ctx.checkpoint()?;
        let principal = Principal {
            id: identity.id,
            email: identity.email,
        };
        let issued = self
            .codec
            .issue(&principal, (self.clock)())
            .map_err(AuthError::from)?;

        Ok(issued)
    }

    pub fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        if token.is_empty() {
            return Err(AuthError::InvalidToken);
        }
        Ok(self.codec.decode(token, (self.clock)())?)
    }
}
