//! HS256 token codec.
//!
//! The codec owns the signing key. Decoding always verifies the MAC before
//! the payload is deserialised, and checks expiry against the caller's clock
//! instead of the library's so that the boundary is testable.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;
use time::OffsetDateTime;

use super::claims::{Principal, TokenClaims};
use crate::config::security::{SecurityConfig, MAX_TOKEN_TTL};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Malformed, signed with another key, or missing required claims.
    #[error("invalid token")]
    Invalid,
    /// Signature checks out but `now` is past `exp`.
    #[error("expired token")]
    Expired,
    #[error("failed to sign token: {0}")]
    Signing(String),
    #[error("failed to decode token: {0}")]
    Decode(String),
}

#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    algorithm: Algorithm,
    ttl_secs: i64,
}

impl TokenCodec {
    pub fn new(security: &SecurityConfig) -> Result<Self, TokenError> {
        if security.token_secret.is_empty() {
            return Err(TokenError::Signing("signing key is empty".to_string()));
        }
        let ttl_secs = i64::try_from(security.token_ttl.as_secs())
            .ok()
            .filter(|secs| *secs > 0 && secs.unsigned_abs() <= MAX_TOKEN_TTL.as_secs())
            .ok_or_else(|| {
                TokenError::Signing(format!(
                    "token ttl must be between 1 and {} seconds",
                    MAX_TOKEN_TTL.as_secs()
                ))
            })?;

        Ok(Self {
            encoding: EncodingKey::from_secret(&security.token_secret),
            decoding: DecodingKey::from_secret(&security.token_secret),
            algorithm: security.algorithm,
            ttl_secs,
        })
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Sign a token for `principal`, valid from `now` for the configured TTL.
    pub fn issue(
        &self,
        principal: &Principal,
        now: OffsetDateTime,
    ) -> Result<(String, TokenClaims), TokenError> {
        let iat = now.unix_timestamp();
        let exp = iat
            .checked_add(self.ttl_secs)
            .ok_or_else(|| TokenError::Signing("token expiry out of range".to_string()))?;
        let claims = TokenClaims {
            principal_id: principal.id,
            email: principal.email.clone(),
            iat,
            exp,
        };

        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))?;

        Ok((token, claims))
    }

    /// Verify `token` and return its claims.
    ///
    /// A token is still valid at exactly `exp`; it expires one second later.
    pub fn decode(&self, token: &str, now: OffsetDateTime) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        let claims = decode::<TokenClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::InvalidToken
                | JwtErrorKind::InvalidSignature
                | JwtErrorKind::InvalidAlgorithm
                | JwtErrorKind::MissingRequiredClaim(_)
                | JwtErrorKind::ImmatureSignature
                | JwtErrorKind::Base64(_)
                | JwtErrorKind::Json(_)
                | JwtErrorKind::Utf8(_) => TokenError::Invalid,
                JwtErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Decode(e.to_string()),
            })?;

        if now.unix_timestamp() > claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
