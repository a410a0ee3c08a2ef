//! Domain-level error types used across services and stores.
//!
//! These errors are HTTP-agnostic. Handlers never turn them into responses
//! directly; they hand them to [`crate::errors::ErrorClassifier`], which is the
//! single point of translation to client-facing categories.

use thiserror::Error;

use crate::auth::token::TokenError;

/// Tag for every error value the classifier knows how to categorise.
///
/// Errors without a kind (storage failures, signing failures, lost workers)
/// are internal by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidEmail,
    InvalidPassword,
    InvalidToken,
    ExpiredToken,
    RequestTimeout,
    BadRequest,
    RouteNotFound,
    MethodNotAllowed,
    InvalidGameId,
    InvalidGameNames,
    InvalidGameIcons,
    GameNotFound,
}

/// Failures reported by a persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store query failed: {0}")]
    Query(String),
}

impl From<sea_orm::DbErr> for StoreError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e {
            sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_) => {
                StoreError::Unavailable(e.to_string())
            }
            other => StoreError::Query(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid password")]
    InvalidPassword,
    #[error("invalid token")]
    InvalidToken,
    #[error("expired token")]
    ExpiredToken,
    #[error("token signing failed: {0}")]
    Signing(String),
    #[error("token decoding failed: {0}")]
    Decode(String),
}

impl From<TokenError> for AuthError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Invalid => AuthError::InvalidToken,
            TokenError::Expired => AuthError::ExpiredToken,
            TokenError::Signing(detail) => AuthError::Signing(detail),
            TokenError::Decode(detail) => AuthError::Decode(detail),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid game id: {0}")]
    InvalidId(String),
    #[error("invalid game names")]
    InvalidNames,
    #[error("invalid game icons")]
    InvalidIcons,
    #[error("game {0} not found")]
    NotFound(i64),
}

/// Errors raised by the request execution guard itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// The deadline fired; raised by workers at a cancellation checkpoint.
    #[error("request cancelled")]
    Cancelled,
    /// The worker panicked or was aborted before producing a result.
    #[error("worker lost: {0}")]
    WorkerLost(String),
}

/// Aggregate error returned by every guarded unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Guard(#[from] GuardError),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("request timeout")]
    RequestTimeout,
    #[error("no route for path")]
    RouteNotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
}

impl ServiceError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::BadRequest(detail.into())
    }

    /// The classifier key for this error, or `None` if it is internal.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ServiceError::Auth(e) => match e {
                AuthError::InvalidEmail => Some(ErrorKind::InvalidEmail),
                AuthError::InvalidPassword => Some(ErrorKind::InvalidPassword),
                AuthError::InvalidToken => Some(ErrorKind::InvalidToken),
                AuthError::ExpiredToken => Some(ErrorKind::ExpiredToken),
                AuthError::Signing(_) | AuthError::Decode(_) => None,
            },
            ServiceError::Game(e) => match e {
                GameError::InvalidId(_) => Some(ErrorKind::InvalidGameId),
                GameError::InvalidNames => Some(ErrorKind::InvalidGameNames),
                GameError::InvalidIcons => Some(ErrorKind::InvalidGameIcons),
                GameError::NotFound(_) => Some(ErrorKind::GameNotFound),
            },
            ServiceError::Store(_) => None,
            ServiceError::Guard(GuardError::Cancelled) => Some(ErrorKind::RequestTimeout),
            ServiceError::Guard(GuardError::WorkerLost(_)) => None,
            ServiceError::BadRequest(_) => Some(ErrorKind::BadRequest),
            ServiceError::RequestTimeout => Some(ErrorKind::RequestTimeout),
            ServiceError::RouteNotFound => Some(ErrorKind::RouteNotFound),
            ServiceError::MethodNotAllowed => Some(ErrorKind::MethodNotAllowed),
        }
    }
}
