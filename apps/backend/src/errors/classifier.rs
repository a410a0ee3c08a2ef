//! Translation of domain errors into client-facing categories.
//!
//! The lookup table is built once at startup and injected through
//! [`crate::state::app_state::AppState`]; nothing mutates it afterwards.

use std::collections::HashMap;

use actix_web::http::StatusCode;
use tracing::error;

use super::domain::{ErrorKind, ServiceError};
use super::error_code::ErrorCode;
use crate::error::AppError;
use crate::logging::redact::Redacted;

/// Client-facing category: the code in the body and the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub code: ErrorCode,
    pub status: StatusCode,
}

impl Category {
    pub const fn new(code: ErrorCode, status: StatusCode) -> Self {
        Self { code, status }
    }
}

/// Maps error kinds to categories; unknown errors become `INTERNAL_SERVER_ERROR`.
#[derive(Debug, Clone)]
pub struct ErrorClassifier {
    table: HashMap<ErrorKind, Category>,
}

impl ErrorClassifier {
    pub fn new(entries: impl IntoIterator<Item = (ErrorKind, Category)>) -> Self {
        Self {
            table: entries.into_iter().collect(),
        }
    }

    /// The table served by the HTTP API.
    pub fn standard() -> Self {
        use ErrorKind as K;

        Self::new([
            (K::InvalidEmail, Category::new(ErrorCode::InvalidEmail, StatusCode::BAD_REQUEST)),
            (K::InvalidPassword, Category::new(ErrorCode::InvalidPassword, StatusCode::BAD_REQUEST)),
            (K::InvalidToken, Category::new(ErrorCode::InvalidToken, StatusCode::UNAUTHORIZED)),
            (K::ExpiredToken, Category::new(ErrorCode::ExpiredToken, StatusCode::UNAUTHORIZED)),
            (K::RequestTimeout, Category::new(ErrorCode::RequestTimeout, StatusCode::GATEWAY_TIMEOUT)),
            (K::BadRequest, Category::new(ErrorCode::BadRequest, StatusCode::BAD_REQUEST)),
            (K::RouteNotFound, Category::new(ErrorCode::NotFound, StatusCode::NOT_FOUND)),
            (K::MethodNotAllowed, Category::new(ErrorCode::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED)),
            (K::InvalidGameId, Category::new(ErrorCode::InvalidGameId, StatusCode::BAD_REQUEST)),
            (K::InvalidGameNames, Category::new(ErrorCode::InvalidGameNames, StatusCode::BAD_REQUEST)),
            (K::InvalidGameIcons, Category::new(ErrorCode::InvalidGameIcons, StatusCode::BAD_REQUEST)),
            (K::GameNotFound, Category::new(ErrorCode::GameNotFound, StatusCode::NOT_FOUND)),
        ])
    }

    pub fn category(&self, kind: ErrorKind) -> Option<Category> {
        self.table.get(&kind).copied()
    }

    /// Classify `err` for the client.
    ///
    /// Only errors that fall through to `INTERNAL_SERVER_ERROR` are logged;
    /// client faults are expected and stay quiet.
    pub fn classify(&self, err: &ServiceError) -> AppError {
        match err.kind().and_then(|kind| self.category(kind)) {
            Some(category) => AppError::client(category.code, category.status, err.to_string()),
            None => {
                let cause = err.to_string();
                error!(error = %Redacted(&cause), "internal error while handling request");
                AppError::internal()
            }
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::standard()
    }
}
