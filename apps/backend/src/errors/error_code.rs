//! Client-facing error codes.
//!
//! Every code that can appear in an HTTP error body is listed here. Add new
//! codes here; never pass ad-hoc strings as error codes.

use core::fmt;

/// Closed set of client-facing error categories.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Email missing or unknown
    InvalidEmail,
    /// Password missing or wrong
    InvalidPassword,
    /// Token missing, malformed or signed with another key
    InvalidToken,
    /// Token signature is fine but the expiry has passed
    ExpiredToken,

    // Request handling
    /// Body or parameters could not be read
    BadRequest,
    /// The request budget elapsed before a result arrived
    RequestTimeout,
    /// No route matches the path
    NotFound,
    /// The path exists but not for this method
    MethodNotAllowed,

    // Games
    InvalidGameId,
    InvalidGameNames,
    InvalidGameIcons,
    GameNotFound,

    /// Anything not in the classifier table
    InternalServerError,
}

impl ErrorCode {
    /// Returns the canonical string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::ExpiredToken => "EXPIRED_TOKEN",
            Self::BadRequest => "BAD_REQUEST",
            Self::RequestTimeout => "REQUEST_TIMEOUT",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidGameNames => "INVALID_GAME_NAMES",
            Self::InvalidGameIcons => "INVALID_GAME_ICONS",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
