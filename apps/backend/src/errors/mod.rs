//! Error handling for the xsports backend.

pub mod classifier;
pub mod domain;
pub mod error_code;

pub use classifier::{Category, ErrorClassifier};
pub use domain::{AuthError, ErrorKind, GameError, GuardError, ServiceError, StoreError};
pub use error_code::ErrorCode;
