pub mod claims;
pub mod credentials;
pub mod service;
pub mod token;

pub use claims::{Principal, TokenClaims};
pub use credentials::CredentialVerifier;
pub use service::AuthService;
pub use token::{TokenCodec, TokenError};
