pub mod redact;
pub mod security;

pub use redact::{redact, Redacted};
