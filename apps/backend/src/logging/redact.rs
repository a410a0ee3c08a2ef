//! Masking of emails and bearer tokens before they reach a log line.

use std::fmt;
use once_cell::sync::Lazy;

use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b([A-Za-z0-9._%+-])[A-Za-z0-9._%+-]*(@[A-Za-z0-9.-]+\.[A-Za-z]{1,})\b").unwrap()
});

// Three base64url segments separated by dots, the shape of a signed token.
static SIGNED_TOKEN: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}").unwrap()
});

/// Keeps the first character of an email's local part and the domain; replaces
/// signed tokens with `[REDACTED_TOKEN]`.
pub fn redact(input: &str) -> String {
    let emails = EMAIL.replace_all(input, "$1***$2");
    SIGNED_TOKEN
        .replace_all(&emails, "[REDACTED_TOKEN]")
        .into_owned()
}

/// Display wrapper that redacts on format, for use in `tracing` fields.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
