//! Process configuration, read once at startup.
//!
//! Every loader takes a lookup function so tests can supply values without
//! touching the process environment; the `from_env` constructors pass
//! `std::env::var`.

pub mod db;
pub mod security;
pub mod server;

use crate::error::AppError;

/// Environment-style lookup: name in, value out.
pub trait Lookup: Fn(&str) -> Option<String> {}

impl<F: Fn(&str) -> Option<String>> Lookup for F {}

pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Get a required, non-empty variable or return a configuration error.
fn must_var(lookup: &impl Lookup, name: &str) -> Result<String, AppError> {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(AppError::config(format!(
            "Required environment variable '{name}' is empty"
        ))),
        None => Err(AppError::config(format!(
            "Required environment variable '{name}' is not set"
        ))),
    }
}

/// Parse a variable into `T`, falling back to `default` when unset.
fn parse_var<T: std::str::FromStr>(
    lookup: &impl Lookup,
    name: &str,
    default: T,
) -> Result<T, AppError> {
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| {
            AppError::config(format!("Environment variable '{name}' has invalid value '{raw}'"))
        }),
    }
}

#[cfg(test)]
pub(crate) fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |name: &str| -> Option<String> {
        pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    }
}
