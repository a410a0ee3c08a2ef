use std::time::Duration;

use super::{env_lookup, parse_var, Lookup};
use crate::error::AppError;

/// Budget applied to every guarded request when `REQUEST_BUDGET_MS` is unset.
pub const DEFAULT_REQUEST_BUDGET: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_budget: Duration,
}

impl ServerConfig {
    /// Load from `BACKEND_HOST`, `BACKEND_PORT` and `REQUEST_BUDGET_MS`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Lookup) -> Result<Self, AppError> {
        let host = lookup("BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_var(&lookup, "BACKEND_PORT", 3001u16)?;
        let budget_ms = parse_var(
            &lookup,
            "REQUEST_BUDGET_MS",
            DEFAULT_REQUEST_BUDGET.as_millis() as u64,
        )?;
        if budget_ms == 0 {
            return Err(AppError::config("REQUEST_BUDGET_MS must be greater than zero"));
        }

        Ok(Self {
            host,
            port,
            request_budget: Duration::from_millis(budget_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::lookup_from;

    #[test]
    fn defaults_apply_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3001);
        assert_eq!(config.request_budget, DEFAULT_REQUEST_BUDGET);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("BACKEND_HOST", "127.0.0.1"),
            ("BACKEND_PORT", "8080"),
            ("REQUEST_BUDGET_MS", "5000"),
        ]))
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.request_budget, Duration::from_secs(5));
    }

    #[test]
    fn invalid_port_and_zero_budget_are_rejected() {
        assert!(ServerConfig::from_lookup(lookup_from(&[("BACKEND_PORT", "http")])).is_err());
        assert!(ServerConfig::from_lookup(lookup_from(&[("REQUEST_BUDGET_MS", "0")])).is_err());
    }
}
