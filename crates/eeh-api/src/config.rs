//! Runtime configuration read from the environment
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Listen address (`EEH_ADDR`)
    pub addr: SocketAddr,
    /// tracing filter directive (`EEH_LOG`)
    pub log_filter: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("EEH_ADDR is not a socket address: {0}")]
    InvalidAddr(String),
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup("EEH_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(raw_addr.clone()))?;

        let log_filter = lookup("EEH_LOG")
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self { addr, log_filter })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.addr.to_string(), DEFAULT_ADDR);
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("EEH_ADDR", "127.0.0.1:9090"),
            ("EEH_LOG", "eeh_core=debug,tower_http=debug"),
        ]))
        .unwrap();

        assert_eq!(config.addr.port(), 9090);
        assert_eq!(config.log_filter, "eeh_core=debug,tower_http=debug");
    }

    #[test]
    fn test_blank_log_filter_falls_back() {
        let config = ApiConfig::from_lookup(lookup_from(&[("EEH_LOG", "  ")])).unwrap();
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_invalid_addr() {
        let err = ApiConfig::from_lookup(lookup_from(&[("EEH_ADDR", "localhost")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidAddr("localhost".to_string()));
    }
}
