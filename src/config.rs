// src/config.rs
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    time::Duration,
};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_AI_SERVICE_URL: &str = "http://localhost:5001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Base URL of the inference service, without a trailing slash.
    pub ai_service_url: String,
    /// `None` waits on the inference service indefinitely.
    pub ai_service_timeout: Option<Duration>,
    pub static_dir: PathBuf,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            ai_service_url: DEFAULT_AI_SERVICE_URL.to_string(),
            ai_service_timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl RelayConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(raw) => parse("HOST", raw)?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(raw) => parse("PORT", raw)?,
            None => defaults.port,
        };

        // PYTHON_AI_URL wins over the AI_SERVICE_URL alias.
        let service_url = lookup("PYTHON_AI_URL")
            .map(|raw| ("PYTHON_AI_URL", raw))
            .or_else(|| lookup("AI_SERVICE_URL").map(|raw| ("AI_SERVICE_URL", raw)));

        let ai_service_url = match service_url {
            Some((key, raw)) => {
                let trimmed = raw.trim().trim_end_matches('/');
                if trimmed.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        key,
                        value: raw,
                        reason: "must not be empty".to_string(),
                    });
                }
                trimmed.to_string()
            }
            None => defaults.ai_service_url,
        };

        let ai_service_timeout = match lookup("AI_SERVICE_TIMEOUT_SECS") {
            Some(raw) => match parse::<u64>("AI_SERVICE_TIMEOUT_SECS", raw)? {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
            None => defaults.ai_service_timeout,
        };

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        Ok(Self {
            host,
            port,
            ai_service_url,
            ai_service_timeout,
            static_dir,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse<T>(key: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key,
        reason: e.to_string(),
        value: raw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = RelayConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, RelayConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5000");
        assert_eq!(config.ai_service_url, "http://localhost:5001");
    }

    #[test]
    fn overrides_are_applied() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("PYTHON_AI_URL", "http://inference:9000/"),
            ("AI_SERVICE_TIMEOUT_SECS", "5"),
            ("STATIC_DIR", "dist"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.ai_service_url, "http://inference:9000");
        assert_eq!(config.ai_service_timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.static_dir, PathBuf::from("dist"));
    }

    #[test]
    fn python_ai_url_takes_precedence_over_alias() {
        let config =
            RelayConfig::from_lookup(lookup_from(&[("PYTHON_AI_URL", "http://ai:7000")])).unwrap();
        assert_eq!(config.ai_service_url, "http://ai:7000");

        let config = RelayConfig::from_lookup(lookup_from(&[
            ("AI_SERVICE_URL", "http://alias:7001"),
            ("PYTHON_AI_URL", "http://ai:7000"),
        ]))
        .unwrap();
        assert_eq!(config.ai_service_url, "http://ai:7000");

        let config =
            RelayConfig::from_lookup(lookup_from(&[("AI_SERVICE_URL", "http://alias:7001")]))
                .unwrap();
        assert_eq!(config.ai_service_url, "http://alias:7001");
    }

    #[test]
    fn zero_timeout_disables_it() {
        let config =
            RelayConfig::from_lookup(lookup_from(&[("AI_SERVICE_TIMEOUT_SECS", "0")])).unwrap();
        assert_eq!(config.ai_service_timeout, None);
    }

    #[test]
    fn bad_port_names_the_variable() {
        let err = RelayConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        let ConfigError::InvalidValue { key, value, .. } = err;
        assert_eq!(key, "PORT");
        assert_eq!(value, "eighty");
    }

    #[test]
    fn blank_service_url_is_rejected() {
        let err = RelayConfig::from_lookup(lookup_from(&[("AI_SERVICE_URL", " / ")])).unwrap_err();
        assert!(err.to_string().contains("AI_SERVICE_URL"));
    }
}
