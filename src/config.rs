//! Runtime configuration: defaults, optional TOML file, environment overrides.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

pub const DEFAULT_UPSTREAM_URL: &str = "https://tars-jdno.onrender.com/ask";
pub const DEFAULT_TIMEOUT_SECONDS: f64 = 90.0;
pub const DEFAULT_MANUAL_PATH: &str = "assets/tally_manual.json";

/// Env var naming an optional TOML config file.
pub const CONFIG_PATH_VAR: &str = "TARS_PROXY_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
    #[error("Invalid upstream URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ProxyConfig {
    pub upstream_url: String,
    /// Upstream bound in seconds; fractions are kept.
    pub timeout_seconds: f64,
    pub manual_path: PathBuf,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            manual_path: PathBuf::from(DEFAULT_MANUAL_PATH),
        }
    }
}

impl ProxyConfig {
    /// Loads `.env`, then the TOML file named by `TARS_PROXY_CONFIG` (if
    /// any), then applies `UPSTREAM_ASK_URL`, `UPSTREAM_TIMEOUT_SECONDS` and
    /// `TALLY_MANUAL_PATH` on top.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let base = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::from_toml_file(path.trim())?,
            _ => Self::default(),
        };
        base.with_overrides(|var| std::env::var(var).ok())
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        debug!(path = %path.display(), "Config file loaded");
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies overrides from `lookup`; blank values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(url) = get("UPSTREAM_ASK_URL") {
            self.upstream_url = url.trim().to_string();
        }
        if let Some(raw) = get("UPSTREAM_TIMEOUT_SECONDS") {
            self.timeout_seconds = parse_timeout(&raw)?;
        }
        if let Some(path) = get("TALLY_MANUAL_PATH") {
            self.manual_path = PathBuf::from(path.trim());
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.upstream_url).map_err(|e| ConfigError::InvalidUrl {
            url: self.upstream_url.clone(),
            reason: e.to_string(),
        })?;
        if !self.timeout_seconds.is_finite() || self.timeout_seconds <= 0.0 {
            return Err(ConfigError::InvalidValue {
                var: "timeout_seconds",
                value: self.timeout_seconds.to_string(),
            });
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.timeout_seconds)
    }
}

// Accepts whole or fractional seconds ("90", "2.5").
fn parse_timeout(raw: &str) -> Result<f64, ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        var: "UPSTREAM_TIMEOUT_SECONDS",
        value: raw.to_string(),
    };
    let secs: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(invalid());
    }
    Ok(secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let config = ProxyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(90));
    }

    #[test]
    fn env_overrides_apply() {
        let config = ProxyConfig::default()
            .with_overrides(lookup(&[
                ("UPSTREAM_ASK_URL", "http://localhost:9000/ask"),
                ("UPSTREAM_TIMEOUT_SECONDS", "2.5"),
                ("TALLY_MANUAL_PATH", "/srv/manual.json"),
            ]))
            .unwrap();
        assert_eq!(config.upstream_url, "http://localhost:9000/ask");
        assert_eq!(config.timeout(), Duration::from_millis(2500));
        assert_eq!(config.manual_path, PathBuf::from("/srv/manual.json"));
    }

    #[test]
    fn sub_second_timeout_is_not_rounded_up() {
        let config = ProxyConfig::default()
            .with_overrides(lookup(&[("UPSTREAM_TIMEOUT_SECONDS", "0.5")]))
            .unwrap();
        assert_eq!(config.timeout(), Duration::from_millis(500));
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let config = ProxyConfig::default()
            .with_overrides(lookup(&[("UPSTREAM_ASK_URL", "  ")]))
            .unwrap();
        assert_eq!(config.upstream_url, DEFAULT_UPSTREAM_URL);
    }

    #[test]
    fn bad_timeout_is_rejected() {
        for raw in ["soon", "0", "-4"] {
            let err = ProxyConfig::default()
                .with_overrides(lookup(&[("UPSTREAM_TIMEOUT_SECONDS", raw)]))
                .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { .. }));
        }
    }

    #[test]
    fn bad_url_is_rejected() {
        let err = ProxyConfig::default()
            .with_overrides(lookup(&[("UPSTREAM_ASK_URL", "not a url")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn toml_file_fills_missing_keys_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_seconds = 15").unwrap();
        let config = ProxyConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert_eq!(config.upstream_url, DEFAULT_UPSTREAM_URL);
        assert_eq!(config.manual_path, PathBuf::from(DEFAULT_MANUAL_PATH));
    }

    #[test]
    fn fractional_toml_timeout_is_kept() {
        let config = ProxyConfig::from_toml_str("timeout_seconds = 0.25").unwrap();
        assert_eq!(config.timeout(), Duration::from_millis(250));
    }

    #[test]
    fn non_positive_toml_timeout_is_rejected() {
        assert!(matches!(
            ProxyConfig::from_toml_str("timeout_seconds = 0.0"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(matches!(
            ProxyConfig::from_toml_str("timeout_seconds = \"fast\""),
            Err(ConfigError::Toml(_))
        ));
    }
}
