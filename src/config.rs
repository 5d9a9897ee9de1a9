/// Dashboard configuration.
///
/// Settings come from an optional TOML file, then environment variables
/// (a `.env` file is honored via `dotenv`) override individual keys:
///
///   RAINMON_API_URL           base URL of the `/data/{id}` API (required)
///   RAINMON_RECORD_ID         shared record id, default "scada001"
///   RAINMON_POLL_INTERVAL_MS  viewer poll interval, default 5000
///
/// Example `rainmon.toml`:
///
/// ```toml
/// api_url = "https://example.execute-api.us-east-1.amazonaws.com/prod"
/// record_id = "scada001"
/// poll_interval_ms = 5000
/// history_length = 20
/// log_level = "info"
/// log_file = "rainmon.log"
/// ```
///
/// `missing_settings` reports what was never supplied, so a file or
/// environment value equal to a default still counts as configured.

use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::alert::staleness::default_max_age_secs;
use crate::analysis::history::DEFAULT_HISTORY_LENGTH;
use crate::logging::{self, Component, LogLevel};

pub const DEFAULT_RECORD_ID: &str = "scada001";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5_000;

pub const ENV_API_URL: &str = "RAINMON_API_URL";
pub const ENV_RECORD_ID: &str = "RAINMON_RECORD_ID";
pub const ENV_POLL_INTERVAL_MS: &str = "RAINMON_POLL_INTERVAL_MS";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    InvalidValue { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Config file error: {}", e),
            ConfigError::Parse(e) => write!(f, "Config parse error: {}", e),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {}: '{}'", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api_url: Option<String>,
    pub record_id: String,
    pub poll_interval_ms: u64,
    pub history_length: usize,
    pub log_level: String,
    pub log_file: Option<String>,
    #[serde(skip)]
    supplied: SuppliedSettings,
}

/// Optional settings that were given explicitly, by file or environment.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct SuppliedSettings {
    record_id: bool,
    poll_interval_ms: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            record_id: DEFAULT_RECORD_ID.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            history_length: DEFAULT_HISTORY_LENGTH,
            log_level: "info".to_string(),
            log_file: None,
            supplied: SuppliedSettings::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(text)?;
        let supplied = SuppliedSettings {
            record_id: table.contains_key("record_id"),
            poll_interval_ms: table.contains_key("poll_interval_ms"),
        };
        let mut config: Self = toml::Value::Table(table).try_into()?;
        config.supplied = supplied;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Applies overrides from a key lookup. Split out from `apply_env` so
    /// tests can supply values without touching the process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api_url = Some(url);
        }
        if let Some(id) = lookup(ENV_RECORD_ID).filter(|v| !v.trim().is_empty()) {
            self.record_id = id;
            self.supplied.record_id = true;
        }
        if let Some(raw) = lookup(ENV_POLL_INTERVAL_MS) {
            self.poll_interval_ms = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or(ConfigError::InvalidValue {
                    key: ENV_POLL_INTERVAL_MS.to_string(),
                    value: raw.clone(),
                })?;
            self.supplied.poll_interval_ms = true;
        }
        Ok(())
    }

    /// Loads `.env` (if present) and applies process environment overrides.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        dotenv::dotenv().ok();
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Full load: optional TOML file, then environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Settings that were never supplied. The API URL is required; the
    /// others are reported with their fallback.
    pub fn missing_settings(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.api_url.is_none() {
            missing.push(ENV_API_URL.to_string());
        }
        if !self.supplied.record_id {
            missing.push(format!("{} (optional, defaults to '{}')", ENV_RECORD_ID, DEFAULT_RECORD_ID));
        }
        if !self.supplied.poll_interval_ms {
            missing.push(format!(
                "{} (optional, defaults to {}ms)",
                ENV_POLL_INTERVAL_MS, DEFAULT_POLL_INTERVAL_MS
            ));
        }
        missing
    }

    pub fn is_configured(&self) -> bool {
        self.api_url.is_some()
    }

    /// `{api_url}/data/{record_id}`, or `None` without an API URL.
    pub fn record_url(&self) -> Option<String> {
        self.api_url
            .as_ref()
            .map(|base| format!("{}/data/{}", base.trim_end_matches('/'), self.record_id))
    }

    pub fn min_log_level(&self) -> Result<LogLevel, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                key: "log_level".to_string(),
                value: self.log_level.clone(),
            })
    }

    /// Installs the global logger at `log_level`, appending to `log_file`
    /// when one is set.
    pub fn init_logging(&self) -> Result<(), ConfigError> {
        let level = self.min_log_level()?;
        logging::init_logger(level, self.log_file.as_deref(), true);
        logging::debug(
            Component::Config,
            None,
            &format!(
                "Logging at {} to console{}",
                level,
                self.log_file
                    .as_deref()
                    .map(|path| format!(" and {}", path))
                    .unwrap_or_default()
            ),
        );
        Ok(())
    }

    /// Seconds without a new write before viewers flag the record as stale.
    pub fn stale_after_secs(&self) -> u64 {
        default_max_age_secs(self.poll_interval_ms)
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.record_id, "scada001");
        assert_eq!(config.poll_interval_ms, 5_000);
        assert_eq!(config.history_length, 20);
        assert_eq!(config.stale_after_secs(), 15);
        assert!(!config.is_configured());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = DashboardConfig::from_toml_str(r#"api_url = "https://api.example.com/prod""#)
            .expect("valid toml");
        assert_eq!(config.api_url.as_deref(), Some("https://api.example.com/prod"));
        assert_eq!(config.record_id, DEFAULT_RECORD_ID);
        assert_eq!(config.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let result = DashboardConfig::from_toml_str("poll_interval_ms = \"soon\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let mut config = DashboardConfig::from_toml_str("record_id = \"from-file\"").unwrap();
        config
            .apply_overrides(lookup_from(&[
                (ENV_API_URL, "https://api.example.com/"),
                (ENV_RECORD_ID, "station7"),
                (ENV_POLL_INTERVAL_MS, "2500"),
            ]))
            .expect("valid overrides");
        assert_eq!(config.record_id, "station7");
        assert_eq!(config.poll_interval_ms, 2_500);
        assert_eq!(
            config.record_url().as_deref(),
            Some("https://api.example.com/data/station7")
        );
    }

    #[test]
    fn test_bad_poll_interval_override_is_rejected() {
        let mut config = DashboardConfig::default();
        let result = config.apply_overrides(lookup_from(&[(ENV_POLL_INTERVAL_MS, "0")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_missing_settings_report() {
        let missing = DashboardConfig::default().missing_settings();
        assert_eq!(missing.len(), 3);
        assert_eq!(missing[0], ENV_API_URL);
        assert!(missing[1].contains("defaults to 'scada001'"));
        assert!(missing[2].contains("defaults to 5000ms"));
    }

    #[test]
    fn test_explicit_default_values_are_not_reported_missing() {
        let mut config = DashboardConfig::default();
        config
            .apply_overrides(lookup_from(&[(ENV_RECORD_ID, DEFAULT_RECORD_ID)]))
            .expect("valid overrides");
        let missing = config.missing_settings();
        assert!(
            !missing.iter().any(|m| m.starts_with(ENV_RECORD_ID)),
            "record id was set explicitly: {:?}",
            missing
        );
        assert!(missing.iter().any(|m| m.starts_with(ENV_POLL_INTERVAL_MS)));

        let from_file = DashboardConfig::from_toml_str("poll_interval_ms = 5000").unwrap();
        let missing = from_file.missing_settings();
        assert!(!missing.iter().any(|m| m.starts_with(ENV_POLL_INTERVAL_MS)));
        assert!(missing.iter().any(|m| m.starts_with(ENV_RECORD_ID)));
    }

    #[test]
    fn test_huge_poll_interval_override_does_not_overflow_stale_threshold() {
        let mut config = DashboardConfig::default();
        let huge = u64::MAX.to_string();
        config
            .apply_overrides(lookup_from(&[(ENV_POLL_INTERVAL_MS, huge.as_str())]))
            .expect("u64::MAX is a valid interval");
        assert_eq!(config.poll_interval_ms, u64::MAX);
        assert_eq!(config.stale_after_secs(), u64::MAX.div_ceil(1000));
    }

    #[test]
    fn test_invalid_log_level_fails_logger_init() {
        let config = DashboardConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.init_logging(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_log_level_setting() {
        let mut config = DashboardConfig::default();
        assert_eq!(config.min_log_level().unwrap(), LogLevel::Info);
        config.log_level = "loud".to_string();
        assert!(config.min_log_level().is_err());
    }
}
