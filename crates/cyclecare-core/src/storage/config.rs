//! TOML-based application configuration.
//!
//! Stores:
//! - The user's cycle profile (start date, cycle length, period duration)
//! - Calendar preferences
//! - Suggestion preferences
//!
//! Configuration is stored at `~/.config/cyclecare/config.toml`, or at the
//! path named by `CYCLECARE_CONFIG`.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{data_dir, CONFIG_PATH_ENV};
use crate::cycle::CycleProfile;
use crate::error::ConfigError;

/// First column of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

/// Calendar configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default)]
    pub week_starts_on: WeekStart,
}

/// Suggestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Print the insight request alongside the static suggestions.
    #[serde(default)]
    pub ai_insight: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/cyclecare/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
    /// Stored cycle profile, absent until the user sets one.
    #[serde(default)]
    pub profile: Option<CycleProfile>,
}

fn default_true() -> bool {
    true
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ai_insight: false,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        let unknown = || ConfigError::MissingKey(key.to_string());

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<i64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as integer")))?;
                        serde_json::Value::Number(n.into())
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Resolve the config file location.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn path() -> Result<PathBuf, ConfigError> {
        if let Some(explicit) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(explicit));
        }
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/cyclecare"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path. A missing file yields the default config.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.message().to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key, in memory only.
    ///
    /// The whole config is re-validated, so a value that would break the
    /// stored profile's invariants is rejected and nothing changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self)
            .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// The stored cycle profile.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] when no profile has been set.
    pub fn cycle_profile(&self) -> Result<CycleProfile, ConfigError> {
        self.profile
            .ok_or_else(|| ConfigError::MissingKey("profile".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::parse_date;

    fn with_profile() -> Config {
        Config {
            profile: Some(CycleProfile::regular(parse_date("2024-01-01").unwrap())),
            ..Config::default()
        }
    }

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.calendar.week_starts_on, WeekStart::Sunday);
        assert!(parsed.suggestions.enabled);
        assert!(parsed.profile.is_none());
    }

    #[test]
    fn profile_survives_toml() {
        let toml_str = toml::to_string_pretty(&with_profile()).unwrap();
        assert!(toml_str.contains("cycle_start_date = \"2024-01-01\""));
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.cycle_profile().unwrap().cycle_length_days(), 28);
    }

    #[test]
    fn invalid_stored_profile_fails_to_parse() {
        let content = "[profile]\ncycle_start_date = \"2024-01-01\"\ncycle_length_days = 20\nperiod_duration_days = 25\n";
        assert!(toml::from_str::<Config>(content).is_err());
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = with_profile();
        assert_eq!(cfg.get("calendar.week_starts_on").as_deref(), Some("sunday"));
        assert_eq!(cfg.get("profile.cycle_length_days").as_deref(), Some("28"));
        assert_eq!(cfg.get("suggestions.enabled").as_deref(), Some("true"));
        assert!(cfg.get("calendar.missing_key").is_none());
        assert!(Config::default().get("profile").is_none());
    }

    #[test]
    fn set_updates_nested_values() {
        let mut cfg = with_profile();
        cfg.set("calendar.week_starts_on", "monday").unwrap();
        cfg.set("suggestions.ai_insight", "true").unwrap();
        cfg.set("profile.cycle_length_days", "32").unwrap();
        cfg.set("profile.cycle_start_date", "2024-03-10").unwrap();

        assert_eq!(cfg.calendar.week_starts_on.weekday(), Weekday::Mon);
        assert!(cfg.suggestions.ai_insight);
        let profile = cfg.cycle_profile().unwrap();
        assert_eq!(profile.cycle_length_days(), 32);
        assert_eq!(profile.cycle_start_date().to_string(), "2024-03-10");
    }

    #[test]
    fn set_rejects_profile_invariant_violation() {
        let mut cfg = with_profile();
        let err = cfg.set("profile.period_duration_days", "40").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert_eq!(cfg.cycle_profile().unwrap().period_duration_days(), 5);

        assert!(cfg.set("profile.cycle_length_days", "0").is_err());
        assert!(cfg.set("profile.cycle_start_date", "yesterday").is_err());
    }

    #[test]
    fn set_rejects_unknown_key_and_bad_types() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("calendar.nonexistent", "x"),
            Err(ConfigError::MissingKey(_))
        ));
        assert!(cfg.set("suggestions.enabled", "not_a_bool").is_err());
        assert!(cfg.set("calendar.week_starts_on", "friday").is_err());
        // No profile stored yet, so its fields are unknown.
        assert!(cfg.set("profile.cycle_length_days", "28").is_err());
    }

    #[test]
    fn missing_profile_is_reported() {
        let err = Config::default().cycle_profile().unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey(ref k) if k == "profile"));
    }

    #[test]
    fn save_and_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let missing = Config::load_from(&path).unwrap();
        assert!(missing.profile.is_none());

        let mut cfg = with_profile();
        cfg.calendar.week_starts_on = WeekStart::Monday;
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.profile, cfg.profile);
        assert_eq!(loaded.calendar.week_starts_on, WeekStart::Monday);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "calendar = 3").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::LoadFailed { .. })
        ));
    }
}
