//! TOML-based application configuration.
//!
//! Stores the enhancement-provider settings:
//! - Which provider to use (off by default)
//! - Endpoint base URL and model name
//! - Request timeout
//!
//! Configuration is stored at `~/.config/tasktriage/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

use crate::error::ConfigError;

/// Returns `~/.config/tasktriage[-dev]/` based on TASKTRIAGE_ENV.
///
/// Set TASKTRIAGE_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TASKTRIAGE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("tasktriage-dev")
    } else {
        base_dir.join("tasktriage")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DirUnavailable {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}

/// Enhancement provider selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AiProvider {
    /// Heuristics only; never call out.
    Off,
    /// Local LM Studio chat-completion endpoint.
    LmStudio,
}

impl Default for AiProvider {
    fn default() -> Self {
        AiProvider::Off
    }
}

/// Language-model enhancement configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiConfig {
    #[serde(default)]
    pub provider: AiProvider,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:1234/v1".to_string()
}
fn default_model() -> String {
    "qwen2.5:latest".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: AiProvider::Off,
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/tasktriage/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,
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
        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => {
                        serde_json::Value::Bool(value.parse::<bool>().map_err(|e| {
                            ConfigError::InvalidValue {
                                key: key.to_string(),
                                message: e.to_string(),
                            }
                        })?)
                    }
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| ConfigError::InvalidValue {
                                    key: key.to_string(),
                                    message: format!("cannot parse '{value}' as number"),
                                })?
                        } else {
                            return Err(ConfigError::InvalidValue {
                                key: key.to_string(),
                                message: format!("cannot parse '{value}' as number"),
                            });
                        }
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }

        Err(ConfigError::UnknownKey(key.to_string()))
    }

    /// Path of the configuration file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Apply a value by dot-separated key without persisting.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the resulting configuration is invalid.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Set a config value by key and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.apply(key, value)?;
        self.save()?;
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.ai.base_url).map_err(|e| ConfigError::InvalidValue {
            key: "ai.base_url".to_string(),
            message: e.to_string(),
        })?;
        if self.ai.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "ai.timeout_secs".to_string(),
                message: "timeout must be at least 1 second".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.ai.provider, AiProvider::Off);
        assert_eq!(parsed.ai.timeout_secs, 10);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = toml::from_str("[ai]\nprovider = \"lm_studio\"\n").unwrap();
        assert_eq!(cfg.ai.provider, AiProvider::LmStudio);
        assert_eq!(cfg.ai.base_url, "http://localhost:1234/v1");
        assert_eq!(cfg.ai.model, "qwen2.5:latest");
    }

    #[test]
    fn get_by_dotted_path() {
        let cfg = Config::default();
        assert_eq!(cfg.get("ai.provider").as_deref(), Some("off"));
        assert_eq!(cfg.get("ai.timeout_secs").as_deref(), Some("10"));
        assert!(cfg.get("ai.nope").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn apply_updates_provider_and_model() {
        let mut cfg = Config::default();
        cfg.apply("ai.provider", "lm_studio").unwrap();
        cfg.apply("ai.model", "llama3:8b").unwrap();
        assert_eq!(cfg.ai.provider, AiProvider::LmStudio);
        assert_eq!(cfg.ai.model, "llama3:8b");
    }

    #[test]
    fn apply_rejects_unknown_keys() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.apply("ai.bogus", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn apply_rejects_invalid_provider() {
        let mut cfg = Config::default();
        assert!(cfg.apply("ai.provider", "skynet").is_err());
    }

    #[test]
    fn apply_rejects_invalid_base_url() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.apply("ai.base_url", "not a url"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn apply_rejects_zero_timeout() {
        let mut cfg = Config::default();
        assert!(cfg.apply("ai.timeout_secs", "0").is_err());
    }

    #[test]
    fn config_round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = Config::default();
        cfg.apply("ai.model", "llama3:8b").unwrap();
        std::fs::write(&path, toml::to_string_pretty(&cfg).unwrap()).unwrap();

        let parsed: Config = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, cfg);
    }
}
