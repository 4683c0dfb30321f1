//! Configuration loading from skiff.toml and the environment.
//!
//! The credential comes from the environment only; everything else comes
//! from an optional TOML file with defaults applied when absent.

use serde::Deserialize;
use std::path::Path;

/// Environment variable holding the Groq API credential.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Top-level configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Backend configuration.
    #[serde(default)]
    pub backend: BackendConfig,

    /// System prompt prepended to every session.
    pub system: Option<String>,
}

/// Backend provider configuration.
#[derive(Debug, Deserialize)]
pub struct BackendConfig {
    /// Provider name (currently only "groq" supported).
    #[serde(default = "default_provider")]
    #[allow(dead_code)]
    pub provider: String,

    /// Model to use.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature, within the provider-documented 0.0..=2.0.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens per model response.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_provider() -> String {
    "groq".to_string()
}

fn default_model() -> String {
    "openai/gpt-oss-120b".to_string()
}

fn default_temperature() -> f32 {
    1.0
}

fn default_max_tokens() -> u32 {
    4096
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration.
    pub fn default_config() -> Self {
        Self {
            backend: BackendConfig::default(),
            system: None,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let temperature = self.backend.temperature;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigError::InvalidTemperature(temperature));
        }
        Ok(())
    }
}

/// Read the API credential from the environment.
///
/// A missing or empty credential is a deployment defect: fatal, no retry,
/// checked before any backend or surface is built.
pub fn api_key_from_env() -> Result<String, ConfigError> {
    api_key_from(std::env::var(API_KEY_VAR).ok())
}

fn api_key_from(value: Option<String>) -> Result<String, ConfigError> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ConfigError::MissingApiKey),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("GROQ_API_KEY not found. Please set it as an environment variable")]
    MissingApiKey,

    #[error("temperature {0} is outside the supported 0.0..=2.0 range")]
    InvalidTemperature(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_gets_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.backend.model, "openai/gpt-oss-120b");
        assert_eq!(config.backend.temperature, 1.0);
        assert_eq!(config.backend.max_tokens, 4096);
        assert!(config.system.is_none());
    }

    #[test]
    fn overrides_are_honored() {
        let config = Config::parse(
            r#"
            system = "Answer in one sentence."

            [backend]
            model = "llama-3.3-70b-versatile"
            temperature = 0.2
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.model, "llama-3.3-70b-versatile");
        assert_eq!(config.backend.temperature, 0.2);
        assert_eq!(config.system.as_deref(), Some("Answer in one sentence."));
    }

    #[test]
    fn out_of_range_temperature_is_rejected() {
        let result = Config::parse("[backend]\ntemperature = 3.0\n");
        assert!(matches!(result, Err(ConfigError::InvalidTemperature(t)) if t == 3.0));
    }

    #[test]
    fn missing_or_blank_credential_is_fatal() {
        assert!(matches!(api_key_from(None), Err(ConfigError::MissingApiKey)));
        assert!(matches!(
            api_key_from(Some(String::new())),
            Err(ConfigError::MissingApiKey)
        ));
        assert!(matches!(
            api_key_from(Some("   ".into())),
            Err(ConfigError::MissingApiKey)
        ));
        assert_eq!(api_key_from(Some("gsk_abc".into())).unwrap(), "gsk_abc");
    }
}
