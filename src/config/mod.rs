//! Configuration system (layered: defaults < config file < env).

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::context::Instructions;
use crate::error::{Result, SyllabusError};
use crate::types::{
    GenerationConfig, DEFAULT_MAX_TOKENS, DEFAULT_MAX_TOOL_ROUNDS, DEFAULT_MODEL,
    DEFAULT_TEMPERATURE,
};

/// Deployment configuration.
///
/// Every field is optional; accessors fall back to the built-in defaults.
#[derive(Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SyllabusConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub max_tool_rounds: Option<usize>,
    /// File holding replacement system instructions.
    pub instructions_path: Option<PathBuf>,
    /// Deadline for a whole query, in seconds.
    pub timeout_secs: Option<u64>,
}

impl fmt::Debug for SyllabusConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyllabusConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("max_tool_rounds", &self.max_tool_rounds)
            .field("instructions_path", &self.instructions_path)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl SyllabusConfig {
    /// Parse a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Platform config location, e.g. `~/.config/syllabus/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "syllabus")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load the default config file (if present), then apply environment overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load an explicit config file (or the default one), then apply environment overrides.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(default) if default.is_file() => Self::from_file(default)?,
                _ => Self::default(),
            },
        };

        base.with_env_overrides()
    }

    /// Apply values from process environment variables.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply values from an arbitrary variable lookup. Set variables win over file values.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(key) = lookup("ANTHROPIC_API_KEY") {
            self.api_key = Some(key);
        }
        if let Some(url) = lookup("ANTHROPIC_BASE_URL") {
            self.base_url = Some(url);
        }
        if let Some(model) = lookup("SYLLABUS_MODEL") {
            self.model = Some(model);
        }
        if let Some(path) = lookup("SYLLABUS_INSTRUCTIONS") {
            self.instructions_path = Some(PathBuf::from(path));
        }
        if let Some(v) = parse_var(&lookup, "SYLLABUS_TEMPERATURE")? {
            self.temperature = Some(v);
        }
        if let Some(v) = parse_var(&lookup, "SYLLABUS_MAX_TOKENS")? {
            self.max_tokens = Some(v);
        }
        if let Some(v) = parse_var(&lookup, "SYLLABUS_MAX_TOOL_ROUNDS")? {
            self.max_tool_rounds = Some(v);
        }
        if let Some(v) = parse_var(&lookup, "SYLLABUS_TIMEOUT_SECS")? {
            self.timeout_secs = Some(v);
        }
        Ok(self)
    }

    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| SyllabusError::Authentication("Missing ANTHROPIC_API_KEY".into()))
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// The process-wide generation parameters.
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig::builder()
            .model_id(self.model())
            .temperature(self.temperature.unwrap_or(DEFAULT_TEMPERATURE))
            .max_tokens(self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS))
            .max_tool_rounds(self.max_tool_rounds.unwrap_or(DEFAULT_MAX_TOOL_ROUNDS))
            .build()
    }

    /// Instructions from `instructions_path`, or the built-in prompt.
    pub fn instructions(&self) -> Result<Instructions> {
        match &self.instructions_path {
            Some(path) => Instructions::load(path),
            None => Ok(Instructions::default()),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<T>> {
    match lookup(name) {
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| {
            SyllabusError::Configuration(format!("{name} has an invalid value: '{raw}'"))
        }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = SyllabusConfig::default();
        let generation = config.generation_config();
        assert_eq!(generation, GenerationConfig::default());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn env_values_override_file_values() {
        let config = SyllabusConfig {
            model: Some("from-file".into()),
            max_tool_rounds: Some(5),
            ..Default::default()
        }
        .with_overrides_from(lookup(&[
            ("SYLLABUS_MODEL", "from-env"),
            ("SYLLABUS_MAX_TOKENS", "1024"),
        ]))
        .unwrap();

        assert_eq!(config.model(), "from-env");
        assert_eq!(config.max_tokens, Some(1024));
        assert_eq!(config.max_tool_rounds, Some(5));
    }

    #[test]
    fn malformed_number_names_variable() {
        let err = SyllabusConfig::default()
            .with_overrides_from(lookup(&[("SYLLABUS_MAX_TOOL_ROUNDS", "two")]))
            .unwrap_err();
        match err {
            SyllabusError::Configuration(msg) => assert!(msg.contains("SYLLABUS_MAX_TOOL_ROUNDS")),
            other => panic!("expected Configuration, got {other:?}"),
        }
    }

    #[test]
    fn empty_api_key_counts_as_missing() {
        let config = SyllabusConfig {
            api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(config.api_key(), Err(SyllabusError::Authentication(_))));
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = SyllabusConfig {
            api_key: Some("sk-ant-secret".into()),
            ..Default::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-ant-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
