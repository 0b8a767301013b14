use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// What to do when a trivial-contact correction drives a count below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativeCountPolicy {
    /// Fail the measurement with an invalid-input error.
    #[default]
    Reject,
    /// Replace the count with zero and log a warning.
    Clamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MeasureConfig {
    pub negative_counts: NegativeCountPolicy,
}

impl MeasureConfig {
    pub fn builder() -> MeasureConfigBuilder {
        MeasureConfigBuilder::new()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, "<inline>")
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let path_str = path.to_string_lossy().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path_str.clone(),
            source: e,
        })?;
        Self::parse(&content, &path_str)
    }

    fn parse(content: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Toml {
            path: path.to_string(),
            source: e,
        })
    }
}

#[derive(Default)]
pub struct MeasureConfigBuilder {
    negative_counts: Option<NegativeCountPolicy>,
}

impl MeasureConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn negative_counts(mut self, policy: NegativeCountPolicy) -> Self {
        self.negative_counts = Some(policy);
        self
    }

    pub fn build(self) -> MeasureConfig {
        MeasureConfig {
            negative_counts: self.negative_counts.unwrap_or_default(),
        }
    }
}
