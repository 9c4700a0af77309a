//! Top-level Glossa configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CacheConfig, EmbeddingConfig};
use crate::errors::ConfigError;

pub const ENV_API_KEY: &str = "GLOSSA_API_KEY";
pub const ENV_MODEL: &str = "GLOSSA_MODEL";
pub const ENV_ENDPOINT: &str = "GLOSSA_ENDPOINT";
pub const ENV_USE_FALLBACK: &str = "GLOSSA_USE_FALLBACK";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`GLOSSA_*`)
/// 2. Config file (`glossa.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlossaConfig {
    pub embedding: EmbeddingConfig,
    pub cache: CacheConfig,
}

impl GlossaConfig {
    /// Load a config file, apply environment overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let mut config: GlossaConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Overlay `GLOSSA_*` environment variables.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Overlay values from an arbitrary lookup. Unparseable values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY) {
            self.embedding.api_key = Some(key);
        }
        if let Some(model) = lookup(ENV_MODEL) {
            self.embedding.model = model;
        }
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            self.embedding.endpoint = endpoint;
        }
        if let Some(flag) = lookup(ENV_USE_FALLBACK) {
            match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.embedding.use_fallback = true,
                "0" | "false" | "no" | "off" => self.embedding.use_fallback = false,
                _ => {}
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let embedding = &self.embedding;
        if embedding.model.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.model".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if embedding.dimensions == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.dimensions".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if embedding.max_batch_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.max_batch_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if embedding.max_retries == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.max_retries".to_string(),
                message: "must allow at least one attempt".to_string(),
            });
        }
        if self.cache.max_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "cache.max_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.cache.ttl_ms == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "cache.ttl_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
