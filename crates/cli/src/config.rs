//! Service configuration

use anyhow::Context;
use fallback::FallbackConfig;
use inference_engine::{PredictorConfig, DEFAULT_MODEL_PATH};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration file looked up in the working directory (any extension
/// the `config` crate understands, e.g. `exoplanet.toml`)
pub const CONFIG_FILE: &str = "exoplanet";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

/// Service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// ONNX model location
    pub model_path: String,
    /// Max log level written to stderr
    pub log_level: String,
    pub log_format: LogFormat,
    #[serde(default)]
    pub fallback: FallbackConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
            fallback: FallbackConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Built-in defaults, overridden by `exoplanet.*` if present
    pub fn load() -> anyhow::Result<Self> {
        Self::build(config::File::with_name(CONFIG_FILE).required(false))
    }

    /// Built-in defaults, overridden by the given file if it exists
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        Self::build(config::File::from(path).required(false))
    }

    fn build<S>(source: S) -> anyhow::Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("model_path", defaults.model_path)?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "text")?
            .set_default("fallback.enabled", defaults.fallback.enabled)?
            .add_source(source)
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")
    }

    /// Settings handed to the predictor
    pub fn predictor_config(&self) -> PredictorConfig {
        PredictorConfig {
            model_path: self.model_path.clone(),
            fallback: self.fallback.clone(),
        }
    }
}
