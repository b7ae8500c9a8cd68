//! Configuration structures for the parsing pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{GrocrError, Result};

/// Main configuration for the grocr pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Model-assisted extraction configuration.
    pub model: ModelConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
        }
    }
}

/// Configuration for the model-assisted extraction tier.
///
/// The credential is injected here rather than read from the environment
/// so the pipeline can be constructed and tested without process-global
/// state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Bearer credential for the completion endpoint. When absent the
    /// pipeline skips the model tier entirely.
    pub api_key: Option<String>,

    /// Chat-completion endpoint URL.
    pub endpoint: String,

    /// Model identifier sent in the request body.
    pub model: String,

    /// Target language for extracted item names.
    pub target_language: String,

    /// Overall request timeout in seconds.
    pub request_timeout_seconds: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
            target_language: "English".to_string(),
            request_timeout_seconds: 30,
        }
    }
}

impl ModelConfig {
    /// Whether a usable credential is configured.
    pub fn has_credential(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

impl PipelineConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| GrocrError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| GrocrError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
