//! Chat-completion transport for the model-assisted tier.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::ModelError;
use crate::models::ModelConfig;

/// Transport seam for the model-assisted extractor. The production
/// implementation talks to an OpenAI-compatible endpoint; tests inject
/// stubs.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one system+user exchange, return the completion text.
    async fn complete(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, ModelError>;
}

/// Backend for OpenAI-compatible chat-completion endpoints.
pub struct OpenAiBackend {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl OpenAiBackend {
    /// Build a backend from pipeline configuration.
    ///
    /// Fails when no credential is configured; the orchestrator checks
    /// `ModelConfig::has_credential` before constructing one.
    pub fn from_config(config: &ModelConfig) -> Result<Self, ModelError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ModelError::MissingCredential)?
            .to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.request_timeout_seconds)))
            .build()?;

        Ok(Self {
            client,
            api_key,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl ChatBackend for OpenAiBackend {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ModelError> {
        let body = json!({
            "model": self.model,
            "temperature": 0,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt },
            ],
        });

        debug!(endpoint = %self.endpoint, model = %self.model, "sending completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response.json().await?;
        payload
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(ModelError::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_requires_credential() {
        let config = ModelConfig::default();
        assert!(matches!(
            OpenAiBackend::from_config(&config),
            Err(ModelError::MissingCredential)
        ));
    }

    #[test]
    fn test_from_config_rejects_blank_credential() {
        let config = ModelConfig {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            OpenAiBackend::from_config(&config),
            Err(ModelError::MissingCredential)
        ));
    }

    #[test]
    fn test_from_config_with_credential() {
        let config = ModelConfig {
            api_key: Some("sk-test".to_string()),
            ..Default::default()
        };
        assert!(OpenAiBackend::from_config(&config).is_ok());
    }
}
