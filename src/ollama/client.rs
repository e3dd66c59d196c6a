//! HTTP client for the Ollama generate endpoint.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::config;
use crate::error::GenerateError;
use crate::ollama::stream::ResponseAccumulator;
use crate::ollama::types::{ErrorBody, GenerateRequest};

/// Trait for turning a prompt into generated text.
///
/// This abstraction allows mocking the model server in pipeline tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send `prompt` to `model` and return the full generated text.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerateError>;
}

/// Client for a single Ollama generate endpoint.
///
/// There is no request timeout: a server that never finishes its response
/// blocks the caller until the connection drops.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: Client,
    endpoint: String,
}

impl OllamaClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Client for the endpoint resolved from the environment.
    pub fn from_env() -> Self {
        Self::new(config::endpoint())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(&self, source: reqwest::Error) -> GenerateError {
        GenerateError::Transport {
            url: self.endpoint.clone(),
            source,
        }
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new(config::DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerateError> {
        let request = GenerateRequest::new(model, prompt);

        info!("Requesting completion from {} with model {}", self.endpoint, model);
        debug!("Prompt length: {} chars", prompt.len());

        let mut response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.text().await {
                Ok(body) => error_message(&body),
                Err(e) => {
                    debug!("Failed to read error body: {}", e);
                    String::new()
                }
            };
            let message = if message.is_empty() {
                status.canonical_reason().unwrap_or("no response body").to_string()
            } else {
                message
            };
            return Err(GenerateError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let mut accumulator = ResponseAccumulator::new();
        while let Some(chunk) = response.chunk().await.map_err(|e| self.transport_error(e))? {
            debug!("Received {} byte chunk", chunk.len());
            if accumulator.feed(&chunk)? {
                break;
            }
        }

        accumulator.finish()
    }
}

/// Pull the `error` field out of an Ollama error body, or fall back to the
/// raw text.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => body.trim().to_string(),
    }
}
