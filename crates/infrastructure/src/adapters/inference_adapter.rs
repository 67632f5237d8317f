//! Ollama inference adapter - Implements InferencePort using ai_core
//!
//! Works with any Ollama-compatible backend.

use std::time::Instant;

use ai_core::{InferenceConfig, InferenceEngine, InferenceRequest, OllamaInferenceEngine};
use application::{
    error::ApplicationError,
    ports::{InferencePort, InferenceResult},
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for Ollama-compatible inference servers
#[derive(Debug)]
pub struct OllamaInferenceAdapter {
    engine: OllamaInferenceEngine,
}

impl OllamaInferenceAdapter {
    /// Create a new adapter with the given configuration
    pub fn new(config: InferenceConfig) -> Result<Self, ApplicationError> {
        let engine = OllamaInferenceEngine::new(config)
            .map_err(|e| ApplicationError::Inference(e.to_string()))?;
        Ok(Self { engine })
    }

    /// Create with default configuration
    pub fn with_defaults() -> Result<Self, ApplicationError> {
        Self::new(InferenceConfig::default())
    }

    /// Convert ai_core error to application error
    fn map_error(e: ai_core::InferenceError) -> ApplicationError {
        match e {
            ai_core::InferenceError::RateLimited => ApplicationError::RateLimited,
            ai_core::InferenceError::ConnectionFailed(msg) => {
                ApplicationError::ExternalService(format!("Ollama connection failed: {msg}"))
            },
            ai_core::InferenceError::Timeout(ms) => {
                ApplicationError::ExternalService(format!("Inference timeout after {ms}ms"))
            },
            other => ApplicationError::Inference(other.to_string()),
        }
    }
}

#[async_trait]
impl InferencePort for OllamaInferenceAdapter {
    #[instrument(skip(self, system_prompt, message))]
    async fn generate_with_system(
        &self,
        system_prompt: &str,
        message: &str,
    ) -> Result<InferenceResult, ApplicationError> {
        let started = Instant::now();

        let response = self
            .engine
            .generate(InferenceRequest::with_system(system_prompt, message))
            .await
            .map_err(Self::map_error)?;

        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        debug!(
            model = %response.model,
            latency_ms,
            "Inference completed"
        );

        Ok(InferenceResult {
            content: response.content,
            model: response.model,
            tokens_used: response.usage.map(|u| u.total_tokens),
            latency_ms,
        })
    }

    async fn is_healthy(&self) -> bool {
        self.engine.health_check().await.unwrap_or(false)
    }

    fn current_model(&self) -> &str {
        self.engine.default_model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_adapter() {
        assert!(OllamaInferenceAdapter::with_defaults().is_ok());
    }

    #[test]
    fn current_model_reads_config() {
        let adapter = OllamaInferenceAdapter::with_defaults().unwrap();
        assert_eq!(adapter.current_model(), "llama3.2:3b");
    }

    #[test]
    fn map_error_rate_limited() {
        let app_err = OllamaInferenceAdapter::map_error(ai_core::InferenceError::RateLimited);
        assert!(matches!(app_err, ApplicationError::RateLimited));
    }

    #[test]
    fn map_error_connection_failed_is_retryable() {
        let app_err = OllamaInferenceAdapter::map_error(
            ai_core::InferenceError::ConnectionFailed("refused".into()),
        );
        assert!(app_err.is_retryable());
    }

    #[test]
    fn map_error_server_error_is_inference() {
        let app_err =
            OllamaInferenceAdapter::map_error(ai_core::InferenceError::ServerError("500".into()));
        assert!(matches!(app_err, ApplicationError::Inference(_)));
    }
}
