//! HTTP embedding provider.
//!
//! Posts `{model, task, dimensions, embedding_type, input}` to a
//! Jina-style `/v1/embeddings` endpoint with bearer auth. One call per
//! invocation; the orchestrator owns retry and timeout.

use async_trait::async_trait;
use glossa_core::config::EmbeddingConfig;
use glossa_core::errors::{EmbeddingError, GlossaResult};
use glossa_core::models::{EmbeddingRequest, EmbeddingResponse};
use glossa_core::traits::RemoteEmbeddingClient;
use tracing::debug;

/// reqwest-backed [`RemoteEmbeddingClient`].
#[derive(Debug, Clone)]
pub struct HttpEmbeddingClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpEmbeddingClient {
    pub fn new(endpoint: impl Into<String>) -> GlossaResult<Self> {
        let client = reqwest::Client::builder()
            .gzip(true)
            .build()
            .map_err(|e| EmbeddingError::Transport {
                reason: format!("client build failed: {e}"),
            })?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &EmbeddingConfig) -> GlossaResult<Self> {
        Self::new(config.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RemoteEmbeddingClient for HttpEmbeddingClient {
    async fn embed(
        &self,
        credential: &str,
        request: &EmbeddingRequest,
    ) -> GlossaResult<EmbeddingResponse> {
        debug!(
            endpoint = %self.endpoint,
            model = %request.model,
            inputs = request.input.len(),
            "sending embedding request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(credential)
            .json(request)
            .send()
            .await
            .map_err(|e| EmbeddingError::Transport {
                reason: format!("HTTP error: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::Transport {
                reason: format!("provider returned {status}: {body}"),
            }
            .into());
        }

        let parsed = response
            .json::<EmbeddingResponse>()
            .await
            .map_err(|e| EmbeddingError::ResponseShape {
                reason: format!("JSON parse error: {e}"),
            })?;

        Ok(parsed)
    }

    fn name(&self) -> &str {
        "http"
    }
}
