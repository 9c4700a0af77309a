use async_trait::async_trait;

use crate::errors::GlossaResult;
use crate::models::{EmbeddingRequest, EmbeddingResponse};

/// Network boundary to a third-party embedding provider.
///
/// Implementations perform exactly one call per invocation; retries, timeouts
/// and response validation are the caller's concern.
#[async_trait]
pub trait RemoteEmbeddingClient: Send + Sync {
    /// Submit one request. Non-success statuses and transport failures should
    /// surface as `EmbeddingError::Transport`, undecodable bodies as
    /// `EmbeddingError::ResponseShape`.
    async fn embed(
        &self,
        credential: &str,
        request: &EmbeddingRequest,
    ) -> GlossaResult<EmbeddingResponse>;

    /// Human-readable client name, used in logs.
    fn name(&self) -> &str;
}
