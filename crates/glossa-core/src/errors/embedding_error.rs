/// Embedding subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("transport failure: {reason}")]
    Transport { reason: String },

    #[error("malformed provider response: {reason}")]
    ResponseShape { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl EmbeddingError {
    /// Transport and response-shape failures are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::ResponseShape { .. })
    }
}
