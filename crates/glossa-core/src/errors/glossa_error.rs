use super::{ConfigError, EmbeddingError};

/// Top-level error for the Glossa workspace.
#[derive(Debug, thiserror::Error)]
pub enum GlossaError {
    #[error(transparent)]
    EmbeddingError(#[from] EmbeddingError),

    #[error(transparent)]
    ConfigError(#[from] ConfigError),
}

impl GlossaError {
    /// Whether a retry policy should attempt the operation again.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::EmbeddingError(e) => e.is_retryable(),
            Self::ConfigError(_) => false,
        }
    }
}

pub type GlossaResult<T> = Result<T, GlossaError>;
