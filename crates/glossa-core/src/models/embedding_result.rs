use serde::{Deserialize, Serialize};

use crate::config::defaults::FALLBACK_MODEL_TAG;

/// The vector produced for one input text, and how it was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingResult {
    /// The caller's original text, unnormalized.
    pub text: String,
    pub vector: Vec<f32>,
    /// Provider model name, or [`FALLBACK_MODEL_TAG`] for degraded vectors.
    pub model: String,
    /// Whether the vector was served from the cache.
    pub cached: bool,
}

impl EmbeddingResult {
    /// Whether this vector came from the local fallback and carries no semantics.
    pub fn is_fallback(&self) -> bool {
        self.model == FALLBACK_MODEL_TAG
    }

    pub fn dimensions(&self) -> usize {
        self.vector.len()
    }
}
