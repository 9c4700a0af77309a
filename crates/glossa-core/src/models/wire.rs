//! Remote provider wire protocol.

use serde::{Deserialize, Serialize};

use crate::config::EmbeddingConfig;
use crate::errors::EmbeddingError;

/// Body of a provider embedding call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingRequest {
    pub model: String,
    pub task: String,
    pub dimensions: usize,
    pub embedding_type: String,
    pub input: Vec<String>,
}

impl EmbeddingRequest {
    pub fn new(config: &EmbeddingConfig, input: Vec<String>) -> Self {
        Self {
            model: config.model.clone(),
            task: config.task.clone(),
            dimensions: config.dimensions,
            embedding_type: config.embedding_type.clone(),
            input,
        }
    }
}

/// Successful provider reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub data: Vec<EmbeddingData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingData {
    pub index: usize,
    pub embedding: Vec<f32>,
}

impl EmbeddingResponse {
    /// Reassemble vectors in request order.
    ///
    /// The reply must carry exactly one vector per input, each index in
    /// `0..expected_count` exactly once, and every vector `expected_dims` long.
    pub fn into_ordered_vectors(
        self,
        expected_count: usize,
        expected_dims: usize,
    ) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if self.data.len() != expected_count {
            return Err(EmbeddingError::ResponseShape {
                reason: format!(
                    "expected {expected_count} vectors, got {}",
                    self.data.len()
                ),
            });
        }

        let mut slots: Vec<Option<Vec<f32>>> = vec![None; expected_count];
        for item in self.data {
            if item.embedding.len() != expected_dims {
                return Err(EmbeddingError::ResponseShape {
                    reason: format!(
                        "vector {} has {} dimensions, expected {expected_dims}",
                        item.index,
                        item.embedding.len()
                    ),
                });
            }
            let slot = slots
                .get_mut(item.index)
                .ok_or_else(|| EmbeddingError::ResponseShape {
                    reason: format!("index {} out of range", item.index),
                })?;
            if slot.replace(item.embedding).is_some() {
                return Err(EmbeddingError::ResponseShape {
                    reason: format!("duplicate index {}", item.index),
                });
            }
        }

        // Count matched and no index repeated, so every slot is filled.
        slots
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| EmbeddingError::ResponseShape {
                reason: "missing vector index".to_string(),
            })
    }
}
