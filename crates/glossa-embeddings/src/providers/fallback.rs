//! Deterministic character-spread fallback embedder.
//!
//! Produces fixed-dimension unit vectors from raw characters. No network, no
//! model files. The vectors carry shape, not meaning: results are tagged
//! [`FALLBACK_MODEL_TAG`] so consumers can discount similarity scores.

use glossa_core::config::defaults::FALLBACK_MODEL_TAG;

/// Scale applied to a character code before accumulation.
const CODE_SCALE: f32 = 128.0;

/// Offline embedder used when the remote provider is unreachable.
#[derive(Debug, Clone, Copy)]
pub struct FallbackEmbedder {
    dimensions: usize,
}

impl FallbackEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn model_tag(&self) -> &'static str {
        FALLBACK_MODEL_TAG
    }

    /// Embed one text. Always returns `dimensions` values with unit L2 norm.
    pub fn embed(&self, text: &str) -> Vec<f32> {
        let dims = self.dimensions;
        if dims == 0 {
            return Vec::new();
        }

        let normalized = text.trim().to_lowercase();
        let mut vec = vec![0.0f32; dims];

        // Each character lands in three slots derived from (index, code), so
        // strings sharing characters at the same positions overlap.
        for (i, ch) in normalized.chars().enumerate() {
            let code = ch as usize;
            let weight = code as f32 / CODE_SCALE;
            vec[(code + i) % dims] += weight;
            vec[(code.wrapping_mul(31) + i.wrapping_mul(7)) % dims] += weight * 0.5;
            vec[(code.wrapping_mul(17) + i.wrapping_mul(13) + 3) % dims] += weight * 0.25;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
            vec
        } else {
            uniform_unit_vector(dims)
        }
    }

    pub fn embed_batch(&self, texts: &[String]) -> Vec<Vec<f32>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }
}

/// Substitute for texts with nothing to accumulate (empty or whitespace-only).
fn uniform_unit_vector(dims: usize) -> Vec<f32> {
    vec![1.0 / (dims as f32).sqrt(); dims]
}
