//! Vector similarity.

use glossa_core::errors::{EmbeddingError, GlossaResult};

/// Cosine similarity between two equal-length vectors.
///
/// Returns 0.0 when either vector has zero norm. The result is clamped to
/// [-1, 1] to absorb rounding.
///
/// # Errors
/// Returns `DimensionMismatch` if the lengths differ.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> GlossaResult<f32> {
    validate_dimensions(b, a.len())?;

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (x as f64, y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return Ok(0.0);
    }
    Ok((dot / denom).clamp(-1.0, 1.0) as f32)
}

/// Validate that an embedding has the expected dimensions.
///
/// # Errors
/// Returns `DimensionMismatch` if dimensions don't match.
pub fn validate_dimensions(embedding: &[f32], expected: usize) -> GlossaResult<()> {
    if embedding.len() != expected {
        return Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: embedding.len(),
        }
        .into());
    }
    Ok(())
}
