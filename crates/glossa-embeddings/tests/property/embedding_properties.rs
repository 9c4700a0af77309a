//! Property tests for glossa-embeddings: fallback shape, similarity laws,
//! batch order, cache eviction.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use proptest::prelude::*;

use glossa_core::config::EmbeddingConfig;
use glossa_core::errors::GlossaResult;
use glossa_core::models::{EmbeddingData, EmbeddingRequest, EmbeddingResponse};
use glossa_core::traits::RemoteEmbeddingClient;
use glossa_embeddings::{
    cosine_similarity, EmbeddingCache, EmbeddingOrchestrator, FallbackEmbedder,
};

/// Provider whose vector encodes the input length, so results can be
/// matched back to their text.
struct LengthClient;

#[async_trait]
impl RemoteEmbeddingClient for LengthClient {
    async fn embed(
        &self,
        _credential: &str,
        request: &EmbeddingRequest,
    ) -> GlossaResult<EmbeddingResponse> {
        Ok(EmbeddingResponse {
            model: request.model.clone(),
            data: request
                .input
                .iter()
                .enumerate()
                .map(|(index, text)| EmbeddingData {
                    index,
                    embedding: vec![text.chars().count() as f32; request.dimensions],
                })
                .collect(),
        })
    }

    fn name(&self) -> &str {
        "length"
    }
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn vector_strategy(len: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-100.0_f32..100.0_f32, len)
}

// =============================================================================
// Fallback: fixed dimension, unit norm
// =============================================================================
proptest! {
    #[test]
    fn fallback_has_configured_dims_and_unit_norm(
        text in ".{0,200}",
        dims in 1usize..1024,
    ) {
        let vector = FallbackEmbedder::new(dims).embed(&text);
        prop_assert_eq!(vector.len(), dims);
        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        prop_assert!((norm - 1.0).abs() < 1e-3, "norm was {}", norm);
    }
}

// =============================================================================
// Fallback: same text, bit-identical vector
// =============================================================================
proptest! {
    #[test]
    fn fallback_is_deterministic(text in ".{0,200}") {
        let embedder = FallbackEmbedder::new(768);
        let a = embedder.embed(&text);
        let b = embedder.embed(&text);
        let a_bits: Vec<u32> = a.iter().map(|x| x.to_bits()).collect();
        let b_bits: Vec<u32> = b.iter().map(|x| x.to_bits()).collect();
        prop_assert_eq!(a_bits, b_bits);
    }
}

// =============================================================================
// Similarity: symmetry and self-similarity
// =============================================================================
proptest! {
    #[test]
    fn cosine_is_symmetric(
        (a, b) in (1usize..64).prop_flat_map(|n| (vector_strategy(n), vector_strategy(n)))
    ) {
        let ab = cosine_similarity(&a, &b).unwrap();
        let ba = cosine_similarity(&b, &a).unwrap();
        prop_assert_eq!(ab, ba);
        prop_assert!((-1.0..=1.0).contains(&ab));
    }

    #[test]
    fn cosine_with_self_is_one(v in vector_strategy(32)) {
        prop_assume!(v.iter().any(|x| x.abs() > 1e-3));
        let sim = cosine_similarity(&v, &v).unwrap();
        prop_assert!((sim - 1.0).abs() < 1e-5, "sim was {}", sim);
    }
}

// =============================================================================
// Batch: one result per input, same order
// =============================================================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn batch_preserves_length_and_order(
        texts in prop::collection::vec("[a-z ]{0,12}", 0..40),
        batch_size in 1usize..8,
        prewarm in 0usize..10,
    ) {
        let engine = EmbeddingOrchestrator::new(
            Arc::new(LengthClient),
            Arc::new(EmbeddingCache::with_capacity(1_000, Duration::from_secs(60))),
        );
        let config = EmbeddingConfig {
            api_key: Some("key".to_string()),
            dimensions: 8,
            max_batch_size: batch_size,
            request_delay_ms: 0,
            ..Default::default()
        };

        let results = runtime().block_on(async {
            for text in texts.iter().take(prewarm) {
                engine.embed_text(text, &config).await.unwrap();
            }
            engine.embed_batch(&texts, &config).await.unwrap()
        });

        prop_assert_eq!(results.len(), texts.len());
        for (result, text) in results.iter().zip(&texts) {
            prop_assert_eq!(&result.text, text);
            prop_assert_eq!(result.vector.len(), 8);
            prop_assert!(!result.is_fallback());
        }
    }
}

// =============================================================================
// Cache: never exceeds capacity
// =============================================================================
proptest! {
    #[test]
    fn cache_size_never_exceeds_capacity(
        capacity in 1usize..32,
        keys in prop::collection::vec("[a-z]{1,4}", 0..100),
    ) {
        let cache = EmbeddingCache::with_capacity(capacity, Duration::from_secs(60));
        for key in &keys {
            cache.insert(key.clone(), vec![1.0]);
            prop_assert!(cache.len() <= capacity);
        }
        if let Some(last) = keys.last() {
            prop_assert!(cache.get(last).is_some());
        }
    }
}
