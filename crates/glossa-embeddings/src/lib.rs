//! # glossa-embeddings
//!
//! Embedding pipeline: cache lookup → remote provider (with retry and timeout)
//! → deterministic fallback when the provider stays unavailable.
//! Batch calls preserve input order across any mix of hits, remote results,
//! and fallback vectors.

pub mod cache;
pub mod degradation;
pub mod engine;
pub mod providers;
pub mod retry;
pub mod similarity;

pub use cache::{cache_key, EmbeddingCache};
pub use engine::EmbeddingOrchestrator;
pub use providers::{FallbackEmbedder, HttpEmbeddingClient};
pub use retry::RetryPolicy;
pub use similarity::{cosine_similarity, validate_dimensions};
