//! Embedding sources.
//!
//! 1. HTTP (remote provider, primary)
//! 2. Fallback (local, always available, no semantics)

pub mod fallback;
pub mod http_provider;

pub use fallback::FallbackEmbedder;
pub use http_provider::HttpEmbeddingClient;
