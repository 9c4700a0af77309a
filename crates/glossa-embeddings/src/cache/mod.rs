//! Embedding cache: key derivation and the shared in-memory store.

pub mod key;
pub mod memory;

pub use key::{cache_key, normalize_for_key};
pub use memory::EmbeddingCache;
