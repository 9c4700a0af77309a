pub mod cache_config;
pub mod defaults;
pub mod embedding_config;
pub mod glossa_config;

pub use cache_config::CacheConfig;
pub use embedding_config::{BackoffStrategy, EmbeddingConfig};
pub use glossa_config::GlossaConfig;
