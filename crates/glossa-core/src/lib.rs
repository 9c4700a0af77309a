//! # glossa-core
//!
//! Foundation crate for the Glossa embedding subsystem.
//! Defines configuration, errors, models, the remote-provider trait,
//! and tracing setup. `glossa-embeddings` builds on top of it.

pub mod config;
pub mod errors;
pub mod models;
pub mod telemetry;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{CacheConfig, EmbeddingConfig, GlossaConfig};
pub use errors::{GlossaError, GlossaResult};
pub use models::{CacheStats, DegradationEvent, EmbeddingResult};
pub use traits::RemoteEmbeddingClient;
