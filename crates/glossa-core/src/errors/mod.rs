pub mod config_error;
pub mod embedding_error;
pub mod glossa_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use glossa_error::{GlossaError, GlossaResult};
