pub mod cache_stats;
pub mod degradation_event;
pub mod embedding_result;
pub mod wire;

pub use cache_stats::CacheStats;
pub use degradation_event::DegradationEvent;
pub use embedding_result::EmbeddingResult;
pub use wire::{EmbeddingData, EmbeddingRequest, EmbeddingResponse};
