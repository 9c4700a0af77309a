use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding cache configuration.
///
/// Read once when the cache is constructed at process start.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of cached vectors.
    pub max_size: usize,
    /// Time-to-live for a cached vector, in milliseconds.
    pub ttl_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: defaults::DEFAULT_CACHE_MAX_SIZE,
            ttl_ms: defaults::DEFAULT_CACHE_TTL_MS,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}
