use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Growth curve for the pause between retry attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BackoffStrategy {
    /// `retry_delay * (attempt + 1)`.
    #[default]
    Linear,
    /// `retry_delay * 2^attempt`.
    Exponential,
}

/// Per-call embedding configuration.
///
/// Supplied on every `embed_text` / `embed_batch` call. Cache sizing lives in
/// [`super::CacheConfig`] because the cache is built once at startup.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Provider credential. Never serialized back out.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Provider endpoint URL.
    pub endpoint: String,
    /// Provider model identifier.
    pub model: String,
    /// Provider task hint (e.g. "text-matching").
    pub task: String,
    /// Expected vector length for this model.
    pub dimensions: usize,
    /// Provider embedding representation (e.g. "float").
    pub embedding_type: String,
    /// Upper bound on texts per remote call.
    pub max_batch_size: usize,
    /// Minimum pause between consecutive chunk calls.
    pub request_delay_ms: u64,
    /// Total attempts per remote call.
    pub max_retries: u32,
    /// Base unit for the retry backoff.
    pub retry_delay_ms: u64,
    /// Backoff growth curve.
    pub backoff: BackoffStrategy,
    /// Ceiling for a single backoff pause.
    pub max_retry_delay_ms: u64,
    /// Bound on a single remote attempt; 0 disables it.
    pub request_timeout_ms: u64,
    /// Synthesize a local vector when retries are exhausted.
    pub use_fallback: bool,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: defaults::DEFAULT_ENDPOINT.to_string(),
            model: defaults::DEFAULT_MODEL.to_string(),
            task: defaults::DEFAULT_TASK.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            embedding_type: defaults::DEFAULT_EMBEDDING_TYPE.to_string(),
            max_batch_size: defaults::DEFAULT_MAX_BATCH_SIZE,
            request_delay_ms: defaults::DEFAULT_REQUEST_DELAY_MS,
            max_retries: defaults::DEFAULT_MAX_RETRIES,
            retry_delay_ms: defaults::DEFAULT_RETRY_DELAY_MS,
            backoff: BackoffStrategy::default(),
            max_retry_delay_ms: defaults::DEFAULT_MAX_RETRY_DELAY_MS,
            request_timeout_ms: defaults::DEFAULT_REQUEST_TIMEOUT_MS,
            use_fallback: defaults::DEFAULT_USE_FALLBACK,
        }
    }
}

impl EmbeddingConfig {
    /// The credential, if one is configured and non-blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// Bound on one remote attempt. `None` when `request_timeout_ms` is 0.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_ms > 0).then(|| Duration::from_millis(self.request_timeout_ms))
    }

    /// Chunk size for batch calls. Zero is treated as one.
    pub fn effective_batch_size(&self) -> usize {
        self.max_batch_size.max(1)
    }
}

impl fmt::Debug for EmbeddingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddingConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("task", &self.task)
            .field("dimensions", &self.dimensions)
            .field("embedding_type", &self.embedding_type)
            .field("max_batch_size", &self.max_batch_size)
            .field("request_delay_ms", &self.request_delay_ms)
            .field("max_retries", &self.max_retries)
            .field("retry_delay_ms", &self.retry_delay_ms)
            .field("backoff", &self.backoff)
            .field("max_retry_delay_ms", &self.max_retry_delay_ms)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .field("use_fallback", &self.use_fallback)
            .finish()
    }
}
