// Single source of truth for all default values.

// --- Remote provider ---
pub const DEFAULT_ENDPOINT: &str = "https://api.jina.ai/v1/embeddings";
pub const DEFAULT_MODEL: &str = "jina-embeddings-v3";
pub const DEFAULT_TASK: &str = "text-matching";
pub const DEFAULT_EMBEDDING_TYPE: &str = "float";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 768;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

// --- Batching ---
pub const DEFAULT_MAX_BATCH_SIZE: usize = 100;
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 100;

// --- Retry ---
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1_000;
pub const DEFAULT_MAX_RETRY_DELAY_MS: u64 = 30_000;

// --- Fallback ---
pub const DEFAULT_USE_FALLBACK: bool = true;
pub const FALLBACK_MODEL_TAG: &str = "fallback-hash";

// --- Cache ---
pub const DEFAULT_CACHE_MAX_SIZE: usize = 10_000;
pub const DEFAULT_CACHE_TTL_MS: u64 = 3_600_000; // 1 hour

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "glossa=info";
pub const LOG_ENV_VAR: &str = "GLOSSA_LOG";
