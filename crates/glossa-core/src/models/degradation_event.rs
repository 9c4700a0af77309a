use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recorded whenever a request is served by the fallback instead of the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegradationEvent {
    pub component: String,
    pub failure: String,
    pub fallback_used: String,
    /// Number of texts that received a degraded vector.
    pub affected: usize,
    pub timestamp: DateTime<Utc>,
}
