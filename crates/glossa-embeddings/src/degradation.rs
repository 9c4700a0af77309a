//! Degradation log.
//!
//! Every request served by the fallback embedder instead of the remote
//! provider is recorded here so callers can surface reduced match quality.

use chrono::Utc;
use glossa_core::models::DegradationEvent;
use parking_lot::Mutex;

const COMPONENT: &str = "embeddings";

#[derive(Default)]
pub struct DegradationLog {
    events: Mutex<Vec<DegradationEvent>>,
}

impl DegradationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, failure: String, fallback_used: &str, affected: usize) {
        self.events.lock().push(DegradationEvent {
            component: COMPONENT.to_string(),
            failure,
            fallback_used: fallback_used.to_string(),
            affected,
            timestamp: Utc::now(),
        });
    }

    /// Take every event recorded so far.
    pub fn drain(&self) -> Vec<DegradationEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
