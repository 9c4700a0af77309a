//! In-memory embedding cache: strict LRU eviction plus per-entry TTL.
//!
//! Expiry is checked lazily on read; `purge_expired` is an optional sweep.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use glossa_core::config::CacheConfig;
use glossa_core::models::CacheStats;
use lru::LruCache;
use parking_lot::Mutex;
use tracing::debug;

struct CacheEntry {
    vector: Vec<f32>,
    inserted_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() >= ttl
    }
}

/// Bounded, time-expiring key → vector map shared by all embedding calls.
///
/// Keys come from [`super::cache_key`]. Safe to share behind an `Arc`.
pub struct EmbeddingCache {
    entries: Mutex<LruCache<String, CacheEntry>>,
    capacity: usize,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl EmbeddingCache {
    pub fn new(config: &CacheConfig) -> Self {
        Self::with_capacity(config.max_size, config.ttl())
    }

    /// Capacity 0 is clamped to 1.
    pub fn with_capacity(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            capacity: capacity.get(),
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up a vector. Expired entries are dropped and reported as a miss.
    pub fn get(&self, key: &str) -> Option<Vec<f32>> {
        let mut entries = self.entries.lock();

        let expired = match entries.peek(key) {
            Some(entry) => entry.is_expired(self.ttl),
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                return None;
            }
        };

        if expired {
            entries.pop(key);
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!(key, "cache entry expired");
            return None;
        }

        self.hits.fetch_add(1, Ordering::Relaxed);
        entries.get(key).map(|entry| entry.vector.clone())
    }

    /// Insert or replace a vector, evicting the least-recently-used entry on overflow.
    pub fn insert(&self, key: String, vector: Vec<f32>) {
        let entry = CacheEntry {
            vector,
            inserted_at: Instant::now(),
        };
        let mut entries = self.entries.lock();
        if let Some((evicted, _)) = entries.push(key.clone(), entry) {
            if evicted != key {
                debug!(key = %evicted, "cache entry evicted");
            }
        }
    }

    /// Drop every expired entry now. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let mut entries = self.entries.lock();
        let expired: Vec<String> = entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(self.ttl))
            .map(|(key, _)| key.clone())
            .collect();
        for key in &expired {
            entries.pop(key);
        }
        if !expired.is_empty() {
            debug!(removed = expired.len(), "purged expired cache entries");
        }
        expired.len()
    }

    /// Invalidate all entries. Hit/miss counters are kept.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Number of stored entries, including expired ones not yet read.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.len(),
            capacity: self.capacity,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
