//! EmbeddingOrchestrator: the main entry point for glossa-embeddings.
//!
//! Composes cache lookup, retry-guarded remote calls, fallback degradation,
//! and order-preserving batch assembly behind one contract: every caller gets
//! one `EmbeddingResult` per input text, whichever path produced it.

use std::sync::Arc;

use glossa_core::config::defaults::FALLBACK_MODEL_TAG;
use glossa_core::config::EmbeddingConfig;
use glossa_core::errors::{ConfigError, EmbeddingError, GlossaError, GlossaResult};
use glossa_core::models::{CacheStats, DegradationEvent, EmbeddingRequest, EmbeddingResult};
use glossa_core::traits::RemoteEmbeddingClient;
use tracing::{debug, info, warn};

use crate::cache::{cache_key, EmbeddingCache};
use crate::degradation::DegradationLog;
use crate::providers::FallbackEmbedder;
use crate::retry::RetryPolicy;

/// Single-text and batch embedding over a shared cache.
///
/// The cache is constructed by the caller at startup and injected, so its
/// capacity and TTL are fixed independently of any per-call config.
/// All methods take `&self`; share the orchestrator behind an `Arc` to serve
/// concurrent requests.
pub struct EmbeddingOrchestrator {
    client: Arc<dyn RemoteEmbeddingClient>,
    cache: Arc<EmbeddingCache>,
    degradation: DegradationLog,
}

impl EmbeddingOrchestrator {
    pub fn new(client: Arc<dyn RemoteEmbeddingClient>, cache: Arc<EmbeddingCache>) -> Self {
        info!(
            client = client.name(),
            cache_capacity = cache.capacity(),
            cache_ttl_ms = cache.ttl().as_millis() as u64,
            "EmbeddingOrchestrator initialized"
        );
        Self {
            client,
            cache,
            degradation: DegradationLog::new(),
        }
    }

    /// Embed one text.
    ///
    /// Cache hit → `cached = true`. Miss → remote call under the retry policy,
    /// then fallback (if enabled) or the last error.
    pub async fn embed_text(
        &self,
        text: &str,
        config: &EmbeddingConfig,
    ) -> GlossaResult<EmbeddingResult> {
        if let Some(hit) = self.lookup(text, config) {
            debug!(model = %config.model, "cache hit for text embedding");
            return Ok(hit);
        }

        let inputs = [text.to_string()];
        self.resolve_chunk(&inputs, config)
            .await?
            .pop()
            .ok_or_else(|| {
                EmbeddingError::ResponseShape {
                    reason: "no result for single text".to_string(),
                }
                .into()
            })
    }

    /// Embed many texts. `result[i].text == texts[i]` for every `i`.
    ///
    /// Misses are sent in chunks of at most `max_batch_size`, one chunk at a
    /// time, with `request_delay_ms` between consecutive remote calls. A chunk
    /// that exhausts its retries degrades on its own when fallback is enabled;
    /// otherwise the whole call fails and later chunks are not sent.
    pub async fn embed_batch(
        &self,
        texts: &[String],
        config: &EmbeddingConfig,
    ) -> GlossaResult<Vec<EmbeddingResult>> {
        let mut slots: Vec<Option<EmbeddingResult>> = vec![None; texts.len()];
        let mut misses = Vec::new();

        for (index, text) in texts.iter().enumerate() {
            match self.lookup(text, config) {
                Some(hit) => slots[index] = Some(hit),
                None => misses.push(index),
            }
        }

        debug!(
            total = texts.len(),
            hits = texts.len() - misses.len(),
            misses = misses.len(),
            "batch cache partition"
        );

        let remote = config.credential().is_some();
        for (chunk_index, chunk) in misses.chunks(config.effective_batch_size()).enumerate() {
            if chunk_index > 0 && remote {
                tokio::time::sleep(config.request_delay()).await;
            }

            let inputs: Vec<String> = chunk.iter().map(|&i| texts[i].clone()).collect();
            let resolved = self.resolve_chunk(&inputs, config).await?;
            for (&index, result) in chunk.iter().zip(resolved) {
                slots[index] = Some(result);
            }
        }

        slots
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                EmbeddingError::ResponseShape {
                    reason: "batch slot left unresolved".to_string(),
                }
                .into()
            })
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
        debug!("embedding cache cleared");
    }

    pub fn cache(&self) -> &Arc<EmbeddingCache> {
        &self.cache
    }

    /// Take the degradation events recorded since the last drain.
    pub fn drain_degradation_events(&self) -> Vec<DegradationEvent> {
        self.degradation.drain()
    }

    /// Cache lookup under the provider key. Vectors of the wrong length for
    /// the current config are ignored.
    fn lookup(&self, text: &str, config: &EmbeddingConfig) -> Option<EmbeddingResult> {
        let vector = self
            .cache
            .get(&cache_key(text, &config.model))
            .filter(|v| v.len() == config.dimensions)?;
        Some(EmbeddingResult {
            text: text.to_string(),
            vector,
            model: config.model.clone(),
            cached: true,
        })
    }

    /// Resolve a group of cache misses with one remote call per attempt.
    /// Returns one result per input, in input order.
    async fn resolve_chunk(
        &self,
        inputs: &[String],
        config: &EmbeddingConfig,
    ) -> GlossaResult<Vec<EmbeddingResult>> {
        let Some(credential) = config.credential() else {
            let err: GlossaError = ConfigError::MissingCredential {
                model: config.model.clone(),
            }
            .into();
            if config.use_fallback {
                return Ok(self.degrade(inputs, config, &err));
            }
            return Err(err);
        };

        let request = EmbeddingRequest::new(config, inputs.to_vec());
        let policy = RetryPolicy::from_config(config);
        let outcome = policy
            .run("embed_chunk", |_| self.request_vectors(credential, &request, config))
            .await;

        match outcome {
            Ok(vectors) => Ok(inputs
                .iter()
                .zip(vectors)
                .map(|(text, vector)| {
                    self.cache
                        .insert(cache_key(text, &config.model), vector.clone());
                    EmbeddingResult {
                        text: text.clone(),
                        vector,
                        model: config.model.clone(),
                        cached: false,
                    }
                })
                .collect()),
            Err(err) if config.use_fallback => Ok(self.degrade(inputs, config, &err)),
            Err(err) => Err(err),
        }
    }

    /// One remote attempt: call, bound by the request timeout, then validate.
    async fn request_vectors(
        &self,
        credential: &str,
        request: &EmbeddingRequest,
        config: &EmbeddingConfig,
    ) -> GlossaResult<Vec<Vec<f32>>> {
        let call = self.client.embed(credential, request);
        let response = match config.request_timeout() {
            Some(limit) => tokio::time::timeout(limit, call).await.map_err(|_| {
                EmbeddingError::Transport {
                    reason: format!("request timed out after {}ms", limit.as_millis()),
                }
            })??,
            None => call.await?,
        };

        if !response.model.is_empty() && response.model != request.model {
            debug!(
                requested = %request.model,
                returned = %response.model,
                "provider answered with a different model name"
            );
        }

        Ok(response.into_ordered_vectors(request.input.len(), config.dimensions)?)
    }

    /// Synthesize fallback vectors for `inputs`, cache them under the
    /// fallback tag, and record the degradation.
    fn degrade(
        &self,
        inputs: &[String],
        config: &EmbeddingConfig,
        cause: &GlossaError,
    ) -> Vec<EmbeddingResult> {
        warn!(
            texts = inputs.len(),
            model = %config.model,
            error = %cause,
            "remote embedding unavailable, using fallback"
        );
        self.degradation
            .record(cause.to_string(), FALLBACK_MODEL_TAG, inputs.len());

        let embedder = FallbackEmbedder::new(config.dimensions);
        inputs
            .iter()
            .map(|text| {
                let vector = embedder.embed(text);
                self.cache
                    .insert(cache_key(text, FALLBACK_MODEL_TAG), vector.clone());
                EmbeddingResult {
                    text: text.clone(),
                    vector,
                    model: FALLBACK_MODEL_TAG.to_string(),
                    cached: false,
                }
            })
            .collect()
    }
}
