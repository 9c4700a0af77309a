use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use glossa_embeddings::{cache_key, cosine_similarity, EmbeddingCache, FallbackEmbedder};

const DIMS: usize = 768;

fn sample_texts(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("the quarterly revenue report for region {i} was revised"))
        .collect()
}

fn bench_fallback_single(c: &mut Criterion) {
    let embedder = FallbackEmbedder::new(DIMS);
    c.bench_function("fallback_embed_single", |b| {
        b.iter(|| embedder.embed(black_box("transcript correction with domain vocabulary")))
    });
}

fn bench_fallback_batch(c: &mut Criterion) {
    let embedder = FallbackEmbedder::new(DIMS);
    let texts = sample_texts(100);
    c.bench_function("fallback_embed_batch_100", |b| {
        b.iter(|| embedder.embed_batch(black_box(&texts)))
    });
}

fn bench_cosine(c: &mut Criterion) {
    let embedder = FallbackEmbedder::new(DIMS);
    let a = embedder.embed("acetaminophen");
    let b = embedder.embed("acetaminophin");
    c.bench_function("cosine_similarity_768", |bench| {
        bench.iter(|| cosine_similarity(black_box(&a), black_box(&b)))
    });
}

fn bench_cache_hit(c: &mut Criterion) {
    let cache = EmbeddingCache::with_capacity(10_000, Duration::from_secs(3_600));
    let embedder = FallbackEmbedder::new(DIMS);
    let keys: Vec<String> = sample_texts(1_000)
        .iter()
        .map(|text| {
            let key = cache_key(text, "jina-embeddings-v3");
            cache.insert(key.clone(), embedder.embed(text));
            key
        })
        .collect();

    let mut i = 0;
    c.bench_function("cache_hit_768", |b| {
        b.iter(|| {
            i = (i + 1) % keys.len();
            cache.get(black_box(&keys[i]))
        })
    });
}

fn bench_cache_key(c: &mut Criterion) {
    c.bench_function("cache_key", |b| {
        b.iter(|| cache_key(black_box("  Mixed CASE   input text "), black_box("jina-embeddings-v3")))
    });
}

criterion_group!(
    benches,
    bench_fallback_single,
    bench_fallback_batch,
    bench_cosine,
    bench_cache_hit,
    bench_cache_key,
);
criterion_main!(benches);
