//! Cache key derivation.

/// Lowercase, trim, and collapse every whitespace run to a single space.
pub fn normalize_for_key(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Key for `text` embedded by `model`.
///
/// Texts that differ only in case or whitespace share a key; the same text
/// under two models never does.
pub fn cache_key(text: &str, model: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(normalize_for_key(text).as_bytes());
    hasher.update(b":");
    hasher.update(model.as_bytes());
    hasher.finalize().to_hex().to_string()
}
