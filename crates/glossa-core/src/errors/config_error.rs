/// Configuration errors. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing credential for embedding model {model}")]
    MissingCredential { model: String },

    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}
