use lexi_provider::ProviderError;

/// Failure that escaped a single resolution attempt
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("{provider} failed: {source}")]
    Provider {
        provider: String,
        #[source]
        source: ProviderError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("resolver needs at least one lookup strategy")]
    NoStrategies,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
