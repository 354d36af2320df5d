use lexi_types::WordDefinition;

/// Dictionary source interface
#[async_trait::async_trait]
pub trait DictionaryProvider: Send + Sync {
    /// Look up an already normalized word.
    ///
    /// `Ok(None)` means the source answered but has no usable entry.
    async fn define(&self, word: &str) -> Result<Option<WordDefinition>, ProviderError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
    pub free_tier_available: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Invalid endpoint: {0}")]
    InvalidUrl(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}

impl ProviderError {
    /// The source could not be consulted at all, as opposed to answering
    /// with an error status
    pub fn is_transport(&self) -> bool {
        matches!(self, ProviderError::NetworkError(_) | ProviderError::Decode(_))
    }
}
