use lexi_provider::ProviderError;
use reqwest::Url;
use serde::{Deserialize, Deserializer};

/// Parse a provider base URL the word can be appended to
pub(crate) fn parse_base(api_url: &str) -> Result<Url, ProviderError> {
    let url = Url::parse(api_url)
        .map_err(|e| ProviderError::InvalidUrl(format!("{api_url}: {e}")))?;

    if url.cannot_be_a_base() {
        return Err(ProviderError::InvalidUrl(format!(
            "{api_url}: cannot take path segments"
        )));
    }

    Ok(url)
}

/// `{base}/{word}` with the word percent-encoded as a single segment
pub(crate) fn word_url(base: &Url, word: &str) -> Url {
    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(word);
    }
    url
}

/// Providers send `null` for empty lists
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
