use async_trait::async_trait;
use lexi_provider::{DictionaryProvider, ProviderError, ProviderMetadata};
use lexi_types::{Definition, MAX_MEANINGS, Meaning, WordDefinition};
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::endpoint::{null_as_default, parse_base, word_url};

/// Client for WordsAPI through RapidAPI
#[derive(Clone)]
pub struct WordsApiProvider {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
    api_host: String,
}

impl WordsApiProvider {
    pub fn new(api_url: &str, api_key: String, api_host: String) -> Result<Self, ProviderError> {
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: parse_base(api_url)?,
            api_key,
            api_host,
        })
    }
}

#[async_trait]
impl DictionaryProvider for WordsApiProvider {
    async fn define(&self, word: &str) -> Result<Option<WordDefinition>, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::AuthenticationError);
        }

        let url = word_url(&self.base_url, word);
        tracing::debug!("WordsAPI request: {}", url);

        let response = self
            .client
            .get(url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimitExceeded);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ProviderError::AuthenticationError);
        }

        if !status.is_success() {
            return Err(ProviderError::ApiError(format!("HTTP {}", status)));
        }

        let body: WordsApiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(format!("Failed to parse response: {}", e)))?;

        Ok(body.into_definition(word))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "WordsAPI".to_string(),
            requires_api_key: true,
            free_tier_available: true,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WordsApiResponse {
    #[serde(default)]
    word: Option<String>,
    #[serde(default)]
    pronunciation: Option<Pronunciation>,
    #[serde(default)]
    results: Option<Vec<WordsApiResult>>,
}

/// Either `"pronunciation": "ˈwɜrd"` or `"pronunciation": { "all": "ˈwɜrd" }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Pronunciation {
    Plain(String),
    Detailed {
        #[serde(default)]
        all: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
struct WordsApiResult {
    #[serde(default)]
    definition: Option<String>,
    #[serde(rename = "partOfSpeech", default)]
    part_of_speech: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    examples: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    synonyms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    antonyms: Vec<String>,
}

impl WordsApiResponse {
    /// `None` when the response carries no results
    fn into_definition(self, queried: &str) -> Option<WordDefinition> {
        let results = self.results.filter(|r| !r.is_empty())?;

        let word = self
            .word
            .filter(|w| !w.trim().is_empty())
            .unwrap_or_else(|| queried.to_string());

        let phonetic = self.pronunciation.and_then(|p| match p {
            Pronunciation::Plain(text) => Some(text),
            Pronunciation::Detailed { all } => all,
        });

        let definition = results
            .into_iter()
            .take(MAX_MEANINGS)
            .map(|result| {
                Meaning::new(
                    result.part_of_speech,
                    vec![
                        Definition::new(result.definition.unwrap_or_default())
                            .with_example(result.examples.into_iter().next())
                            .with_synonyms(result.synonyms)
                            .with_antonyms(result.antonyms),
                    ],
                )
            })
            .fold(
                WordDefinition::new(word).with_phonetic(phonetic),
                WordDefinition::with_meaning,
            );

        Some(definition.truncated())
    }
}
