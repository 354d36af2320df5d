use async_trait::async_trait;
use lexi_provider::{DictionaryProvider, ProviderError, ProviderMetadata};
use lexi_types::{Definition, MAX_DEFINITIONS, MAX_MEANINGS, Meaning, WordDefinition};
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::endpoint::{null_as_default, parse_base, word_url};

/// Client for dictionaryapi.dev
#[derive(Clone)]
pub struct FreeDictionaryProvider {
    client: reqwest::Client,
    base_url: Url,
}

impl FreeDictionaryProvider {
    pub fn new(api_url: &str) -> Result<Self, ProviderError> {
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: parse_base(api_url)?,
        })
    }
}

#[async_trait]
impl DictionaryProvider for FreeDictionaryProvider {
    async fn define(&self, word: &str) -> Result<Option<WordDefinition>, ProviderError> {
        let url = word_url(&self.base_url, word);
        tracing::debug!("Free Dictionary request: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimitExceeded);
        }

        if !status.is_success() {
            return Err(ProviderError::ApiError(format!("HTTP {}", status)));
        }

        let entries: Vec<Entry> = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(format!("Failed to parse response: {}", e)))?;

        tracing::debug!("Free Dictionary returned {} entries for '{}'", entries.len(), word);

        Ok(entries.into_iter().next().map(|entry| entry.into_definition(word)))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Free Dictionary API".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

// Response schema, one element of the top-level array
#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    word: Option<String>,
    #[serde(default)]
    phonetic: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    phonetics: Vec<Phonetic>,
    #[serde(default)]
    origin: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    meanings: Vec<EntryMeaning>,
}

#[derive(Debug, Deserialize)]
struct Phonetic {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EntryMeaning {
    #[serde(rename = "partOfSpeech", default)]
    part_of_speech: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    definitions: Vec<EntryDefinition>,
}

#[derive(Debug, Deserialize)]
struct EntryDefinition {
    #[serde(default)]
    definition: Option<String>,
    #[serde(default)]
    example: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    synonyms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    antonyms: Vec<String>,
}

impl Entry {
    fn into_definition(self, queried: &str) -> WordDefinition {
        let word = self
            .word
            .filter(|w| !w.trim().is_empty())
            .unwrap_or_else(|| queried.to_string());

        let phonetic = self.phonetic.filter(|p| !p.trim().is_empty()).or_else(|| {
            self.phonetics
                .into_iter()
                .filter_map(|p| p.text)
                .find(|t| !t.trim().is_empty())
        });

        let meanings = self
            .meanings
            .into_iter()
            .take(MAX_MEANINGS)
            .map(|meaning| {
                let definitions = meaning
                    .definitions
                    .into_iter()
                    .take(MAX_DEFINITIONS)
                    .map(|d| {
                        Definition::new(d.definition.unwrap_or_default())
                            .with_example(d.example)
                            .with_synonyms(d.synonyms)
                            .with_antonyms(d.antonyms)
                    })
                    .collect();
                Meaning::new(meaning.part_of_speech, definitions)
            });

        meanings
            .fold(
                WordDefinition::new(word)
                    .with_phonetic(phonetic)
                    .with_origin(self.origin),
                WordDefinition::with_meaning,
            )
            .truncated()
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn definition(i: usize) -> serde_json::Value {
        json!({
            "definition": format!("sense {i}"),
            "synonyms": ["a", "b", "c", "d", "e", "f", "g"],
            "antonyms": ["w", "x", "y", "z"]
        })
    }

    fn meaning(pos: &str) -> serde_json::Value {
        json!({
            "partOfSpeech": pos,
            "definitions": (0..5).map(definition).collect::<Vec<_>>()
        })
    }

    async fn provider_for(server: &MockServer) -> FreeDictionaryProvider {
        FreeDictionaryProvider::new(&format!("{}/api/v2/entries/en", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn adapts_first_entry_within_caps() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/entries/en/run"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "word": "run",
                    "phonetics": [{ "audio": "" }, { "text": "/ɹʌn/" }],
                    "origin": "Old English rinnan",
                    "meanings": [meaning("verb"), meaning("noun"), meaning("adjective"), meaning("adverb")]
                },
                { "word": "run", "meanings": [] }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let def = provider_for(&server).await.define("run").await.unwrap().unwrap();

        assert_eq!(def.word, "run");
        assert_eq!(def.phonetic.as_deref(), Some("/ɹʌn/"));
        assert_eq!(def.origin.as_deref(), Some("Old English rinnan"));
        assert_eq!(def.meanings.len(), 3);
        assert_eq!(def.meanings[0].part_of_speech, "verb");
        for meaning in &def.meanings {
            assert_eq!(meaning.definitions.len(), 3);
            for d in &meaning.definitions {
                assert_eq!(d.synonyms.len(), 5);
                assert_eq!(d.antonyms.len(), 3);
            }
        }
    }

    #[tokio::test]
    async fn fills_gaps_with_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "phonetic": "",
                    "meanings": [{ "definitions": [{ "definition": "Odd.", "synonyms": null }] }]
                }
            ])))
            .mount(&server)
            .await;

        let def = provider_for(&server).await.define("quirk").await.unwrap().unwrap();

        assert_eq!(def.word, "quirk");
        assert_eq!(def.phonetic, None);
        assert_eq!(def.meanings[0].part_of_speech, "unknown");
        let first = &def.meanings[0].definitions[0];
        assert_eq!(first.example, None);
        assert!(first.synonyms.is_empty());
        assert!(first.antonyms.is_empty());
    }

    #[tokio::test]
    async fn not_found_and_empty_lists_yield_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/entries/en/zzqxnotaword"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "title": "No Definitions Found"
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/entries/en/blank"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let provider = provider_for(&server).await;
        assert!(provider.define("zzqxnotaword").await.unwrap().is_none());
        assert!(provider.define("blank").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn error_statuses_are_not_transport_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/entries/en/busy"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/entries/en/broken"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let provider = provider_for(&server).await;

        let err = provider.define("busy").await.unwrap_err();
        assert!(matches!(err, ProviderError::RateLimitExceeded));

        let err = provider.define("broken").await.unwrap_err();
        assert!(matches!(err, ProviderError::ApiError(_)));
        assert!(!err.is_transport());
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = provider_for(&server).await.define("word").await.unwrap_err();
        assert!(matches!(err, ProviderError::Decode(_)));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let provider = FreeDictionaryProvider::new(&format!("http://{}/entries", addr)).unwrap();
        let err = provider.define("word").await.unwrap_err();

        assert!(matches!(err, ProviderError::NetworkError(_)));
        assert!(err.is_transport());
    }
}
