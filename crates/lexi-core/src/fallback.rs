use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use lexi_provider::{DictionaryProvider, ProviderError, ProviderMetadata};
use lexi_types::{Definition, Meaning, WordDefinition};

use crate::error::LoadError;
use crate::preprocess::normalize_query;

pub const DEFAULT_FALLBACK_DELAY: Duration = Duration::from_millis(300);

/// Read-only table of common words answered without any network call.
///
/// Hits are delayed so they feel like a remote answer. The table is built
/// once and never written to afterwards.
#[derive(Debug, Clone)]
pub struct FallbackTable {
    entries: HashMap<String, WordDefinition>,
    delay: Duration,
}

impl FallbackTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            delay: DEFAULT_FALLBACK_DELAY,
        }
    }

    /// Table with the built-in common words
    pub fn seeded() -> Self {
        Self::from_entries(seed_entries())
    }

    pub fn from_entries(entries: impl IntoIterator<Item = WordDefinition>) -> Self {
        let entries = entries
            .into_iter()
            .map(|mut def| {
                def.word = normalize_query(&def.word);
                (def.word.clone(), def.truncated())
            })
            .collect();

        Self {
            entries,
            delay: DEFAULT_FALLBACK_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Load a JSON array of definitions
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let entries: Vec<WordDefinition> = serde_json::from_str(json)?;

        if let Some(pos) = entries.iter().position(|e| normalize_query(&e.word).is_empty()) {
            return Err(LoadError::InvalidFormat(format!(
                "entry {} has an empty word",
                pos
            )));
        }

        Ok(Self::from_entries(entries))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading fallback words from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let table = Self::from_json(&json)?;
        tracing::info!("Loaded {} fallback words from file", table.len());
        Ok(table)
    }

    /// Merge another table into this one, its entries win on conflicts
    pub fn merge(mut self, other: FallbackTable) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// Exact lookup by normalized word
    pub fn get(&self, word: &str) -> Option<&WordDefinition> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FallbackTable {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DictionaryProvider for FallbackTable {
    async fn define(&self, word: &str) -> Result<Option<WordDefinition>, ProviderError> {
        let Some(entry) = self.get(word) else {
            return Ok(None);
        };

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(Some(entry.clone()))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Fallback table".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

fn seed_entries() -> Vec<WordDefinition> {
    vec![
        WordDefinition::new("hello")
            .with_phonetic(Some("/həˈloʊ/".to_string()))
            .with_meaning(Meaning::new(
                Some("exclamation".to_string()),
                vec![
                    Definition::new(
                        "A friendly greeting used when meeting someone or starting a conversation.",
                    )
                    .with_example(Some("Hello there! How's your day going?".to_string()))
                    .with_synonyms(["hi", "hey", "greetings", "howdy"]),
                ],
            )),
        WordDefinition::new("beautiful")
            .with_phonetic(Some("/ˈbjuːtɪfəl/".to_string()))
            .with_meaning(Meaning::new(
                Some("adjective".to_string()),
                vec![
                    Definition::new(
                        "Having qualities that give great pleasure or satisfaction to see, hear, or think about.",
                    )
                    .with_example(Some(
                        "The sunset painted a beautiful picture across the sky.".to_string(),
                    ))
                    .with_synonyms(["gorgeous", "stunning", "lovely", "attractive", "magnificent"]),
                ],
            )),
        WordDefinition::new("serendipity")
            .with_phonetic(Some("/ˌsɛrənˈdɪpɪti/".to_string()))
            .with_meaning(Meaning::new(
                Some("noun".to_string()),
                vec![
                    Definition::new(
                        "The pleasant surprise of finding something good or useful while not specifically searching for it.",
                    )
                    .with_example(Some(
                        "Meeting my future business partner at that coffee shop was pure serendipity."
                            .to_string(),
                    ))
                    .with_synonyms(["chance", "luck", "fortune", "coincidence"]),
                ],
            )),
    ]
}
