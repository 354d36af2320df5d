use serde::{Deserialize, Serialize};

use crate::types::{Definition, Meaning, WordDefinition};

/// Result of resolving one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupOutcome {
    Found(WordDefinition),
    /// Every provider answered and none had the word
    NotFound,
    /// The lookup could not be completed
    Degraded(Degraded),
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupOutcome::NotFound)
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, LookupOutcome::Degraded(_))
    }

    /// Flatten into a single definition, degraded results included.
    /// `None` only for `NotFound`.
    pub fn into_definition(self) -> Option<WordDefinition> {
        match self {
            LookupOutcome::Found(def) => Some(def),
            LookupOutcome::NotFound => None,
            LookupOutcome::Degraded(degraded) => Some(degraded.to_definition()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegradedKind {
    /// A provider could not be reached during a single attempt
    Connectivity,
    /// Every retry attempt failed
    Exhausted,
}

impl DegradedKind {
    /// Part of speech used by the flattened definition
    pub fn as_str(&self) -> &'static str {
        match self {
            DegradedKind::Connectivity => "note",
            DegradedKind::Exhausted => "error",
        }
    }
}

/// A human-readable explanation standing in for a dictionary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degraded {
    pub kind: DegradedKind,
    /// Normalized query
    pub query: String,
    pub reason: String,
    pub hint: String,
}

impl Degraded {
    pub fn connectivity(query: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            kind: DegradedKind::Connectivity,
            reason: "I'm having trouble connecting to the dictionary service right now. \
                     Please check your internet connection and try again."
                .to_string(),
            hint: format!("You searched for: \"{query}\""),
            query,
        }
    }

    /// `original` is the query as the user typed it
    pub fn exhausted(query: impl Into<String>, original: &str) -> Self {
        Self {
            kind: DegradedKind::Exhausted,
            query: query.into(),
            reason: format!(
                "Sorry, I couldn't find \"{original}\" in any of my dictionary sources. \
                 This might be due to connectivity issues or the word might not be in my database."
            ),
            hint: "Try checking the spelling or searching for a different word.".to_string(),
        }
    }

    /// Synthetic entry carrying the explanation in its first definition
    pub fn to_definition(&self) -> WordDefinition {
        WordDefinition::new(self.query.clone()).with_meaning(Meaning::new(
            Some(self.kind.as_str().to_string()),
            vec![Definition::new(self.reason.clone()).with_example(Some(self.hint.clone()))],
        ))
    }
}
