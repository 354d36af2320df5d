use serde::{Deserialize, Serialize};

/// Maximum meanings kept per word.
pub const MAX_MEANINGS: usize = 3;
/// Maximum definitions kept per meaning.
pub const MAX_DEFINITIONS: usize = 3;
pub const MAX_SYNONYMS: usize = 5;
pub const MAX_ANTONYMS: usize = 3;

/// Part of speech used when a provider leaves it out
pub const UNKNOWN_PART_OF_SPEECH: &str = "unknown";

/// A dictionary entry for a single word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDefinition {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    #[serde(default = "unknown_part_of_speech")]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

impl WordDefinition {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            phonetic: None,
            meanings: Vec::new(),
            origin: None,
        }
    }

    /// Set the phonetic, ignoring blank values
    pub fn with_phonetic(mut self, phonetic: Option<String>) -> Self {
        self.phonetic = non_blank(phonetic);
        self
    }

    /// Set the origin, ignoring blank values
    pub fn with_origin(mut self, origin: Option<String>) -> Self {
        self.origin = non_blank(origin);
        self
    }

    pub fn with_meaning(mut self, meaning: Meaning) -> Self {
        self.meanings.push(meaning);
        self
    }

    /// Apply the readability caps to every nested list
    pub fn truncated(mut self) -> Self {
        self.meanings.truncate(MAX_MEANINGS);
        self.meanings = self.meanings.into_iter().map(Meaning::truncated).collect();
        self
    }

    /// Part of speech of the first meaning, if any
    pub fn primary_part_of_speech(&self) -> Option<&str> {
        self.meanings.first().map(|m| m.part_of_speech.as_str())
    }

    /// Text of the first definition of the first meaning, if any
    pub fn first_definition(&self) -> Option<&str> {
        self.meanings
            .first()
            .and_then(|m| m.definitions.first())
            .map(|d| d.definition.as_str())
    }
}

impl Meaning {
    /// Missing or blank parts of speech become "unknown"
    pub fn new(part_of_speech: Option<String>, definitions: Vec<Definition>) -> Self {
        Self {
            part_of_speech: non_blank(part_of_speech)
                .unwrap_or_else(|| UNKNOWN_PART_OF_SPEECH.to_string()),
            definitions,
        }
    }

    pub fn truncated(mut self) -> Self {
        self.definitions.truncate(MAX_DEFINITIONS);
        self.definitions = self
            .definitions
            .into_iter()
            .map(Definition::truncated)
            .collect();
        self
    }
}

impl Definition {
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            example: None,
            synonyms: Vec::new(),
            antonyms: Vec::new(),
        }
    }

    pub fn with_example(mut self, example: Option<String>) -> Self {
        self.example = non_blank(example);
        self
    }

    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = capped_set(synonyms, MAX_SYNONYMS);
        self
    }

    pub fn with_antonyms<I, S>(mut self, antonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.antonyms = capped_set(antonyms, MAX_ANTONYMS);
        self
    }

    pub fn truncated(mut self) -> Self {
        self.synonyms = capped_set(self.synonyms, MAX_SYNONYMS);
        self.antonyms = capped_set(self.antonyms, MAX_ANTONYMS);
        self
    }
}

/// First `cap` distinct, non-blank entries in their original order
fn capped_set<I, S>(items: I, cap: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::with_capacity(cap);
    for item in items {
        if out.len() == cap {
            break;
        }
        let item = item.into();
        if item.trim().is_empty() || out.contains(&item) {
            continue;
        }
        out.push(item);
    }
    out
}

fn unknown_part_of_speech() -> String {
    UNKNOWN_PART_OF_SPEECH.to_string()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meaning_with(n: usize) -> Meaning {
        Meaning::new(
            Some("noun".to_string()),
            (0..n).map(|i| Definition::new(format!("sense {i}"))).collect(),
        )
    }

    #[test]
    fn truncated_applies_meaning_and_definition_caps() {
        let def = (0..5)
            .fold(WordDefinition::new("set"), |def, _| def.with_meaning(meaning_with(6)))
            .truncated();

        assert_eq!(def.meanings.len(), MAX_MEANINGS);
        assert!(def.meanings.iter().all(|m| m.definitions.len() == MAX_DEFINITIONS));
    }

    #[test]
    fn synonyms_are_deduplicated_before_capping() {
        let def = Definition::new("x")
            .with_synonyms(["a", "a", "b", "", "c", "d", "e", "f"])
            .with_antonyms(["p", "q", "q", "r", "s"]);

        assert_eq!(def.synonyms, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(def.antonyms, vec!["p", "q", "r"]);
    }

    #[test]
    fn blank_part_of_speech_defaults_to_unknown() {
        assert_eq!(Meaning::new(None, vec![]).part_of_speech, "unknown");
        assert_eq!(Meaning::new(Some("  ".into()), vec![]).part_of_speech, "unknown");
    }

    #[test]
    fn missing_part_of_speech_deserializes_as_unknown() {
        let meaning: Meaning = serde_json::from_str(r#"{ "definitions": [] }"#).unwrap();
        assert_eq!(meaning.part_of_speech, "unknown");
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let def = WordDefinition::new("cat")
            .with_phonetic(Some(String::new()))
            .with_meaning(Meaning::new(
                Some("noun".into()),
                vec![Definition::new("A small feline.")],
            ));

        let json = serde_json::to_value(&def).unwrap();
        assert!(json.get("phonetic").is_none());
        assert!(json.get("origin").is_none());
        let first = &json["meanings"][0];
        assert_eq!(first["partOfSpeech"], "noun");
        assert!(first["definitions"][0].get("example").is_none());
        assert_eq!(first["definitions"][0]["synonyms"], serde_json::json!([]));
    }
}
