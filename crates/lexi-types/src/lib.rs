pub mod message;
pub mod outcome;
pub mod types;

pub use message::Message;
pub use outcome::{Degraded, DegradedKind, LookupOutcome};
pub use types::{
    Definition, MAX_ANTONYMS, MAX_DEFINITIONS, MAX_MEANINGS, MAX_SYNONYMS, Meaning,
    UNKNOWN_PART_OF_SPEECH, WordDefinition,
};
