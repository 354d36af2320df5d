use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::outcome::LookupOutcome;

/// One turn in a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub content: String,
    pub is_user: bool,
    pub timestamp: SystemTime,
    /// Query the reply answers
    pub word: Option<String>,
    pub outcome: Option<LookupOutcome>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            is_user: true,
            timestamp: SystemTime::now(),
            word: None,
            outcome: None,
        }
    }

    pub fn reply(content: impl Into<String>, word: impl Into<String>, outcome: LookupOutcome) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            is_user: false,
            timestamp: SystemTime::now(),
            word: Some(word.into()),
            outcome: Some(outcome),
        }
    }
}
