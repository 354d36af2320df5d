use lexi_types::{LookupOutcome, Message};

use crate::resolver::Lookup;
use crate::retry::RetrySupervisor;

/// Ordered list of user turns and replies
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `content` as a user turn, look it up, and record the reply
    pub async fn send<L: Lookup>(&mut self, supervisor: &RetrySupervisor<L>, content: &str) -> Message {
        self.messages.push(Message::user(content));

        let outcome = supervisor.resolve_with_retry(content).await;
        let reply = Message::reply(reply_text(content, &outcome), content, outcome);
        self.messages.push(reply.clone());

        reply
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Dismiss every turn
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

/// Bot text accompanying a lookup outcome
pub fn reply_text(query: &str, outcome: &LookupOutcome) -> String {
    match outcome {
        LookupOutcome::Found(def) => format!("Here's what I found for \"{}\":", def.word),
        LookupOutcome::Degraded(degraded) => {
            format!("Here's what I found for \"{}\":", degraded.query)
        }
        LookupOutcome::NotFound => format!(
            "Hmm, I couldn't find \"{query}\" in any of my dictionary sources. \
             Try checking the spelling or searching for a different word."
        ),
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use lexi_types::{Degraded, WordDefinition};

    use super::*;
    use crate::error::LookupError;

    struct Canned;

    #[async_trait]
    impl Lookup for Canned {
        async fn lookup(&self, query: &str) -> Result<LookupOutcome, LookupError> {
            Ok(match query.trim() {
                "Hello" => LookupOutcome::Found(WordDefinition::new("hello")),
                "offline" => LookupOutcome::Degraded(Degraded::connectivity("offline")),
                _ => LookupOutcome::NotFound,
            })
        }
    }

    #[tokio::test]
    async fn records_user_turn_and_reply() {
        let supervisor = RetrySupervisor::new(Canned);
        let mut conversation = Conversation::new();
        assert!(conversation.is_empty());

        let reply = conversation.send(&supervisor, "Hello").await;
        assert!(!reply.is_user);
        assert_eq!(reply.content, "Here's what I found for \"hello\":");
        assert_eq!(reply.word.as_deref(), Some("Hello"));
        assert!(reply.outcome.as_ref().unwrap().is_found());

        let messages = conversation.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].is_user);
        assert_eq!(messages[0].content, "Hello");
        assert_ne!(messages[0].id, messages[1].id);
        assert_eq!(conversation.last().map(|m| m.id), Some(reply.id));
    }

    #[tokio::test]
    async fn not_found_reply_echoes_the_query() {
        let supervisor = RetrySupervisor::new(Canned);
        let mut conversation = Conversation::new();

        let reply = conversation.send(&supervisor, "zzqxnotaword").await;

        assert!(reply.content.starts_with("Hmm, I couldn't find \"zzqxnotaword\""));
        assert_eq!(reply.outcome, Some(LookupOutcome::NotFound));
    }

    #[tokio::test]
    async fn degraded_replies_still_present_the_explanation() {
        let supervisor = RetrySupervisor::new(Canned);
        let mut conversation = Conversation::new();

        let reply = conversation.send(&supervisor, "offline").await;

        assert_eq!(reply.content, "Here's what I found for \"offline\":");
        assert!(reply.outcome.as_ref().unwrap().is_degraded());
    }

    #[tokio::test]
    async fn clear_dismisses_every_turn() {
        let supervisor = RetrySupervisor::new(Canned);
        let mut conversation = Conversation::new();
        conversation.send(&supervisor, "Hello").await;
        conversation.send(&supervisor, "again").await;
        assert_eq!(conversation.messages().len(), 4);

        conversation.clear();
        assert!(conversation.is_empty());
        assert!(conversation.last().is_none());
    }
}
