//! Append-only conversation transcript.

use super::entities::{ChatMessage, Role};
use serde::Serialize;

/// Ordered sequence of chat messages (Aggregate)
///
/// Insertion order is chronological order is display order. There is no
/// way to remove or edit a message.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// The most recent assistant reply, if any.
    pub fn last_assistant(&self) -> Option<&ChatMessage> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role() == Role::Assistant)
    }

    /// True when every user message is immediately followed by exactly one
    /// assistant message. A trailing user message (turn in flight) is allowed.
    pub fn is_well_formed(&self) -> bool {
        let mut expect_user = true;
        for message in &self.messages {
            match (expect_user, message.role()) {
                (true, Role::User) => expect_user = false,
                (false, Role::Assistant) => expect_user = true,
                _ => return false,
            }
        }
        true
    }
}
