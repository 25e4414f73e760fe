//! Question value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question submitted to the copilot (Value Object)
///
/// Always holds trimmed, non-empty text. Blank submissions never become a
/// `Question`, which is how the pipeline rejects them without touching state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a new question, returning None if blank
    pub fn try_new(content: impl AsRef<str>) -> Option<Self> {
        let trimmed = content.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Question {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Question::try_new(&s)
            .ok_or_else(|| DomainError::InvalidQuestion("question is blank".to_string()))
    }
}

impl From<Question> for String {
    fn from(q: Question) -> Self {
        q.content
    }
}
