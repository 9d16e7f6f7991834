//! Conversation message model.
//!
//! # Responsibility
//! - Define the message record exchanged between user and assistant.
//! - Define the reply shape produced by the responder.
//!
//! # Invariants
//! - `id` is unique per message and never reused.
//! - User messages never carry suggestions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one conversation message.
pub type MessageId = Uuid;

/// Author of one conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    /// Stable string id used by logs and FFI envelopes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One entry in the conversation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    pub sender: Sender,
    /// Unix epoch milliseconds at append time.
    pub timestamp_ms: i64,
    /// Suggestion chips offered with an assistant reply, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl Message {
    /// Creates a user message with a generated ID.
    pub fn user(content: impl Into<String>, timestamp_ms: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            sender: Sender::User,
            timestamp_ms,
            suggestions: None,
        }
    }

    /// Creates an assistant message with a generated ID.
    ///
    /// An empty suggestion list is stored as `None`.
    pub fn assistant(
        content: impl Into<String>,
        suggestions: Vec<String>,
        timestamp_ms: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            sender: Sender::Assistant,
            timestamp_ms,
            suggestions: if suggestions.is_empty() {
                None
            } else {
                Some(suggestions)
            },
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Canned reply selected by the responder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub content: String,
    pub suggestions: Vec<String>,
}
