//! Append-only conversation log with one pending assistant reply.
//!
//! # Responsibility
//! - Record user and assistant messages in insertion order.
//! - Model the typing delay as a pending reply that the presentation layer
//!   resolves after its own timer fires.
//!
//! # Invariants
//! - Messages are never mutated, reordered or removed.
//! - Timestamps never decrease along the log.
//! - A pending reply is flushed before any later user message is appended,
//!   so each reply directly follows the user message it answers.

use crate::assistant::responder::Responder;
use crate::assistant::rules::GREETING;
use crate::input::{require_non_blank, InputError};
use crate::model::message::{Message, MessageId};
use log::{debug, info};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of epoch-millisecond timestamps.
pub type Clock = fn() -> i64;

/// Wall-clock time in Unix epoch milliseconds.
pub fn system_now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

#[derive(Debug, Clone)]
struct PendingReply {
    user_message_id: MessageId,
    text: String,
}

/// Chat session state owned by one conversation view.
#[derive(Debug, Clone)]
pub struct Conversation {
    responder: Responder,
    messages: Vec<Message>,
    pending: Option<PendingReply>,
    clock: Clock,
}

impl Conversation {
    /// Starts a conversation opened by the assistant greeting.
    pub fn new(responder: Responder) -> Self {
        let mut conversation = Self::empty(responder);
        conversation.append_assistant(GREETING.content, GREETING.to_reply().suggestions);
        conversation
    }

    /// Starts a conversation with no messages.
    pub fn empty(responder: Responder) -> Self {
        Self::with_clock(responder, system_now_ms)
    }

    /// Starts an empty conversation stamped by `clock`.
    pub fn with_clock(responder: Responder, clock: Clock) -> Self {
        Self {
            responder,
            messages: Vec::new(),
            pending: None,
            clock,
        }
    }

    /// Read-only view of the log in insertion order.
    pub fn history(&self) -> &[Message] {
        &self.messages
    }

    /// Whether an assistant reply is waiting to be resolved.
    pub fn is_typing(&self) -> bool {
        self.pending.is_some()
    }

    /// ID of the user message awaiting its reply.
    pub fn pending_for(&self) -> Option<MessageId> {
        self.pending.as_ref().map(|pending| pending.user_message_id)
    }

    /// Appends a user message.
    ///
    /// Any pending reply is resolved first.
    pub fn append_user(&mut self, text: impl Into<String>) -> Message {
        self.resolve_pending();
        let message = Message::user(text, self.next_timestamp());
        self.messages.push(message.clone());
        message
    }

    /// Appends an assistant message.
    pub fn append_assistant(
        &mut self,
        content: impl Into<String>,
        suggestions: Vec<String>,
    ) -> Message {
        let message = Message::assistant(content, suggestions, self.next_timestamp());
        self.messages.push(message.clone());
        message
    }

    /// Accepts user text and schedules the assistant reply.
    ///
    /// # Errors
    /// - `InputError::Blank` when `text` is empty or whitespace-only; the log
    ///   is left untouched.
    pub fn submit(&mut self, text: &str) -> Result<Message, InputError> {
        let text = require_non_blank(text)?;
        let message = self.append_user(text);
        self.pending = Some(PendingReply {
            user_message_id: message.id,
            text: text.to_string(),
        });
        debug!(
            "event=chat_submit module=assistant status=ok history_len={}",
            self.messages.len()
        );
        Ok(message)
    }

    /// Same as [`Conversation::submit`] with a suggestion chip as text.
    pub fn choose_suggestion(&mut self, chip: &str) -> Result<Message, InputError> {
        self.submit(chip)
    }

    /// Computes and appends the pending reply, if any.
    pub fn resolve_pending(&mut self) -> Option<Message> {
        let pending = self.pending.take()?;
        Some(self.answer(&pending.text))
    }

    /// Submits `text` and resolves its reply immediately.
    pub fn exchange(&mut self, text: &str) -> Result<(Message, Message), InputError> {
        let text = require_non_blank(text)?;
        let user = self.append_user(text);
        let reply = self.answer(text);
        Ok((user, reply))
    }

    /// Drops the pending reply when the view closes.
    ///
    /// Returns whether a reply was discarded.
    pub fn close(&mut self) -> bool {
        let discarded = self.pending.take().is_some();
        info!(
            "event=chat_close module=assistant status=ok discarded_pending={} history_len={}",
            discarded,
            self.messages.len()
        );
        discarded
    }

    fn answer(&mut self, text: &str) -> Message {
        let reply = self.responder.respond(text);
        self.append_assistant(reply.content, reply.suggestions)
    }

    fn next_timestamp(&self) -> i64 {
        let now = (self.clock)();
        match self.messages.last() {
            Some(last) if last.timestamp_ms > now => last.timestamp_ms,
            _ => now,
        }
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(Responder::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::Conversation;
    use crate::assistant::responder::Responder;
    use crate::input::InputError;
    use std::sync::atomic::{AtomicI64, Ordering};

    static TICKS: AtomicI64 = AtomicI64::new(10_000);

    fn backwards_clock() -> i64 {
        TICKS.fetch_sub(1_000, Ordering::SeqCst)
    }

    #[test]
    fn timestamps_never_decrease_with_backwards_clock() {
        let mut conversation = Conversation::with_clock(Responder::builtin(), backwards_clock);
        conversation.exchange("hello").expect("exchange");
        conversation.exchange("track").expect("exchange");

        let stamps: Vec<i64> = conversation
            .history()
            .iter()
            .map(|message| message.timestamp_ms)
            .collect();
        assert!(stamps.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn blank_submit_leaves_log_untouched() {
        let mut conversation = Conversation::default();
        let before = conversation.history().len();
        assert_eq!(conversation.submit("   "), Err(InputError::Blank));
        assert_eq!(conversation.history().len(), before);
        assert!(!conversation.is_typing());
    }

    #[test]
    fn pending_tracks_latest_user_message() {
        let mut conversation = Conversation::empty(Responder::builtin());
        let user = conversation.submit("price?").expect("submit");
        assert_eq!(conversation.pending_for(), Some(user.id));
        conversation.resolve_pending();
        assert_eq!(conversation.pending_for(), None);
        assert!(conversation.resolve_pending().is_none());
    }
}
