//! Rule-based chat assistant.
//!
//! # Responsibility
//! - Hold the ordered keyword rule table and the fallback help menu.
//! - Select canned replies for free-text input (first match wins).
//! - Own the append-only conversation log and its single pending reply.
//!
//! # Invariants
//! - Rule evaluation order is declaration order.
//! - Every input maps to a non-empty reply.
//! - At most one assistant reply is pending at a time.

pub mod conversation;
pub mod responder;
pub mod rules;
