//! Domain model for the pickup network and the assistant conversation.
//!
//! # Responsibility
//! - Define the canonical records shared by chat, scan, tracking, hub and
//!   partner use-cases.
//! - Keep wire naming stable for the UI shell (`serde` renames live here).
//!
//! # Invariants
//! - Records are plain data; lookups and mutations live in `repo`/`service`.
//! - Messages are immutable once created.

pub mod hub;
pub mod message;
pub mod partner;
pub mod registration;
pub mod tracking;
