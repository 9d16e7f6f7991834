//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository lookups into view-level APIs.
//! - Keep UI/FFI layers decoupled from the data tables.

pub mod hub_service;
pub mod partner_service;
pub mod registration_service;
pub mod support_service;
pub mod tracking_service;
