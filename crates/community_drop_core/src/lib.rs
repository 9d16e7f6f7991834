//! Core domain logic for the Community Drop pickup network.
//! This crate is the single source of truth for business rules; UI shells
//! only render what it returns.

pub mod assistant;
pub mod config;
pub mod input;
pub mod logging;
pub mod model;
pub mod repo;
pub mod scan;
pub mod service;

pub use assistant::conversation::Conversation;
pub use assistant::responder::{Responder, Selection};
pub use assistant::rules::{builtin_rules, CannedReply, Rule, RulePredicate};
pub use config::{ConfigError, CoreConfig};
pub use input::InputError;
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::hub::{Hub, HubFilter, HubKind, HubKindFilter, MapMarker};
pub use model::message::{Message, MessageId, Reply, Sender};
pub use model::partner::{HubStats, PartnerPackage, PartnerPackageStatus};
pub use model::registration::{HubRegistration, RegistrationValidationError};
pub use model::tracking::{PackageStatus, StatusEvent, TrackingLookup, TrackingRecord};
pub use repo::hub_repo::{HubRepository, InMemoryHubRepository};
pub use repo::partner_repo::{InMemoryPartnerRepository, PartnerRepository};
pub use repo::tracking_repo::{InMemoryTrackingRepository, TrackingRepository};
pub use repo::{RepoError, RepoResult};
pub use scan::interpreter::{interpret, NavigationTarget, ScanInterpreter, ScanOutcome};
pub use service::hub_service::HubService;
pub use service::partner_service::{PartnerError, PartnerService};
pub use service::registration_service::{submit_registration, RegistrationReceipt};
pub use service::support_service::{faq_entries, FaqEntry};
pub use service::tracking_service::TrackingService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
