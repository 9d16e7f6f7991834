//! Package tracking model.
//!
//! # Responsibility
//! - Define tracking records and their status history.
//! - Provide the view-level lookup outcome (found vs. not-found echo).
//!
//! # Invariants
//! - `tracking_number` is the unique lookup key.
//! - `status_history` is ordered newest first; index 0 is the current status.

use serde::{Deserialize, Serialize};

/// Delivery stage of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageStatus {
    InTransit,
    AtHub,
    ReadyPickup,
    Delivered,
}

impl PackageStatus {
    /// Stable wire id (`in-transit|at-hub|ready-pickup|delivered`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InTransit => "in-transit",
            Self::AtHub => "at-hub",
            Self::ReadyPickup => "ready-pickup",
            Self::Delivered => "delivered",
        }
    }

    /// Badge text shown by the tracking view, e.g. `READY PICKUP`.
    pub fn badge(self) -> String {
        self.as_str().replace('-', " ").to_uppercase()
    }
}

/// One event in a package's status history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEvent {
    pub id: String,
    pub status: PackageStatus,
    pub location: String,
    /// RFC 3339 UTC timestamp.
    pub timestamp: String,
    pub description: String,
}

/// Tracking record for one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingRecord {
    pub tracking_number: String,
    pub recipient: String,
    pub hub_name: String,
    pub hub_address: String,
    /// RFC 3339 UTC timestamp.
    pub estimated_pickup: String,
    pub qr_code: String,
    pub status_history: Vec<StatusEvent>,
}

impl TrackingRecord {
    /// Most recent status, if any event was recorded.
    pub fn current_status(&self) -> Option<PackageStatus> {
        self.status_history.first().map(|event| event.status)
    }
}

/// Outcome of a tracking lookup as rendered by the tracking view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TrackingLookup {
    Found { record: TrackingRecord },
    /// Lookup miss; `echoed` is the literal input shown back to the user.
    NotFound { echoed: String },
}

impl TrackingLookup {
    pub fn record(&self) -> Option<&TrackingRecord> {
        match self {
            Self::Found { record } => Some(record),
            Self::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}
