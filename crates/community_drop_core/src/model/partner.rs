//! Partner dashboard model.

use serde::{Deserialize, Serialize};

/// Handling state of a package stored at a partner hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartnerPackageStatus {
    /// Announced but not yet ready for the recipient.
    Pending,
    /// Waiting on the shelf for pickup.
    Ready,
    /// Handed over to the recipient.
    PickedUp,
}

impl PartnerPackageStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Ready => "ready",
            Self::PickedUp => "picked-up",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageSize {
    Small,
    Medium,
    Large,
}

/// Package row in the partner dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerPackage {
    pub id: String,
    pub tracking_number: String,
    pub recipient: String,
    /// RFC 3339 UTC timestamp.
    pub arrival_time: String,
    pub pickup_code: String,
    pub status: PartnerPackageStatus,
    pub size: PackageSize,
}

/// Aggregate numbers shown on the dashboard header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubStats {
    pub total_packages: u32,
    pub pending_pickups: u32,
    /// Earnings in cents to avoid float currency math.
    pub monthly_earnings_cents: u64,
    pub average_rating: f32,
}

impl HubStats {
    /// Formats monthly earnings as `$<dollars>.<cents>`.
    pub fn monthly_earnings_display(&self) -> String {
        format!(
            "${}.{:02}",
            self.monthly_earnings_cents / 100,
            self.monthly_earnings_cents % 100
        )
    }
}
