//! Pickup hub model.
//!
//! # Invariants
//! - `id` is unique inside one hub table.
//! - `kind` is one of the three fixed hub categories.

use serde::{Deserialize, Serialize};

/// Physical category of a pickup hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HubKind {
    Warehouse,
    Shop,
    Home,
}

impl HubKind {
    /// Stable string id used in filters and wire payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warehouse => "warehouse",
            Self::Shop => "shop",
            Self::Home => "home",
        }
    }

    /// User-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Warehouse => "Warehouse",
            Self::Shop => "Local Shop",
            Self::Home => "Home Hub",
        }
    }

    /// Parses a stable string id. Matching is exact.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "warehouse" => Some(Self::Warehouse),
            "shop" => Some(Self::Shop),
            "home" => Some(Self::Home),
            _ => None,
        }
    }
}

/// WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// One pickup/drop-off location in the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hub {
    pub id: String,
    pub name: String,
    /// Serialized as `type` to match the UI schema.
    #[serde(rename = "type")]
    pub kind: HubKind,
    pub address: String,
    pub position: GeoPoint,
    pub rating: f32,
    pub operating_hours: String,
    /// Maximum number of stored packages.
    pub capacity: u32,
    pub amenities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f32>,
}

/// Map marker projection of a hub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub id: String,
    pub position: GeoPoint,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: HubKind,
}

impl From<&Hub> for MapMarker {
    fn from(hub: &Hub) -> Self {
        Self {
            id: hub.id.clone(),
            position: hub.position,
            title: hub.name.clone(),
            description: hub.address.clone(),
            kind: hub.kind,
        }
    }
}

/// Type filter for hub listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HubKindFilter {
    #[default]
    All,
    Only(HubKind),
}

impl HubKindFilter {
    /// Parses `all` or a hub kind id.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            other => HubKind::parse(other).map(Self::Only),
        }
    }

    pub fn accepts(self, kind: HubKind) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == kind,
        }
    }
}

/// Listing filter: optional search term AND type filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HubFilter {
    /// Case-insensitive substring of name or address. Empty means no term.
    pub search: Option<String>,
    pub kind: HubKindFilter,
}

impl HubFilter {
    pub fn new(search: Option<String>, kind: HubKindFilter) -> Self {
        Self { search, kind }
    }

    /// Returns whether `hub` passes both filter conditions.
    pub fn matches(&self, hub: &Hub) -> bool {
        self.matches_search(hub) && self.kind.accepts(hub.kind)
    }

    fn matches_search(&self, hub: &Hub) -> bool {
        let Some(term) = self.search.as_deref().filter(|term| !term.is_empty()) else {
            return true;
        };
        let needle = term.to_lowercase();
        hub.name.to_lowercase().contains(&needle) || hub.address.to_lowercase().contains(&needle)
    }
}
