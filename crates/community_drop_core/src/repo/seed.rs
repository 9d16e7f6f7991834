//! Seed rows for the mock pickup network.
//!
//! These tables back the default repositories. Tests that need other rows
//! build repositories from their own fixtures instead of touching these.

use crate::model::hub::{GeoPoint, Hub, HubKind};
use crate::model::partner::{HubStats, PackageSize, PartnerPackage, PartnerPackageStatus};
use crate::model::tracking::{PackageStatus, StatusEvent, TrackingRecord};

/// Tracking number of the only seeded tracking record.
pub const SEED_TRACKING_NUMBER: &str = "CD123456789";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

/// Hub table in display order.
pub fn seed_hubs() -> Vec<Hub> {
    vec![
        Hub {
            id: "1".to_string(),
            name: "Downtown Mini Mart".to_string(),
            kind: HubKind::Shop,
            address: "123 Main St, Downtown".to_string(),
            position: GeoPoint {
                lat: 40.7128,
                lng: -74.0060,
            },
            rating: 4.8,
            operating_hours: "7:00 AM - 11:00 PM".to_string(),
            capacity: 50,
            amenities: strings(&["24/7 Access", "Climate Controlled", "CCTV"]),
            distance_miles: Some(0.3),
        },
        Hub {
            id: "2".to_string(),
            name: "Community Warehouse".to_string(),
            kind: HubKind::Warehouse,
            address: "456 Industrial Ave".to_string(),
            position: GeoPoint {
                lat: 40.7589,
                lng: -73.9851,
            },
            rating: 4.9,
            operating_hours: "6:00 AM - 10:00 PM".to_string(),
            capacity: 200,
            amenities: strings(&["Large Packages", "Loading Dock", "Secure Storage"]),
            distance_miles: Some(1.2),
        },
        Hub {
            id: "3".to_string(),
            name: "Sarah's Home Hub".to_string(),
            kind: HubKind::Home,
            address: "789 Residential Blvd".to_string(),
            position: GeoPoint {
                lat: 40.7505,
                lng: -73.9934,
            },
            rating: 4.6,
            operating_hours: "9:00 AM - 6:00 PM".to_string(),
            capacity: 15,
            amenities: strings(&["Personal Service", "Flexible Hours"]),
            distance_miles: Some(0.8),
        },
    ]
}

/// Tracking records keyed by tracking number.
pub fn seed_tracking_records() -> Vec<TrackingRecord> {
    vec![TrackingRecord {
        tracking_number: SEED_TRACKING_NUMBER.to_string(),
        recipient: "John Doe".to_string(),
        hub_name: "Downtown Mini Mart".to_string(),
        hub_address: "123 Main St, Downtown".to_string(),
        estimated_pickup: "2024-01-20T14:00:00Z".to_string(),
        qr_code: "CD123456789-QR".to_string(),
        status_history: vec![
            StatusEvent {
                id: "1".to_string(),
                status: PackageStatus::ReadyPickup,
                location: "Downtown Mini Mart".to_string(),
                timestamp: "2024-01-20T10:30:00Z".to_string(),
                description: "Package ready for pickup at hub".to_string(),
            },
            StatusEvent {
                id: "2".to_string(),
                status: PackageStatus::AtHub,
                location: "Downtown Mini Mart".to_string(),
                timestamp: "2024-01-20T09:15:00Z".to_string(),
                description: "Package delivered to hub".to_string(),
            },
            StatusEvent {
                id: "3".to_string(),
                status: PackageStatus::InTransit,
                location: "Sorting Center".to_string(),
                timestamp: "2024-01-19T16:45:00Z".to_string(),
                description: "Package in transit to hub".to_string(),
            },
        ],
    }]
}

/// Packages currently held by the demo partner hub.
pub fn seed_partner_packages() -> Vec<PartnerPackage> {
    vec![
        PartnerPackage {
            id: "1".to_string(),
            tracking_number: "CD123456789".to_string(),
            recipient: "John Doe".to_string(),
            arrival_time: "2024-01-20T10:30:00Z".to_string(),
            pickup_code: "ABC123".to_string(),
            status: PartnerPackageStatus::Ready,
            size: PackageSize::Medium,
        },
        PartnerPackage {
            id: "2".to_string(),
            tracking_number: "CD987654321".to_string(),
            recipient: "Jane Smith".to_string(),
            arrival_time: "2024-01-20T14:15:00Z".to_string(),
            pickup_code: "XYZ789".to_string(),
            status: PartnerPackageStatus::Pending,
            size: PackageSize::Small,
        },
        PartnerPackage {
            id: "3".to_string(),
            tracking_number: "CD456789123".to_string(),
            recipient: "Bob Johnson".to_string(),
            arrival_time: "2024-01-19T16:45:00Z".to_string(),
            pickup_code: "DEF456".to_string(),
            status: PartnerPackageStatus::PickedUp,
            size: PackageSize::Large,
        },
    ]
}

/// Dashboard header numbers for the demo partner hub.
pub fn seed_hub_stats() -> HubStats {
    HubStats {
        total_packages: 247,
        pending_pickups: 12,
        monthly_earnings_cents: 48_550,
        average_rating: 4.8,
    }
}
