//! Hub partner registration form and validation.
//!
//! # Responsibility
//! - Define the registration form submitted by a prospective hub partner.
//! - Enforce field-level rules before a submission is accepted.
//!
//! # Invariants
//! - Length rules count characters of trimmed input.
//! - Validation reports the first failing field in form order.

use crate::model::hub::HubKind;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Amenity id for climate controlled storage.
pub const AMENITY_CLIMATE_CONTROLLED: &str = "climate-controlled";
/// Amenity id for security cameras.
pub const AMENITY_SECURITY_CAMERAS: &str = "security-cameras";
/// Amenity id for large package storage.
pub const AMENITY_LARGE_PACKAGES: &str = "large-packages";
/// Amenity id for refrigerated storage.
pub const AMENITY_REFRIGERATED: &str = "refrigerated";
/// Amenity id for after hours access.
pub const AMENITY_AFTER_HOURS: &str = "after-hours";
/// Amenity id for a loading dock.
pub const AMENITY_LOADING_DOCK: &str = "loading-dock";

const AMENITY_OPTIONS: &[(&str, &str)] = &[
    (AMENITY_CLIMATE_CONTROLLED, "Climate Controlled"),
    (AMENITY_SECURITY_CAMERAS, "Security Cameras"),
    (AMENITY_LARGE_PACKAGES, "Large Package Storage"),
    (AMENITY_REFRIGERATED, "Refrigerated Storage"),
    (AMENITY_AFTER_HOURS, "After Hours Access"),
    (AMENITY_LOADING_DOCK, "Loading Dock"),
];

/// Returns `(id, label)` pairs for every selectable amenity.
pub fn amenity_options() -> &'static [(&'static str, &'static str)] {
    AMENITY_OPTIONS
}

/// Hub registration form as submitted by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubRegistration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub hub_name: String,
    pub hub_type: HubKind,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    /// Raw numeric text from the capacity input.
    pub capacity: String,
    pub operating_hours: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub agreed_to_terms: bool,
}

impl HubRegistration {
    /// Returns an empty form with the UI defaults (`shop`, no amenities).
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            hub_name: String::new(),
            hub_type: HubKind::Shop,
            address: String::new(),
            city: String::new(),
            zip_code: String::new(),
            capacity: String::new(),
            operating_hours: String::new(),
            description: None,
            amenities: Vec::new(),
            agreed_to_terms: false,
        }
    }

    /// Validates every field rule and returns the parsed capacity.
    pub fn validate(&self) -> Result<u32, RegistrationValidationError> {
        require_min_chars(&self.name, 2, "name")?;
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(RegistrationValidationError::InvalidEmail(self.email.clone()));
        }
        require_min_chars(&self.phone, 10, "phone")?;
        require_min_chars(&self.hub_name, 2, "hub_name")?;
        require_min_chars(&self.address, 5, "address")?;
        require_min_chars(&self.city, 2, "city")?;
        require_min_chars(&self.zip_code, 5, "zip_code")?;

        let capacity_text = self.capacity.trim();
        if capacity_text.is_empty() {
            return Err(RegistrationValidationError::MissingCapacity);
        }
        let capacity = match capacity_text.parse::<u32>() {
            Ok(value) if value > 0 => value,
            _ => {
                return Err(RegistrationValidationError::InvalidCapacity(
                    self.capacity.clone(),
                ))
            }
        };

        require_min_chars(&self.operating_hours, 5, "operating_hours")?;

        let mut seen = BTreeSet::new();
        for amenity in &self.amenities {
            if !AMENITY_OPTIONS.iter().any(|(id, _)| id == amenity) {
                return Err(RegistrationValidationError::UnsupportedAmenity(
                    amenity.clone(),
                ));
            }
            if !seen.insert(amenity.as_str()) {
                return Err(RegistrationValidationError::DuplicateAmenity(
                    amenity.clone(),
                ));
            }
        }

        if !self.agreed_to_terms {
            return Err(RegistrationValidationError::TermsNotAccepted);
        }
        Ok(capacity)
    }
}

fn require_min_chars(
    value: &str,
    min: usize,
    field: &'static str,
) -> Result<(), RegistrationValidationError> {
    if value.trim().chars().count() < min {
        return Err(RegistrationValidationError::TooShort { field, min });
    }
    Ok(())
}

/// Registration form validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationValidationError {
    TooShort { field: &'static str, min: usize },
    InvalidEmail(String),
    MissingCapacity,
    InvalidCapacity(String),
    UnsupportedAmenity(String),
    DuplicateAmenity(String),
    TermsNotAccepted,
}

impl RegistrationValidationError {
    /// Form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::TooShort { field, .. } => *field,
            Self::InvalidEmail(_) => "email",
            Self::MissingCapacity | Self::InvalidCapacity(_) => "capacity",
            Self::UnsupportedAmenity(_) | Self::DuplicateAmenity(_) => "amenities",
            Self::TermsNotAccepted => "agreed_to_terms",
        }
    }
}

impl Display for RegistrationValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort { field, min } => {
                write!(f, "{field} must be at least {min} characters")
            }
            Self::InvalidEmail(value) => write!(f, "invalid email address: `{value}`"),
            Self::MissingCapacity => write!(f, "capacity is required"),
            Self::InvalidCapacity(value) => {
                write!(f, "capacity must be a positive whole number, got `{value}`")
            }
            Self::UnsupportedAmenity(value) => write!(f, "amenity is unsupported: {value}"),
            Self::DuplicateAmenity(value) => write!(f, "amenity is duplicated: {value}"),
            Self::TermsNotAccepted => write!(f, "you must agree to the terms"),
        }
    }
}

impl Error for RegistrationValidationError {}
