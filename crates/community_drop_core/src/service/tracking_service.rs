//! Tracking use-case service.
//!
//! # Invariants
//! - Lookup keys are matched exactly; input is not trimmed or case-folded.
//! - A miss is reported as `NotFound` echoing the literal input.

use crate::input::{require_non_blank, InputError};
use crate::model::tracking::{TrackingLookup, TrackingRecord};
use crate::repo::tracking_repo::TrackingRepository;
use crate::scan::interpreter::is_tracking_number;
use log::info;

/// Tracking facade over an injected record table.
pub struct TrackingService<R: TrackingRepository> {
    repo: R,
}

impl<R: TrackingRepository> TrackingService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Exact-key record lookup.
    pub fn find_tracking_record(&self, tracking_number: &str) -> Option<TrackingRecord> {
        self.repo.get_record(tracking_number).cloned()
    }

    /// Tracking-view lookup with blank-input rejection.
    pub fn lookup(&self, tracking_number: &str) -> Result<TrackingLookup, InputError> {
        let tracking_number = require_non_blank(tracking_number)?;
        let lookup = match self.find_tracking_record(tracking_number) {
            Some(record) => TrackingLookup::Found { record },
            None => TrackingLookup::NotFound {
                echoed: tracking_number.to_string(),
            },
        };
        info!(
            "event=tracking_lookup module=tracking status={} well_formed={}",
            if lookup.is_found() { "ok" } else { "miss" },
            is_tracking_number(tracking_number)
        );
        Ok(lookup)
    }
}
