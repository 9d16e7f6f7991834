//! Tracking record contract and in-memory implementation.
//!
//! # Invariants
//! - Lookup is an exact, case-sensitive match on the tracking number.

use crate::model::tracking::TrackingRecord;
use crate::repo::seed::seed_tracking_records;
use crate::repo::{RepoError, RepoResult};
use std::collections::BTreeMap;

/// Keyed read access to tracking records.
pub trait TrackingRepository {
    fn get_record(&self, tracking_number: &str) -> Option<&TrackingRecord>;
}

/// Map-backed tracking table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTrackingRepository {
    records: BTreeMap<String, TrackingRecord>,
}

impl InMemoryTrackingRepository {
    /// Builds a table from fixture rows, rejecting duplicate tracking numbers.
    pub fn try_new(records: Vec<TrackingRecord>) -> RepoResult<Self> {
        let mut table = BTreeMap::new();
        for record in records {
            let key = record.tracking_number.clone();
            if table.insert(key.clone(), record).is_some() {
                return Err(RepoError::DuplicateKey {
                    table: "tracking_records",
                    key,
                });
            }
        }
        Ok(Self { records: table })
    }

    /// Table loaded with the seeded records.
    pub fn seeded() -> Self {
        let records = seed_tracking_records()
            .into_iter()
            .map(|record| (record.tracking_number.clone(), record))
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TrackingRepository for InMemoryTrackingRepository {
    fn get_record(&self, tracking_number: &str) -> Option<&TrackingRecord> {
        self.records.get(tracking_number)
    }
}
