//! Hub finder service.
//!
//! # Invariants
//! - Filtering is stable: results keep table order.
//! - Search and type conditions are conjunctive.

use crate::model::hub::{Hub, HubFilter, MapMarker};
use crate::repo::hub_repo::HubRepository;
use log::debug;

/// Hub finder facade over an injected hub table.
pub struct HubService<R: HubRepository> {
    repo: R,
}

impl<R: HubRepository> HubService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Hubs passing `filter`, in table order.
    pub fn list_hubs(&self, filter: &HubFilter) -> Vec<Hub> {
        let hubs: Vec<Hub> = self
            .repo
            .hubs()
            .iter()
            .filter(|hub| filter.matches(hub))
            .cloned()
            .collect();
        debug!(
            "event=hubs_list module=hubs status=ok total={} matched={}",
            self.repo.hubs().len(),
            hubs.len()
        );
        hubs
    }

    pub fn find_hub(&self, id: &str) -> Option<Hub> {
        self.repo.get_hub(id).cloned()
    }

    /// Map markers for the hubs passing `filter`.
    pub fn map_markers(&self, filter: &HubFilter) -> Vec<MapMarker> {
        self.list_hubs(filter).iter().map(MapMarker::from).collect()
    }
}
