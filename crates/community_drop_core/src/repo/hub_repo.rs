//! Hub table contract and in-memory implementation.

use crate::model::hub::Hub;
use crate::repo::seed::seed_hubs;
use crate::repo::{RepoError, RepoResult};
use std::collections::BTreeSet;

/// Read-only access to the hub table.
pub trait HubRepository {
    /// All hubs in table order.
    fn hubs(&self) -> &[Hub];

    /// Hub by exact id.
    fn get_hub(&self, id: &str) -> Option<&Hub> {
        self.hubs().iter().find(|hub| hub.id == id)
    }
}

/// Vector-backed hub table.
#[derive(Debug, Clone)]
pub struct InMemoryHubRepository {
    hubs: Vec<Hub>,
}

impl InMemoryHubRepository {
    /// Builds a table from fixture rows, rejecting duplicate ids.
    pub fn try_new(hubs: Vec<Hub>) -> RepoResult<Self> {
        let mut ids = BTreeSet::new();
        for hub in &hubs {
            if !ids.insert(hub.id.as_str()) {
                return Err(RepoError::DuplicateKey {
                    table: "hubs",
                    key: hub.id.clone(),
                });
            }
        }
        Ok(Self { hubs })
    }

    /// Table loaded with the seeded network.
    pub fn seeded() -> Self {
        Self { hubs: seed_hubs() }
    }
}

impl HubRepository for InMemoryHubRepository {
    fn hubs(&self) -> &[Hub] {
        &self.hubs
    }
}

#[cfg(test)]
mod tests {
    use super::{HubRepository, InMemoryHubRepository};
    use crate::repo::seed::seed_hubs;
    use crate::repo::RepoError;

    #[test]
    fn rejects_duplicate_hub_ids() {
        let mut hubs = seed_hubs();
        hubs.push(hubs[0].clone());
        let err = InMemoryHubRepository::try_new(hubs).unwrap_err();
        assert_eq!(
            err,
            RepoError::DuplicateKey {
                table: "hubs",
                key: "1".to_string()
            }
        );
    }

    #[test]
    fn get_hub_is_exact_match() {
        let repo = InMemoryHubRepository::seeded();
        assert_eq!(repo.get_hub("2").map(|hub| hub.name.as_str()), Some("Community Warehouse"));
        assert!(repo.get_hub("02").is_none());
    }
}
