//! Partner hub package table.
//!
//! Unlike the other tables this one accepts status writes, because the
//! dashboard confirms pickups in place.

use crate::model::partner::{HubStats, PartnerPackage, PartnerPackageStatus};
use crate::repo::seed::{seed_hub_stats, seed_partner_packages};
use crate::repo::{RepoError, RepoResult};
use std::collections::BTreeSet;

/// Package storage for one partner hub.
pub trait PartnerRepository {
    fn stats(&self) -> HubStats;
    /// Packages in table order.
    fn list_packages(&self) -> Vec<PartnerPackage>;
    fn get_package(&self, id: &str) -> Option<PartnerPackage>;
    fn set_package_status(&mut self, id: &str, status: PartnerPackageStatus) -> RepoResult<()>;
}

/// Vector-backed partner table.
#[derive(Debug, Clone)]
pub struct InMemoryPartnerRepository {
    stats: HubStats,
    packages: Vec<PartnerPackage>,
}

impl InMemoryPartnerRepository {
    pub fn try_new(stats: HubStats, packages: Vec<PartnerPackage>) -> RepoResult<Self> {
        let mut ids = BTreeSet::new();
        for package in &packages {
            if !ids.insert(package.id.as_str()) {
                return Err(RepoError::DuplicateKey {
                    table: "partner_packages",
                    key: package.id.clone(),
                });
            }
        }
        Ok(Self { stats, packages })
    }

    pub fn seeded() -> Self {
        Self {
            stats: seed_hub_stats(),
            packages: seed_partner_packages(),
        }
    }
}

impl PartnerRepository for InMemoryPartnerRepository {
    fn stats(&self) -> HubStats {
        self.stats.clone()
    }

    fn list_packages(&self) -> Vec<PartnerPackage> {
        self.packages.clone()
    }

    fn get_package(&self, id: &str) -> Option<PartnerPackage> {
        self.packages.iter().find(|package| package.id == id).cloned()
    }

    fn set_package_status(&mut self, id: &str, status: PartnerPackageStatus) -> RepoResult<()> {
        let package = self
            .packages
            .iter_mut()
            .find(|package| package.id == id)
            .ok_or_else(|| RepoError::NotFound {
                table: "partner_packages",
                key: id.to_string(),
            })?;
        package.status = status;
        Ok(())
    }
}
