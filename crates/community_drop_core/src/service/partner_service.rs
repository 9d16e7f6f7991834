//! Partner dashboard service.
//!
//! # Responsibility
//! - Serve dashboard stats and the package table.
//! - Confirm pickups and toggle hub availability.
//!
//! # Invariants
//! - Only `ready` packages can be confirmed as picked up.

use crate::model::partner::{HubStats, PartnerPackage, PartnerPackageStatus};
use crate::repo::partner_repo::PartnerRepository;
use crate::repo::RepoError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Partner dashboard errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartnerError {
    PackageNotFound(String),
    InvalidTransition {
        id: String,
        from: PartnerPackageStatus,
    },
    Repo(RepoError),
}

impl Display for PartnerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PackageNotFound(id) => write!(f, "package not found: {id}"),
            Self::InvalidTransition { id, from } => write!(
                f,
                "package {id} cannot be picked up from status `{}`",
                from.as_str()
            ),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PartnerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for PartnerError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { key, .. } => Self::PackageNotFound(key),
            other => Self::Repo(other),
        }
    }
}

/// Dashboard facade for one partner hub.
pub struct PartnerService<R: PartnerRepository> {
    repo: R,
    hub_active: bool,
}

impl<R: PartnerRepository> PartnerService<R> {
    /// Creates a service for an active hub.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            hub_active: true,
        }
    }

    pub fn stats(&self) -> HubStats {
        self.repo.stats()
    }

    pub fn list_packages(&self) -> Vec<PartnerPackage> {
        self.repo.list_packages()
    }

    pub fn is_hub_active(&self) -> bool {
        self.hub_active
    }

    pub fn set_hub_active(&mut self, active: bool) {
        self.hub_active = active;
        info!("event=hub_active_toggle module=partner status=ok active={active}");
    }

    /// Marks a `ready` package as picked up and returns the updated row.
    pub fn confirm_pickup(&mut self, package_id: &str) -> Result<PartnerPackage, PartnerError> {
        let package = self
            .repo
            .get_package(package_id)
            .ok_or_else(|| PartnerError::PackageNotFound(package_id.to_string()))?;

        if package.status != PartnerPackageStatus::Ready {
            warn!(
                "event=confirm_pickup module=partner status=rejected from={}",
                package.status.as_str()
            );
            return Err(PartnerError::InvalidTransition {
                id: package.id,
                from: package.status,
            });
        }

        self.repo
            .set_package_status(package_id, PartnerPackageStatus::PickedUp)?;
        info!("event=confirm_pickup module=partner status=ok");
        self.repo
            .get_package(package_id)
            .ok_or_else(|| PartnerError::PackageNotFound(package_id.to_string()))
    }
}
