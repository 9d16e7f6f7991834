//! Read-only data providers and their in-memory implementations.
//!
//! # Responsibility
//! - Define lookup contracts for hubs, tracking records and partner packages.
//! - Ship seeded in-memory tables that callers inject into services.
//!
//! # Invariants
//! - Keys (`Hub::id`, tracking number, package id) are unique per table.
//! - Table order is preserved; no implementation re-sorts rows.
//! - A lookup miss is `None`, never an error.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod hub_repo;
pub mod partner_repo;
pub mod seed;
pub mod tracking_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for table construction and keyed writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    DuplicateKey { table: &'static str, key: String },
    NotFound { table: &'static str, key: String },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateKey { table, key } => write!(f, "duplicate key `{key}` in {table}"),
            Self::NotFound { table, key } => write!(f, "{table} row not found: {key}"),
        }
    }
}

impl Error for RepoError {}
