//! Repository Module
//!
//! Per-resource operations over the snapshot store. Each mutation runs as a
//! single load-compute-persist cycle via [`DirectoryStore::mutate`].

pub mod company;
pub mod department;
pub mod employee;
pub mod user;

// Re-exports
pub use company::CompanyRepository;
pub use department::DepartmentRepository;
pub use employee::EmployeeRepository;
pub use user::UserRepository;

use std::sync::Arc;
use thiserror::Error;

use crate::db::{DirectoryStore, StoreError};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// One error for unknown user and wrong password alike, so responses
    /// cannot be used to enumerate usernames
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with store reference
#[derive(Clone)]
pub struct BaseRepository {
    store: Arc<DirectoryStore>,
}

impl BaseRepository {
    pub fn new(store: Arc<DirectoryStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &DirectoryStore {
        &self.store
    }
}
