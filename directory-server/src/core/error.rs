//! Server startup and run errors

use thiserror::Error;

use crate::db::repository::RepoError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Store(#[from] RepoError),
}

/// Result type for the server startup path
pub type Result<T> = std::result::Result<T, ServerError>;
