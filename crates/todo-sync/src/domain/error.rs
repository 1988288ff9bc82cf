//! Error Types
//!
//! `RepoError` is what the remote store reports; `ErrorKind` is the closed
//! set of failures the user gets to see.

use thiserror::Error;

/// Common result type for repository calls
pub type RepoResult<T> = Result<T, RepoError>;

/// Failure talking to the remote item store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// User-visible failure, one per kind of operation.
/// `Display` is the banner text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    #[error("Unable to load todos")]
    Load,
    #[error("Unable to add a todo")]
    Add,
    #[error("Unable to update a todo")]
    Update,
    #[error("Unable to delete a todo")]
    Delete,
    #[error("Title should not be empty")]
    EmptyTitle,
}
