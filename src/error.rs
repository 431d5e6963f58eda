//! Application error types.
//!
//! Defines `AppError` for every error condition the attributor can see.
//! Only `ContractViolation` ever reaches the caller of
//! `LineAttributor::resolve`; the rest are produced by the history backend
//! and absorbed into "no attribution".
//!
//! - `RepoNotFound`, `PathNotFound`, `InvalidPath` → backend/setup failures
//! - `Git`, `Internal` → libgit2 and miscellaneous failures
//! - `ContractViolation` → malformed input from the host

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Repository not found: {0}")]
    RepoNotFound(String),

    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Contract violation: {0}")]
    ContractViolation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, AppError::ContractViolation(_))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
