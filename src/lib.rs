//! Commit attribution for lines of a source-browsing page.
//!
//! For each rendered line the host asks a [`LineAttributor`] who last
//! changed it. Lines where a blame hunk starts get a mail-to link to the
//! author, pre-filled with the file, the line and the commit record.
//!
//! - `attributor`: LineAttributor, resolve/visit
//! - `git`: HistoryBackend trait, GitRepository (libgit2), HistoryCache
//! - `models`: BlameHunk, CommitRecord, LineContext, Attribution
//! - `format`: mail body layout
//! - `config`: AttributorConfig

pub mod attributor;
pub mod config;
pub mod error;
pub mod format;
pub mod git;
pub mod models;
pub mod paths;

#[cfg(test)]
mod test_support;

pub use attributor::LineAttributor;
pub use config::AttributorConfig;
pub use error::{AppError, Result};
pub use git::{GitRepository, HistoryBackend, HistoryCache};
pub use models::{Attribution, BlameHunk, CommitRecord, ContextKeys, LineContext};
