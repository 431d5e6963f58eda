use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorInfo {
    pub name: String,
    pub email: String,
}

/// Commit metadata as read from the object store.
///
/// `when` keeps the author's own UTC offset so the rendered date matches
/// what `git log` would print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Full hex object id
    pub id: String,
    pub author: AuthorInfo,
    pub when: DateTime<FixedOffset>,
    /// Full hex ids of the parents, in parent order
    pub parents: Vec<String>,
    /// Raw commit message, not trimmed
    pub message: String,
}

impl CommitRecord {
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }
}
