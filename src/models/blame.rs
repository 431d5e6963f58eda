//! Blame data types.
//!
//! A file's blame is an ordered sequence of hunks, each covering a
//! contiguous run of lines in the file's final revision and attributed to
//! one commit.

use std::sync::Arc;

use super::CommitRecord;

/// A contiguous range of lines attributed to a single commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlameHunk {
    /// First line of the hunk (0-indexed, final revision coordinates)
    pub final_start_line: usize,
    /// Number of lines covered by the hunk
    pub lines_in_hunk: usize,
    /// Commit that last touched these lines, shared between hunks
    pub commit: Arc<CommitRecord>,
}

impl BlameHunk {
    pub fn new(final_start_line: usize, lines_in_hunk: usize, commit: Arc<CommitRecord>) -> Self {
        Self {
            final_start_line,
            lines_in_hunk,
            commit,
        }
    }

    /// Whether this hunk begins exactly at `line` (0-indexed).
    pub fn starts_at(&self, line: usize) -> bool {
        self.final_start_line == line
    }
}
