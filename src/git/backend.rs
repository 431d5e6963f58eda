use std::path::Path;

use crate::error::Result;
use crate::models::BlameHunk;

/// What the attributor needs from version control.
///
/// Paths passed in are relative to `workdir()`.
pub trait HistoryBackend {
    /// Absolute working-directory root of the repository.
    fn workdir(&self) -> &Path;

    /// Whether an ignore rule excludes `relative_path`.
    fn is_path_ignored(&self, relative_path: &Path) -> Result<bool>;

    /// Blame hunks of the file's most recent revision, ordered by start line.
    fn blame(&self, relative_path: &Path) -> Result<Vec<BlameHunk>>;

    /// Shortest unambiguous abbreviation of an object id.
    fn shorten_id(&self, id: &str) -> Result<String>;
}
