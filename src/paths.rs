//! Path normalization shared by the repository handle and the attributor.

use std::fs;
use std::path::{Path, PathBuf};

/// Absolute, canonical form of `path`.
///
/// Symlinks are resolved when the path exists. Otherwise the path is made
/// absolute against the current directory without touching the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// `path` relative to `root`, or `None` when it lies outside it.
pub fn relative_to(root: &Path, path: &Path) -> Option<PathBuf> {
    path.strip_prefix(root).ok().map(Path::to_path_buf)
}

/// Repository-style display form: components joined with `/`.
pub fn display_relative(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
