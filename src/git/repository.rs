use chrono::{DateTime, FixedOffset};
use git2::{Oid, Repository};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::git::HistoryBackend;
use crate::models::{AuthorInfo, BlameHunk, CommitRecord};
use crate::paths::normalize_path;

/// An opened repository with a normalized working-directory root.
pub struct GitRepository {
    pub repo: Repository,
    pub root: PathBuf,
}

impl GitRepository {
    /// Open the repository containing `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let repo = Repository::discover(&path).map_err(|_| AppError::RepoNotFound(path_str.clone()))?;

        let root = match repo.workdir() {
            Some(workdir) => normalize_path(workdir),
            None => {
                return Err(AppError::InvalidPath(format!(
                    "{} is a bare repository",
                    path_str
                )));
            }
        };

        Ok(Self { repo, root })
    }
}

impl HistoryBackend for GitRepository {
    fn workdir(&self) -> &Path {
        &self.root
    }

    fn is_path_ignored(&self, relative_path: &Path) -> Result<bool> {
        Ok(self.repo.is_path_ignored(relative_path)?)
    }

    fn blame(&self, relative_path: &Path) -> Result<Vec<BlameHunk>> {
        let blame = self.repo.blame_file(relative_path, None)?;

        // Hunks from the same commit share one record
        let mut commits: HashMap<Oid, Arc<CommitRecord>> = HashMap::new();
        let mut hunks = Vec::with_capacity(blame.len());

        for hunk in blame.iter() {
            let oid = hunk.final_commit_id();
            let commit = match commits.get(&oid) {
                Some(record) => Arc::clone(record),
                None => {
                    let record = Arc::new(commit_to_record(&self.repo.find_commit(oid)?)?);
                    commits.insert(oid, Arc::clone(&record));
                    record
                }
            };

            // libgit2 numbers lines from 1
            hunks.push(BlameHunk::new(
                hunk.final_start_line().saturating_sub(1),
                hunk.lines_in_hunk(),
                commit,
            ));
        }

        Ok(hunks)
    }

    fn shorten_id(&self, id: &str) -> Result<String> {
        let oid = Oid::from_str(id)?;
        let short = self.repo.find_object(oid, None)?.short_id()?;
        short
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| AppError::Internal(format!("short id of {} is not valid UTF-8", id)))
    }
}

pub fn commit_to_record(commit: &git2::Commit) -> Result<CommitRecord> {
    let author = commit.author();
    Ok(CommitRecord {
        id: commit.id().to_string(),
        author: AuthorInfo {
            name: String::from_utf8_lossy(author.name_bytes()).to_string(),
            email: String::from_utf8_lossy(author.email_bytes()).to_string(),
        },
        when: git_time_to_datetime(&author.when())?,
        parents: commit.parent_ids().map(|id| id.to_string()).collect(),
        message: String::from_utf8_lossy(commit.message_bytes()).to_string(),
    })
}

/// Convert a signature time, keeping the signer's UTC offset.
pub fn git_time_to_datetime(time: &git2::Time) -> Result<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60).ok_or_else(|| {
        AppError::Internal(format!("invalid UTC offset: {} minutes", time.offset_minutes()))
    })?;
    let utc = DateTime::from_timestamp(time.seconds(), 0)
        .ok_or_else(|| AppError::Internal(format!("timestamp out of range: {}", time.seconds())))?;
    Ok(utc.with_timezone(&offset))
}
