//! Fixtures shared by unit tests.

use chrono::{DateTime, FixedOffset};
use git2::{Oid, Repository, Signature, Time};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::models::{AuthorInfo, CommitRecord};

pub fn sample_commit(parents: &[&str]) -> CommitRecord {
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    CommitRecord {
        id: "4b825dc642cb6eb9a060e54bf8d69288fbee4904".to_string(),
        author: AuthorInfo {
            name: "A. Author".to_string(),
            email: "a@example.com".to_string(),
        },
        when: DateTime::from_timestamp(1_700_000_000, 0)
            .unwrap()
            .with_timezone(&offset),
        parents: parents.iter().map(|p| p.to_string()).collect(),
        message: "Fix the frobnicator\n".to_string(),
    }
}

pub fn init_repo() -> anyhow::Result<(TempDir, Repository)> {
    let dir = tempfile::tempdir()?;
    let repo = Repository::init(dir.path())?;
    Ok((dir, repo))
}

/// Write `name` and commit it on HEAD as "A. Author", UTC+02:00.
pub fn commit_file(
    repo: &Repository,
    workdir: &Path,
    name: &str,
    content: &str,
    message: &str,
    seconds: i64,
) -> anyhow::Result<Oid> {
    let path = workdir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;

    let sig = Signature::new("A. Author", "a@example.com", &Time::new(seconds, 120))?;
    let tree_id = {
        let mut index = repo.index()?;
        index.add_path(Path::new(name))?;
        index.write()?;
        index.write_tree()?
    };
    let tree = repo.find_tree(tree_id)?;

    let parent = match repo.head() {
        Ok(head) => Some(head.peel_to_commit()?),
        Err(_) => None,
    };
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    Ok(repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)?)
}
