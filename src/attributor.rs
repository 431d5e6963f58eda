//! Line attribution.
//!
//! `LineAttributor` answers "who last changed this line, and why" for one
//! repository. It is called once per rendered line, so blame is computed per
//! file and cached (see `HistoryCache`).
//!
//! Only the first line of each blame hunk is annotated: a line gets an
//! attribution when a hunk *starts* on it, not when a hunk merely covers it.
//!
//! Backend failures never reach the caller. They are logged and the file is
//! remembered as having no history. The only error `resolve` returns is a
//! `ContractViolation` for malformed input.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::AttributorConfig;
use crate::error::Result;
use crate::format::{build_body, format_commit, format_context};
use crate::git::{HistoryBackend, HistoryCache};
use crate::models::{Attribution, BlameHunk, LineContext};
use crate::paths::{display_relative, normalize_path, relative_to};

pub struct LineAttributor<B: HistoryBackend> {
    backend: B,
    root: PathBuf,
    cache: HistoryCache,
    config: AttributorConfig,
}

impl<B: HistoryBackend> LineAttributor<B> {
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, AttributorConfig::default())
    }

    pub fn with_config(backend: B, config: AttributorConfig) -> Self {
        let root = normalize_path(backend.workdir());
        Self {
            backend,
            root,
            cache: HistoryCache::new(),
            config,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn cache(&self) -> &HistoryCache {
        &self.cache
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Attribution for the line in `ctx`, if a blame hunk starts on it.
    pub fn resolve(&mut self, ctx: &LineContext) -> Result<Option<Attribution>> {
        let line = ctx.zero_based_line()?;
        let path = normalize_path(&ctx.file_path);

        let hunk = {
            let backend = &self.backend;
            let root = &self.root;
            self.cache
                .get_or_compute(&path, || load_history(backend, root, &path))
                .iter()
                .find(|hunk| hunk.starts_at(line))
                .cloned()
        };
        let Some(hunk) = hunk else {
            return Ok(None);
        };

        Ok(self.attribute(&path, ctx.line_number, &hunk))
    }

    /// Host visitor entry point: `context` is the renderer's per-line bag and
    /// the returned string is the HTML anchor to embed. `_text` is the line's
    /// source text, which the annotation does not depend on.
    pub fn visit(
        &mut self,
        _text: &str,
        context: &HashMap<String, String>,
    ) -> Result<Option<String>> {
        let ctx = LineContext::from_bag(context)?;
        Ok(self.resolve(&ctx)?.map(|attribution| attribution.to_html_anchor()))
    }

    fn attribute(&self, path: &Path, line_number: u32, hunk: &BlameHunk) -> Option<Attribution> {
        let commit_text = match format_commit(&hunk.commit, |id| self.backend.shorten_id(id)) {
            Ok(text) => text,
            Err(e) => {
                tracing::info!(
                    path = %path.display(),
                    error = %e,
                    "Couldn't format commit {}",
                    hunk.commit.id
                );
                return None;
            }
        };

        let display_path = relative_to(&self.root, path)
            .map(|relative| display_relative(&relative))
            .unwrap_or_else(|| path.display().to_string());

        Some(Attribution {
            author: hunk.commit.author.clone(),
            subject: self.config.subject.clone(),
            body: build_body(&format_context(&display_path, line_number), &commit_text),
        })
    }
}

/// Blame `path` through the backend, degrading every failure to no history.
fn load_history<B: HistoryBackend>(backend: &B, root: &Path, path: &Path) -> Vec<BlameHunk> {
    let Some(relative) = relative_to(root, path) else {
        tracing::debug!("Not under {}, skipping blame: {}", root.display(), path.display());
        return Vec::new();
    };

    match query_backend(backend, &relative) {
        Ok(hunks) => hunks,
        Err(e) => {
            tracing::info!(path = %path.display(), error = %e, "Couldn't blame {}", path.display());
            Vec::new()
        }
    }
}

fn query_backend<B: HistoryBackend>(backend: &B, relative: &Path) -> Result<Vec<BlameHunk>> {
    if backend.is_path_ignored(relative)? {
        tracing::debug!("Ignored by repository rules: {}", relative.display());
        return Ok(Vec::new());
    }
    backend.blame(relative)
}
