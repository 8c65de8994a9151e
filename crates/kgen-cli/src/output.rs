//! Writing manifest sets to disk

use std::fmt;

use kgen_fs::OutputPath;
use kgen_fs::checksum::{content_checksum, file_checksum};
use kgen_fs::io::{read_existing, write_atomic};
use kgen_manifest::{ManifestSet, file_name, to_yaml};
use similar::TextDiff;

use crate::error::Result;

/// What happened (or would happen) to one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Created,
    Updated,
    Unchanged,
}

impl fmt::Display for WriteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteStatus::Created => write!(f, "created"),
            WriteStatus::Updated => write!(f, "updated"),
            WriteStatus::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Result of writing one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub path: OutputPath,
    pub status: WriteStatus,
    /// Unified diff against the previous content, when requested and changed.
    pub diff: Option<String>,
}

/// Writes manifest sets below an output root.
#[derive(Debug, Clone)]
pub struct ManifestWriter {
    root: OutputPath,
    dry_run: bool,
    diff: bool,
}

impl ManifestWriter {
    pub fn new(root: OutputPath) -> Self {
        Self {
            root,
            dry_run: false,
            diff: false,
        }
    }

    /// Compute statuses without touching the filesystem.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Attach a unified diff to every changed file.
    pub fn with_diff(mut self, diff: bool) -> Self {
        self.diff = diff;
        self
    }

    /// Write every document of `set` to `{root}/{set.relative_dir}`.
    ///
    /// Stops at the first failure; files already written stay on disk.
    pub fn write_set(&self, set: &ManifestSet) -> Result<Vec<WriteOutcome>> {
        let dir = self.root.join_path(&set.relative_dir)?;
        let mut outcomes = Vec::with_capacity(set.len());

        for document in set.iter() {
            let path = dir.join(&file_name(document))?;
            let content = to_yaml(document)?;
            outcomes.push(self.write_file(path, &content)?);
        }
        Ok(outcomes)
    }

    fn write_file(&self, path: OutputPath, content: &str) -> Result<WriteOutcome> {
        let status = match file_checksum(&path)? {
            None => WriteStatus::Created,
            Some(existing) if existing == content_checksum(content) => WriteStatus::Unchanged,
            Some(_) => WriteStatus::Updated,
        };

        let diff = if self.diff && status != WriteStatus::Unchanged {
            let previous = read_existing(&path)?.unwrap_or_default();
            Some(unified_diff(&previous, content, path.as_str()))
        } else {
            None
        };

        if !self.dry_run && status != WriteStatus::Unchanged {
            write_atomic(&path, content.as_bytes())?;
            tracing::info!(path = %path, %status, "wrote manifest");
        }

        Ok(WriteOutcome { path, status, diff })
    }
}

fn unified_diff(old: &str, new: &str, name: &str) -> String {
    TextDiff::from_lines(old, new)
        .unified_diff()
        .header(&format!("a/{name}"), &format!("b/{name}"))
        .to_string()
}
