// Read each document, merge its frontmatter, write back when something changed

use crate::discover::discover_files;
use crate::error::FixError;
use crate::merge::merge_frontmatter;
use crate::model::FixerConfig;
use crate::report::Reporter;
use anyhow::Result;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Fixed,
    /// Dry run: the file would have been rewritten
    WouldFix,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: FileStatus,
    pub embedded_delimiter: bool,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<FileOutcome>,
    pub failures: Vec<FixError>,
}

impl RunSummary {
    fn count(&self, status: FileStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    pub fn fixed_count(&self) -> usize {
        self.count(FileStatus::Fixed)
    }

    pub fn would_fix_count(&self) -> usize {
        self.count(FileStatus::WouldFix)
    }

    pub fn unchanged_count(&self) -> usize {
        self.count(FileStatus::Unchanged)
    }

    pub fn error_count(&self) -> usize {
        self.failures.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len() + self.failures.len()
    }
}

/// Process one document in place. Nothing is written unless the merge changed the text
/// and `dry_run` is off.
pub fn fix_file(path: &Path, dry_run: bool) -> Result<FileOutcome, FixError> {
    let content = fs::read_to_string(path).map_err(|source| FixError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let merged = merge_frontmatter(&content);

    let status = if !merged.changed {
        FileStatus::Unchanged
    } else if dry_run {
        FileStatus::WouldFix
    } else {
        write_replacing(path, &merged.content).map_err(|source| FixError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        FileStatus::Fixed
    };

    Ok(FileOutcome {
        path: path.to_path_buf(),
        status,
        embedded_delimiter: merged.embedded_delimiter,
    })
}

/// Sibling path the new content is staged in before it replaces `path`.
/// Hidden and without the document extension, so discovery never picks it up.
pub fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".fmfix.tmp");
    path.with_file_name(name)
}

/// Write to a sibling temp file, then rename it over the original.
/// A failed write leaves the original document intact.
fn write_replacing(path: &Path, contents: &str) -> io::Result<()> {
    let permissions = fs::metadata(path)?.permissions();
    let tmp_path = staging_path(path);

    let staged = fs::write(&tmp_path, contents)
        .and_then(|()| fs::set_permissions(&tmp_path, permissions))
        .and_then(|()| fs::rename(&tmp_path, path));

    if staged.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    staged
}

/// Discover and process every candidate file under the configured root.
/// Per-file failures are collected in the summary; only discovery errors abort the run.
pub fn run(config: &FixerConfig, reporter: &Reporter) -> Result<RunSummary> {
    reporter.banner(config);

    let files = discover_files(config)?;
    let mut summary = RunSummary::default();

    for path in &files {
        reporter.processing(path);
        match fix_file(path, config.dry_run) {
            Ok(outcome) => {
                reporter.outcome(&outcome);
                summary.outcomes.push(outcome);
            }
            Err(e) => {
                reporter.failure(&e);
                summary.failures.push(e);
            }
        }
    }

    reporter.summary(&summary, config.dry_run);
    Ok(summary)
}
