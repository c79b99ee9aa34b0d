// Enumerate candidate documents under the configured root

use crate::model::{FixerConfig, RESERVED_INDEX};
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Build a matcher for the exclude patterns plus the reserved index name.
/// Patterns apply to the file name only.
pub fn build_exclude_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    builder.add(Glob::new(RESERVED_INDEX)?);
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .with_context(|| format!("Invalid exclude pattern: {}", pattern))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

/// Find every file under `config.root` with the configured extension,
/// skipping the reserved index, excluded names and (unless enabled) hidden entries.
/// Sorted by path.
pub fn discover_files(config: &FixerConfig) -> Result<Vec<PathBuf>> {
    let root = &config.root;

    if !root.is_dir() {
        anyhow::bail!("Root directory does not exist: {}", root.display());
    }

    let excludes = build_exclude_set(&config.exclude)?;
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| {
            config.include_hidden || e.path() == root.as_path() || !is_hidden(e)
        })
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("Warning: Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if !has_extension(entry.path(), &config.extension) {
            continue;
        }

        if excludes.is_match(Path::new(entry.file_name())) {
            continue;
        }

        files.push(entry.into_path());
    }

    files.sort();
    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(extension)
}
