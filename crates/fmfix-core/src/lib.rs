pub mod config;
pub mod discover;
pub mod error;
pub mod fixer;
pub mod merge;
pub mod model;
pub mod report;

pub use error::FixError;
pub use fixer::{FileOutcome, FileStatus, RunSummary};
pub use merge::{has_duplicate_frontmatter, merge_frontmatter, MergeOutcome};
pub use model::{ConfigOverrides, FixerConfig};

use anyhow::{Context, Result};

/// Resolve configuration from the current directory and fix every matching file under the root
pub fn cmd_fix(overrides: &ConfigOverrides, quiet: bool) -> Result<RunSummary> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let config = config::load_config_with_precedence(&cwd, overrides)?;
    let reporter = report::Reporter::new(quiet);
    fixer::run(&config, &reporter)
}
