// Console output for a fix run

use crate::error::FixError;
use crate::fixer::{FileOutcome, FileStatus, RunSummary};
use crate::model::FixerConfig;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, Row, Table};
use owo_colors::OwoColorize;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    /// Hide "Processing" and "No change" lines
    pub quiet: bool,
    /// Print nothing at all (library callers and tests)
    pub silent: bool,
}

impl Reporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet, silent: false }
    }

    pub fn silent() -> Self {
        Self { quiet: true, silent: true }
    }

    fn verbose(&self) -> bool {
        !self.quiet && !self.silent
    }

    pub fn banner(&self, config: &FixerConfig) {
        if self.silent {
            return;
        }
        println!();
        println!("{}", "━".repeat(60).bright_black());
        println!(
            "{} {}",
            "▸".bright_cyan(),
            "Fixing duplicate frontmatter".bright_cyan().bold()
        );
        println!("{}", "━".repeat(60).bright_black());
        println!("Scanning directory: {}", config.root.display());
        if config.dry_run {
            println!(
                "{} {}",
                "▸".bright_blue(),
                "Dry run mode - no files will be written".bright_blue()
            );
        }
        println!();
    }

    pub fn processing(&self, path: &Path) {
        if self.verbose() {
            println!("Processing: {}", path.display());
        }
    }

    pub fn outcome(&self, outcome: &FileOutcome) {
        if self.silent {
            return;
        }
        let path = outcome.path.display();
        match outcome.status {
            FileStatus::Fixed => {
                println!("  {} Fixed frontmatter in {}", "✓".bright_green(), path);
            }
            FileStatus::WouldFix => {
                println!("  {} Would fix {}", "→".bright_blue(), path);
            }
            FileStatus::Unchanged => {
                if self.verbose() {
                    println!(
                        "  {} No double frontmatter found in {}",
                        "→".bright_black(),
                        path
                    );
                }
            }
        }
        if outcome.embedded_delimiter {
            eprintln!(
                "  {} {}: header body contains a '---' line; review the merge",
                "▸".bright_yellow(),
                path
            );
        }
    }

    pub fn failure(&self, error: &FixError) {
        if self.silent {
            return;
        }
        eprintln!("  {} {}", "✗".bright_red(), error.to_string().red());
    }

    pub fn summary(&self, summary: &RunSummary, dry_run: bool) {
        if self.silent {
            return;
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);

        let error_color = if summary.has_errors() {
            Color::Red
        } else {
            Color::White
        };
        let (label, changed) = if dry_run {
            ("Would fix", summary.would_fix_count())
        } else {
            ("Fixed", summary.fixed_count())
        };

        table.add_row(Row::from(vec![
            Cell::new("Scanned").fg(Color::Cyan),
            Cell::new(summary.total()).fg(Color::White),
        ]));
        table.add_row(Row::from(vec![
            Cell::new(label).fg(Color::Cyan),
            Cell::new(changed).fg(Color::Green),
        ]));
        table.add_row(Row::from(vec![
            Cell::new("Unchanged").fg(Color::Cyan),
            Cell::new(summary.unchanged_count()).fg(Color::White),
        ]));
        table.add_row(Row::from(vec![
            Cell::new("Errors").fg(Color::Cyan),
            Cell::new(summary.error_count()).fg(error_color),
        ]));

        println!();
        println!("{}", table);

        let line = if dry_run {
            format!("Completed: would fix {} files", changed)
        } else {
            format!("Completed: fixed {} files", changed)
        };
        if summary.has_errors() {
            println!("{} {} ({} errors)", "✗".bright_red(), line.red(), summary.error_count());
        } else {
            println!("{} {}", "✓".bright_green(), line.green().bold());
        }
    }
}
