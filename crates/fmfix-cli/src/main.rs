use anyhow::Result;
use clap::Parser;
use fmfix_core::ConfigOverrides;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fmfix", version, about = "Merge duplicated frontmatter blocks in content files")]
struct Cli {
    /// Directory to scan (default: paths.root from fmfix.toml, else ".")
    root: Option<PathBuf>,
    /// File extension to process (default: mdx)
    #[arg(long = "ext", value_name = "EXT")]
    extension: Option<String>,
    /// Extra file name pattern to skip (repeatable); _index.mdx is always skipped
    #[arg(long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,
    /// Config file to use instead of ./fmfix.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Report what would change without writing files
    #[arg(long)]
    dry_run: bool,
    /// Also descend into hidden directories and files
    #[arg(long)]
    include_hidden: bool,
    /// Only print fixes, warnings, errors and the summary
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        config_path: cli.config,
        root: cli.root,
        extension: cli.extension,
        exclude: (!cli.exclude.is_empty()).then_some(cli.exclude),
        include_hidden: cli.include_hidden,
        dry_run: cli.dry_run,
    };

    let summary = fmfix_core::cmd_fix(&overrides, cli.quiet)?;

    if summary.has_errors() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
