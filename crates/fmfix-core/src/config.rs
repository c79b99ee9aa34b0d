use crate::model::{
    ConfigOverrides, FixerConfig, PartialFixerConfig, PartialPaths, PartialRun, PartialScan,
};
use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const PROJECT_CONFIG: &str = "fmfix.toml";
pub const LOCAL_CONFIG: &str = "fmfix.local.toml";

/// Load a single config file as a partial config
pub fn load_single_config(path: &Path) -> Result<PartialFixerConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: PartialFixerConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    Ok(config)
}

/// Location of the per-user config.
/// `FMFIX_CONFIG_HOME` replaces `~/.fmfix` when set.
pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(dir) = env::var("FMFIX_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join("config.toml"));
    }
    dirs::home_dir().map(|home| home.join(".fmfix/config.toml"))
}

/// Resolve the run configuration with precedence:
/// 1. Built-in defaults - lowest priority
/// 2. User config (~/.fmfix/config.toml)
/// 3. Project config (fmfix.toml in `base_dir`, or `--config`)
/// 4. Local config (fmfix.local.toml in `base_dir`)
/// 5. Environment variables (FMFIX_ROOT, FMFIX_EXTENSION, FMFIX_DRY_RUN)
/// 6. Command line overrides - highest priority
///
/// Relative roots are resolved against `base_dir`.
pub fn load_config_with_precedence(
    base_dir: &Path,
    overrides: &ConfigOverrides,
) -> Result<FixerConfig> {
    let mut layers = Vec::new();

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            match load_single_config(&user_config) {
                Ok(cfg) => layers.push(cfg),
                Err(e) => eprintln!("Warning: Failed to load user config: {:#}", e),
            }
        }
    }

    match &overrides.config_path {
        Some(explicit) => layers.push(load_single_config(explicit)?),
        None => {
            let project_config = base_dir.join(PROJECT_CONFIG);
            if project_config.exists() {
                match load_single_config(&project_config) {
                    Ok(cfg) => layers.push(cfg),
                    Err(e) => eprintln!("Warning: Failed to load project config: {:#}", e),
                }
            }
        }
    }

    let local_config = base_dir.join(LOCAL_CONFIG);
    if local_config.exists() {
        match load_single_config(&local_config) {
            Ok(cfg) => layers.push(cfg),
            Err(e) => eprintln!("Warning: Failed to load local config: {:#}", e),
        }
    }

    let mut merged = merge_configs(layers);
    apply_env_overrides(&mut merged);
    resolve(merged, overrides, base_dir)
}

/// Merge partial configs field by field, later layers override earlier ones
pub fn merge_configs(layers: Vec<PartialFixerConfig>) -> PartialFixerConfig {
    let mut merged = PartialFixerConfig::default();

    for cfg in layers {
        if let Some(new_paths) = cfg.paths {
            let paths = merged.paths.get_or_insert_with(PartialPaths::default);
            if new_paths.root.is_some() {
                paths.root = new_paths.root;
            }
        }

        if let Some(new_scan) = cfg.scan {
            let scan = merged.scan.get_or_insert_with(PartialScan::default);
            if new_scan.extension.is_some() {
                scan.extension = new_scan.extension;
            }
            if new_scan.exclude.is_some() {
                scan.exclude = new_scan.exclude;
            }
            if new_scan.include_hidden.is_some() {
                scan.include_hidden = new_scan.include_hidden;
            }
        }

        if let Some(new_run) = cfg.run {
            let run = merged.run.get_or_insert_with(PartialRun::default);
            if new_run.dry_run.is_some() {
                run.dry_run = new_run.dry_run;
            }
        }
    }

    merged
}

fn apply_env_overrides(config: &mut PartialFixerConfig) {
    if let Ok(root) = env::var("FMFIX_ROOT") {
        if !root.is_empty() {
            config.paths.get_or_insert_with(PartialPaths::default).root = Some(root);
        }
    }

    if let Ok(ext) = env::var("FMFIX_EXTENSION") {
        if !ext.is_empty() {
            config.scan.get_or_insert_with(PartialScan::default).extension = Some(ext);
        }
    }

    // FMFIX_DRY_RUN=1 turns on dry run; 0/false/empty leave it alone
    if let Ok(flag) = env::var("FMFIX_DRY_RUN") {
        if is_truthy(&flag) {
            config.run.get_or_insert_with(PartialRun::default).dry_run = Some(true);
        }
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}

/// Apply command line overrides on top of the merged layers and validate the result
fn resolve(
    partial: PartialFixerConfig,
    overrides: &ConfigOverrides,
    base_dir: &Path,
) -> Result<FixerConfig> {
    let defaults = FixerConfig::default();
    let paths = partial.paths.unwrap_or_default();
    let scan = partial.scan.unwrap_or_default();
    let run = partial.run.unwrap_or_default();

    let root = overrides
        .root
        .clone()
        .or_else(|| paths.root.map(PathBuf::from))
        .unwrap_or(defaults.root);
    let root = if root.is_absolute() {
        root
    } else if root == Path::new(".") {
        base_dir.to_path_buf()
    } else {
        base_dir.join(root)
    };

    let extension = overrides
        .extension
        .clone()
        .or(scan.extension)
        .unwrap_or(defaults.extension);
    let extension = normalize_extension(&extension)?;

    // Extra patterns only; the reserved index name is excluded during discovery regardless
    let exclude = overrides
        .exclude
        .clone()
        .or(scan.exclude)
        .unwrap_or(defaults.exclude);

    Ok(FixerConfig {
        root,
        extension,
        exclude,
        include_hidden: overrides.include_hidden
            || scan.include_hidden.unwrap_or(defaults.include_hidden),
        dry_run: overrides.dry_run || run.dry_run.unwrap_or(defaults.dry_run),
    })
}

/// Strip a leading dot and reject empty extensions
pub fn normalize_extension(raw: &str) -> Result<String> {
    let ext = raw.trim().trim_start_matches('.');
    if ext.is_empty() {
        anyhow::bail!("File extension must not be empty (got '{}')", raw);
    }
    Ok(ext.to_string())
}
