use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_EXTENSION: &str = "mdx";
/// Section index file name; discovery always skips it
pub const RESERVED_INDEX: &str = "_index.mdx";

/// Fully resolved settings for one run. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixerConfig {
    /// Directory that is scanned recursively
    pub root: PathBuf,
    /// File extension without the leading dot
    pub extension: String,
    /// Extra file name patterns (glob syntax) to skip on top of the reserved index name
    pub exclude: Vec<String>,
    pub include_hidden: bool,
    /// Report what would change without writing anything
    pub dry_run: bool,
}

impl Default for FixerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_string(),
            exclude: Vec::new(),
            include_hidden: false,
            dry_run: false,
        }
    }
}

/// Config file layer, every field optional so later layers only override what they set
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PartialFixerConfig {
    pub paths: Option<PartialPaths>,
    pub scan: Option<PartialScan>,
    pub run: Option<PartialRun>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PartialPaths {
    pub root: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PartialScan {
    pub extension: Option<String>,
    pub exclude: Option<Vec<String>>,
    #[serde(rename = "includeHidden")]
    pub include_hidden: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PartialRun {
    #[serde(rename = "dryRun")]
    pub dry_run: Option<bool>,
}

/// Values supplied on the command line; they win over every other layer
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Explicit config file; must exist when given
    pub config_path: Option<PathBuf>,
    pub root: Option<PathBuf>,
    pub extension: Option<String>,
    pub exclude: Option<Vec<String>>,
    pub include_hidden: bool,
    pub dry_run: bool,
}
