// Detect two back-to-back frontmatter blocks at the top of a document and fold them into one

use once_cell::sync::Lazy;
use regex::Regex;

/// Frontmatter delimiter marker
pub const DELIMITER: &str = "---";

/// `---\n<first>\n---\n---\n<second>\n---`, anchored at the start of the text.
/// Both bodies are lazy so each one stops at the earliest delimiter that completes the pattern.
static DOUBLE_FRONTMATTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A---\n(?s:(.*?))\n---\n---\n(?s:(.*?))\n---")
        .expect("double frontmatter pattern is valid")
});

/// Result of running the merger over one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Document text after the merge (identical to the input when `changed` is false)
    pub content: String,
    pub changed: bool,
    /// A captured body contains a `---` line, or the closing marker ran into more dashes.
    /// The merge still happened, but the block boundaries may not be where the author meant them.
    pub embedded_delimiter: bool,
}

impl MergeOutcome {
    fn unchanged(content: &str) -> Self {
        Self {
            content: content.to_string(),
            changed: false,
            embedded_delimiter: false,
        }
    }
}

/// Returns true when the document starts with two stacked frontmatter blocks
pub fn has_duplicate_frontmatter(content: &str) -> bool {
    DOUBLE_FRONTMATTER.is_match(content)
}

/// Merge the two leading frontmatter blocks of `content` into a single block.
///
/// Only the first two blocks at the very start of the text are considered.
/// Everything after the second closing `---` is carried over untouched.
pub fn merge_frontmatter(content: &str) -> MergeOutcome {
    let Some(caps) = DOUBLE_FRONTMATTER.captures(content) else {
        return MergeOutcome::unchanged(content);
    };

    let first = caps.get(1).map_or("", |m| m.as_str()).trim();
    let second = caps.get(2).map_or("", |m| m.as_str()).trim();
    let matched_end = caps.get(0).map_or(0, |m| m.end());
    let remaining = &content[matched_end..];

    let embedded_delimiter = contains_delimiter_line(first)
        || contains_delimiter_line(second)
        || remaining.starts_with('-');

    let mut merged = String::with_capacity(content.len());
    merged.push_str(DELIMITER);
    merged.push('\n');
    merged.push_str(first);
    merged.push('\n');
    merged.push_str(second);
    merged.push('\n');
    merged.push_str(DELIMITER);
    merged.push_str(remaining);

    MergeOutcome {
        content: merged,
        changed: true,
        embedded_delimiter,
    }
}

fn contains_delimiter_line(body: &str) -> bool {
    body.lines().any(|line| line.trim_end() == DELIMITER)
}
