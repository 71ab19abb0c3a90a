//! Page title extraction.

use crate::{MarkdownError, Result};

/// Text of the first `# ` heading line in a document
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .find(|line| line.starts_with("# "))
        .map(|line| line.trim_start_matches('#').trim().to_string())
        .ok_or(MarkdownError::NoTitle)
}
