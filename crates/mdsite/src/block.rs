//! Block segmentation and classification.

use std::fmt;

/// Fence opening and closing a code block
pub const CODE_FENCE: &str = "```";

/// Marker of an unordered list item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `- item`
    Dash,
    /// `* item`
    Star,
    /// `+ item`
    Plus,
}

impl ListMarker {
    const ALL: [ListMarker; 3] = [ListMarker::Dash, ListMarker::Star, ListMarker::Plus];

    /// The marker including its trailing space
    pub fn as_str(self) -> &'static str {
        match self {
            ListMarker::Dash => "- ",
            ListMarker::Star => "* ",
            ListMarker::Plus => "+ ",
        }
    }

    /// Marker used by the first non-empty line of a block
    pub fn detect(block: &str) -> Option<Self> {
        let line = block.split('\n').find(|line| !line.is_empty())?;
        Self::ALL
            .into_iter()
            .find(|marker| line.starts_with(marker.as_str()))
    }
}

impl fmt::Display for ListMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().trim_end())
    }
}

/// Kind of a top-level markdown block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    /// Heading with level 1-6
    Heading(u8),
    Code,
    Quote,
    UnorderedList(ListMarker),
    OrderedList,
}

/// Split a document into trimmed, non-empty blocks separated by blank lines
pub fn segment(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block.
///
/// Checks run in precedence order: code fence, heading, quote, unordered
/// list, ordered list. Anything else is a paragraph.
pub fn classify(block: &str) -> BlockKind {
    let lines: Vec<&str> = block.split('\n').collect();

    if is_fenced(&lines) {
        return BlockKind::Code;
    }

    let marker = ListMarker::detect(block);
    let mut is_quote = true;
    let mut is_unordered = marker.is_some();
    let mut is_ordered = true;

    for (i, line) in lines.iter().enumerate() {
        if let Some(level) = heading_level(line) {
            return BlockKind::Heading(level);
        }

        if !line.starts_with('>') {
            is_quote = false;
        }
        if let Some(marker) = marker {
            if !line.starts_with(marker.as_str()) {
                is_unordered = false;
            }
        }
        if !line.starts_with(&format!("{}. ", i + 1)) {
            is_ordered = false;
        }
    }

    match marker {
        _ if is_quote => BlockKind::Quote,
        Some(marker) if is_unordered => BlockKind::UnorderedList(marker),
        _ if is_ordered => BlockKind::OrderedList,
        _ => BlockKind::Paragraph,
    }
}

/// Level of a `#`-prefixed heading line.
///
/// One to six `#` followed by a space; seven or more is not a heading.
pub fn heading_level(line: &str) -> Option<u8> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && line[hashes..].starts_with(' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

fn is_fenced(lines: &[&str]) -> bool {
    match (lines.first(), lines.last()) {
        (Some(first), Some(last)) => {
            first.len() >= CODE_FENCE.len()
                && last.len() >= CODE_FENCE.len()
                && first.starts_with(CODE_FENCE)
                && last.ends_with(CODE_FENCE)
        }
        _ => false,
    }
}
