//! # mdsite
//!
//! Convert a constrained markdown dialect to HTML.
//!
//! ## Design
//!
//! Conversion runs in two stages:
//!
//! - **Blocks**: the document is split on blank lines and every block is
//!   classified as a heading, code block, quote, list or paragraph.
//! - **Inlines**: the text of each block is tokenized into spans (bold,
//!   italic, code, links, images) which become leaves of the HTML tree.
//!
//! The result is an [`HtmlNode`] tree rooted at a single `<div>`.
//!
//! Supported syntax is deliberately small: no nested blocks, no tables and
//! no raw HTML. Unbalanced `**`, `_` or `` ` `` delimiters are an error
//! rather than being passed through as text.
//!
//! ## Example
//!
//! ```rust
//! use mdsite::markdown_to_html;
//!
//! let html = markdown_to_html("# Hello\n\nThis is **bold**").unwrap();
//! assert_eq!(html, "<div><h1>Hello</h1><p>This is <b>bold</b></p></div>");
//! ```

pub mod block;
mod convert;
pub mod inline;
mod span;
mod title;

pub use block::{classify, segment, BlockKind, ListMarker};
pub use convert::{block_to_html_node, to_html_tree};
pub use inline::{text_to_html_nodes, text_to_spans};
pub use mdsite_core::{HtmlNode, StructuralError};
pub use span::TextSpan;
pub use title::extract_title;

/// Error type for markdown conversion
#[derive(Debug, thiserror::Error)]
pub enum MarkdownError {
    #[error("Missing closing symbol `{delimiter}` in: {text}")]
    UnmatchedDelimiter {
        delimiter: &'static str,
        text: String,
    },

    #[error("No title found: the document needs a `# heading` line")]
    NoTitle,

    #[error("Invalid HTML tree: {0}")]
    Structural(#[from] StructuralError),
}

pub type Result<T> = std::result::Result<T, MarkdownError>;

/// Convert markdown straight to an HTML string
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    let tree = to_html_tree(markdown)?;
    Ok(tree.to_html()?)
}
