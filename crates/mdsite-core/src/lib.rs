//! mdsite-core - HTML node tree and serialization
//!
//! This crate provides the output model for the `mdsite` markdown converter:
//! a small immutable tree of HTML nodes and the code that turns it into HTML
//! text.
//!
//! # Architecture
//!
//! ```text
//! Markdown String ──mdsite──▶ ┌───────────┐
//!                             │ HtmlNode  │ ──serialize──▶ HTML String
//!                             └───────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use mdsite_core::HtmlNode;
//!
//! let tree = HtmlNode::container(
//!     "p",
//!     vec![
//!         HtmlNode::text("This is "),
//!         HtmlNode::leaf("b", "bold"),
//!         HtmlNode::text(" text."),
//!     ],
//! );
//!
//! assert_eq!(tree.to_html().unwrap(), "<p>This is <b>bold</b> text.</p>");
//! ```

mod node;
mod serialize;

pub use node::{Attributes, HtmlNode};
pub use serialize::serialize;

/// Serialization invariant violations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error("container node must have a tag")]
    MissingTag,

    #[error("leaf node <{tag}> must have a value unless it is a <br>")]
    MissingValue { tag: String },
}

pub type Result<T> = std::result::Result<T, StructuralError>;
