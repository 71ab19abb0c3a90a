//! HTML node tree
//!
//! Every node is either a leaf (text or a childless element) or a container
//! element owning an ordered list of children. Trees are built bottom-up and
//! are not mutated once assembled.

use indexmap::IndexMap;

use crate::serialize::{render_attributes, serialize};
use crate::Result;

/// Element attributes, rendered in insertion order
pub type Attributes = IndexMap<String, String>;

/// A node in the HTML output tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A node without children.
    ///
    /// With `tag = None` this is raw text and `value` is emitted verbatim.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Attributes,
    },

    /// An element wrapping zero or more children
    Container {
        tag: String,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Create a raw text node
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Create a childless element holding a text value
    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Create a childless element with attributes
    pub fn leaf_with_attrs(tag: &str, value: impl Into<String>, attrs: Vec<(&str, &str)>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attributes: collect_attrs(attrs),
        }
    }

    /// Create a `<br>` node
    pub fn line_break() -> Self {
        HtmlNode::Leaf {
            tag: Some("br".to_string()),
            value: None,
            attributes: Attributes::new(),
        }
    }

    /// Create a container element
    pub fn container(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Container {
            tag: tag.to_string(),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Create a container element with attributes
    pub fn container_with_attrs(
        tag: &str,
        children: Vec<HtmlNode>,
        attrs: Vec<(&str, &str)>,
    ) -> Self {
        HtmlNode::Container {
            tag: tag.to_string(),
            children,
            attributes: collect_attrs(attrs),
        }
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        matches!(self, HtmlNode::Leaf { .. })
    }

    /// Check if this is raw text (a leaf without a tag)
    pub fn is_text(&self) -> bool {
        matches!(self, HtmlNode::Leaf { tag: None, .. })
    }

    /// Get the tag name, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Container { tag, .. } => Some(tag.as_str()),
        }
    }

    /// Get the value of a leaf
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { value, .. } => value.as_deref(),
            HtmlNode::Container { .. } => None,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Container { attributes, .. } => {
                attributes
            }
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes().get(name).map(String::as_str)
    }

    /// Children of a container; leaves have none
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Container { children, .. } => children.as_slice(),
        }
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self {
            HtmlNode::Leaf { value, .. } => value.clone().unwrap_or_default(),
            HtmlNode::Container { children, .. } => {
                children.iter().map(HtmlNode::text_content).collect()
            }
        }
    }

    /// Render the attributes as ` name="value"` pairs
    pub fn render_attributes(&self) -> String {
        render_attributes(self.attributes())
    }

    /// Serialize this node and its descendants to HTML
    pub fn to_html(&self) -> Result<String> {
        serialize(self)
    }
}

fn collect_attrs(attrs: Vec<(&str, &str)>) -> Attributes {
    attrs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
