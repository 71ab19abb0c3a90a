//! HTML serialization
//!
//! Converts an `HtmlNode` tree into HTML text.

use crate::node::{Attributes, HtmlNode};
use crate::{Result, StructuralError};

/// Serialize a node tree to an HTML string
pub fn serialize(node: &HtmlNode) -> Result<String> {
    let mut output = String::with_capacity(1024);
    serialize_node(node, &mut output)?;
    Ok(output)
}

fn serialize_node(node: &HtmlNode, out: &mut String) -> Result<()> {
    match node {
        HtmlNode::Leaf {
            tag,
            value,
            attributes,
        } => serialize_leaf(tag.as_deref(), value.as_deref(), attributes, out),

        HtmlNode::Container {
            tag,
            children,
            attributes,
        } => {
            if tag.is_empty() {
                return Err(StructuralError::MissingTag);
            }

            open_tag(tag, attributes, out);
            for child in children {
                serialize_node(child, out)?;
            }
            close_tag(tag, out);
            Ok(())
        }
    }
}

fn serialize_leaf(
    tag: Option<&str>,
    value: Option<&str>,
    attributes: &Attributes,
    out: &mut String,
) -> Result<()> {
    match (tag, value) {
        (Some("br"), _) => out.push_str("<br>"),
        (None, Some(value)) => out.push_str(value),
        (Some(tag), Some(value)) => {
            open_tag(tag, attributes, out);
            out.push_str(value);
            close_tag(tag, out);
        }
        (tag, None) => {
            return Err(StructuralError::MissingValue {
                tag: tag.unwrap_or("#text").to_string(),
            })
        }
    }
    Ok(())
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    write_attributes(attributes, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Render attributes as ` name="value"` pairs in insertion order.
///
/// Values are emitted as-is, without escaping.
pub(crate) fn render_attributes(attributes: &Attributes) -> String {
    let mut out = String::new();
    write_attributes(attributes, &mut out);
    out
}

fn write_attributes(attributes: &Attributes, out: &mut String) {
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
