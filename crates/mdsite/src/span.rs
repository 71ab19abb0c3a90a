//! Typed inline text spans

use mdsite_core::HtmlNode;

/// A run of inline text with a single formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSpan {
    /// Unformatted text
    Plain(String),

    /// `**bold**`
    Bold(String),

    /// `_italic_`
    Italic(String),

    /// `` `code` ``
    Code(String),

    /// `[label](url)`
    Link { label: String, url: String },

    /// `![alt](url)`
    Image { alt: String, url: String },
}

impl TextSpan {
    /// Reconstruct the markdown source this span was parsed from
    pub fn to_markdown(&self) -> String {
        match self {
            TextSpan::Plain(text) => text.clone(),
            TextSpan::Bold(text) => format!("**{}**", text),
            TextSpan::Italic(text) => format!("_{}_", text),
            TextSpan::Code(text) => format!("`{}`", text),
            TextSpan::Link { label, url } => format!("[{}]({})", label, url),
            TextSpan::Image { alt, url } => format!("![{}]({})", alt, url),
        }
    }

    /// Render this span as an HTML leaf
    pub fn to_html_node(&self) -> HtmlNode {
        match self {
            TextSpan::Plain(text) => HtmlNode::text(text.as_str()),
            TextSpan::Bold(text) => HtmlNode::leaf("b", text.as_str()),
            TextSpan::Italic(text) => HtmlNode::leaf("i", text.as_str()),
            TextSpan::Code(text) => HtmlNode::leaf("code", text.as_str()),
            TextSpan::Link { label, url } => {
                HtmlNode::leaf_with_attrs("a", label.as_str(), vec![("href", url.as_str())])
            }
            TextSpan::Image { alt, url } => {
                HtmlNode::leaf_with_attrs(
                    "img",
                    "",
                    vec![("src", url.as_str()), ("alt", alt.as_str())],
                )
            }
        }
    }
}

impl From<TextSpan> for HtmlNode {
    fn from(span: TextSpan) -> Self {
        span.to_html_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_to_html() {
        let node = TextSpan::Plain("This is a text node".to_string()).to_html_node();
        assert_eq!(node.tag(), None);
        assert_eq!(node.value(), Some("This is a text node"));
    }

    #[test]
    fn test_formatted_to_html() {
        assert_eq!(
            TextSpan::Bold("bold".to_string()).to_html_node().to_html().unwrap(),
            "<b>bold</b>"
        );
        assert_eq!(
            TextSpan::Italic("it".to_string()).to_html_node().to_html().unwrap(),
            "<i>it</i>"
        );
        assert_eq!(
            TextSpan::Code("x = 1".to_string()).to_html_node().to_html().unwrap(),
            "<code>x = 1</code>"
        );
    }

    #[test]
    fn test_link_to_html() {
        let span = TextSpan::Link {
            label: "boot dev".to_string(),
            url: "https://www.boot.dev".to_string(),
        };
        let node = HtmlNode::from(span);
        assert_eq!(node.tag(), Some("a"));
        assert_eq!(node.attr("href"), Some("https://www.boot.dev"));
        assert_eq!(
            node.to_html().unwrap(),
            "<a href=\"https://www.boot.dev\">boot dev</a>"
        );
    }

    #[test]
    fn test_image_to_html() {
        let span = TextSpan::Image {
            alt: "rick roll".to_string(),
            url: "https://i.imgur.com/aKaOqIh.gif".to_string(),
        };
        let node = span.to_html_node();
        assert_eq!(node.value(), Some(""));
        assert_eq!(
            node.to_html().unwrap(),
            "<img src=\"https://i.imgur.com/aKaOqIh.gif\" alt=\"rick roll\"></img>"
        );
    }

    #[test]
    fn test_to_markdown() {
        let spans = [
            TextSpan::Plain("a ".to_string()),
            TextSpan::Bold("b".to_string()),
            TextSpan::Italic("c".to_string()),
            TextSpan::Code("d".to_string()),
            TextSpan::Link {
                label: "e".to_string(),
                url: "f".to_string(),
            },
            TextSpan::Image {
                alt: "g".to_string(),
                url: "h".to_string(),
            },
        ];
        let source: String = spans.iter().map(TextSpan::to_markdown).collect();
        assert_eq!(source, "a **b**_c_`d`[e](f)![g](h)");
    }
}
