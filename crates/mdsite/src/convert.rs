//! Block to HTML conversion and document assembly.

use mdsite_core::HtmlNode;

use crate::block::{classify, segment, BlockKind, CODE_FENCE};
use crate::inline::text_to_html_nodes;
use crate::Result;

/// Convert a markdown document into an HTML tree rooted at a `<div>`
pub fn to_html_tree(markdown: &str) -> Result<HtmlNode> {
    let children = segment(markdown)
        .into_iter()
        .map(|block| {
            let kind = classify(block);
            log::debug!("classified block as {:?}: {:?}", kind, first_line(block));
            block_to_html_node(block, kind)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::container("div", children))
}

/// Build the HTML subtree for a single classified block
pub fn block_to_html_node(block: &str, kind: BlockKind) -> Result<HtmlNode> {
    match kind {
        BlockKind::Code => Ok(code_block(block)),
        BlockKind::Heading(level) => heading(block, level),
        BlockKind::Quote => quote(block),
        BlockKind::UnorderedList(_) => list("ul", block),
        BlockKind::OrderedList => list("ol", block),
        BlockKind::Paragraph => paragraph(block),
    }
}

/// `<pre><code>` with the lines between the fences, untokenized
fn code_block(block: &str) -> HtmlNode {
    let trimmed = block.trim();
    if !(trimmed.starts_with(CODE_FENCE) && trimmed.ends_with(CODE_FENCE)) {
        log::warn!(
            "code block is missing its {} fences, rendering it as-is: {:?}",
            CODE_FENCE,
            first_line(block)
        );
    }

    let lines: Vec<&str> = block.split('\n').collect();
    let inner: &[&str] = if lines.len() > 2 {
        &lines[1..lines.len() - 1]
    } else {
        &[]
    };

    let mut code = inner.join("\n");
    code.push('\n');

    HtmlNode::container("pre", vec![HtmlNode::leaf("code", code)])
}

fn heading(block: &str, level: u8) -> Result<HtmlNode> {
    let line = first_line(block).trim_start_matches('#');
    let text = line.strip_prefix(' ').unwrap_or(line);
    let children = text_to_html_nodes(text)?;
    Ok(HtmlNode::container(&format!("h{}", level), children))
}

/// All lines of a quote collapse into one paragraph
fn quote(block: &str) -> Result<HtmlNode> {
    let mut children = Vec::new();
    for line in block.split('\n') {
        let line = line.strip_prefix('>').unwrap_or(line);
        let text = line.strip_prefix(' ').unwrap_or(line);
        children.extend(text_to_html_nodes(text)?);
    }

    let paragraph = HtmlNode::container("p", children);
    Ok(HtmlNode::container("blockquote", vec![paragraph]))
}

fn list(tag: &str, block: &str) -> Result<HtmlNode> {
    let items = block
        .split('\n')
        .map(|line| {
            let text = line.split_once(' ').map_or("", |(_, rest)| rest);
            Ok(HtmlNode::container("li", text_to_html_nodes(text)?))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::container(tag, items))
}

fn paragraph(block: &str) -> Result<HtmlNode> {
    let text = block.replace('\n', " ");
    Ok(HtmlNode::container("p", text_to_html_nodes(&text)?))
}

fn first_line(block: &str) -> &str {
    block.split('\n').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::ListMarker;
    use crate::MarkdownError;
    use std::sync::Mutex;

    fn render(markdown: &str) -> String {
        to_html_tree(markdown).unwrap().to_html().unwrap()
    }

    #[test]
    fn test_paragraphs() {
        let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here

";
        assert_eq!(
            render(md),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn test_headings() {
        assert_eq!(
            render("# Heading 1\n\n## Heading 2"),
            "<div><h1>Heading 1</h1><h2>Heading 2</h2></div>"
        );
        assert_eq!(
            render("###### Six with **bold**"),
            "<div><h6>Six with <b>bold</b></h6></div>"
        );
    }

    #[test]
    fn test_code_block() {
        let md = "
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
        assert_eq!(
            render(md),
            "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn test_code_block_single_line() {
        assert_eq!(
            render("```let x = 1;```"),
            "<div><pre><code>\n</code></pre></div>"
        );
    }

    #[test]
    fn test_code_block_without_fences_is_best_effort() {
        let node = block_to_html_node("first\nmiddle\nlast", BlockKind::Code).unwrap();
        assert_eq!(node.to_html().unwrap(), "<pre><code>middle\n</code></pre>");
    }

    struct CaptureLogger {
        records: Mutex<Vec<(log::Level, String)>>,
    }

    impl log::Log for CaptureLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            self.records
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger {
        records: Mutex::new(Vec::new()),
    };

    /// Warnings logged so far whose message contains `needle`
    fn warnings_containing(needle: &str) -> Vec<String> {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
        LOGGER
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, message)| *level == log::Level::Warn && message.contains(needle))
            .map(|(_, message)| message.clone())
            .collect()
    }

    #[test]
    fn test_code_block_without_fences_warns() {
        warnings_containing("");
        block_to_html_node("unfenced-start\nbody\nend", BlockKind::Code).unwrap();

        let warnings = warnings_containing("unfenced-start");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("missing its ``` fences"));
    }

    #[test]
    fn test_fenced_code_block_does_not_warn() {
        warnings_containing("");
        block_to_html_node("```clean-fence-marker\nbody\n```", BlockKind::Code).unwrap();

        assert!(warnings_containing("clean-fence-marker").is_empty());
    }

    #[test]
    fn test_quote() {
        assert_eq!(
            render("> This is a\n> **quote** block"),
            "<div><blockquote><p>This is a<b>quote</b> block</p></blockquote></div>"
        );
        assert_eq!(
            render(">tight"),
            "<div><blockquote><p>tight</p></blockquote></div>"
        );
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(
            render("- a\n- b"),
            "<div><ul><li>a</li><li>b</li></ul></div>"
        );
        assert_eq!(
            render("* one with `code`\n* two"),
            "<div><ul><li>one with <code>code</code></li><li>two</li></ul></div>"
        );
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            render("1. first\n2. _second_\n3. [third](/third)"),
            "<div><ol><li>first</li><li><i>second</i></li><li><a href=\"/third\">third</a></li></ol></div>"
        );
    }

    #[test]
    fn test_list_item_without_text() {
        let node = block_to_html_node("-", BlockKind::UnorderedList(ListMarker::Dash)).unwrap();
        assert_eq!(node.to_html().unwrap(), "<ul><li></li></ul>");
    }

    #[test]
    fn test_images_and_links_in_paragraph() {
        assert_eq!(
            render("See ![logo](/images/logo.png) on [the site](https://example.com)"),
            "<div><p>See <img src=\"/images/logo.png\" alt=\"logo\"></img> on <a href=\"https://example.com\">the site</a></p></div>"
        );
    }

    #[test]
    fn test_mixed_document() {
        let md = "# Title

Intro with **bold**.

> quoted

- one
- two

1. first
2. second

```
raw <code>
```";
        assert_eq!(
            render(md),
            "<div><h1>Title</h1><p>Intro with <b>bold</b>.</p><blockquote><p>quoted</p></blockquote><ul><li>one</li><li>two</li></ul><ol><li>first</li><li>second</li></ol><pre><code>raw <code>\n</code></pre></div>"
        );
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(render(""), "<div></div>");
        assert_eq!(render("\n\n\n"), "<div></div>");
    }

    #[test]
    fn test_block_order_is_preserved() {
        let tree = to_html_tree("# a\n\nb\n\n- c").unwrap();
        let tags: Vec<Option<&str>> = tree.children().iter().map(HtmlNode::tag).collect();
        assert_eq!(tags, vec![Some("h1"), Some("p"), Some("ul")]);
    }

    #[test]
    fn test_unmatched_delimiter_aborts_document() {
        let err = to_html_tree("# fine\n\n**bold is great").unwrap_err();
        assert!(matches!(
            err,
            MarkdownError::UnmatchedDelimiter { delimiter: "**", .. }
        ));

        let err = to_html_tree("- an _open item").unwrap_err();
        assert!(matches!(
            err,
            MarkdownError::UnmatchedDelimiter { delimiter: "_", .. }
        ));
    }
}
