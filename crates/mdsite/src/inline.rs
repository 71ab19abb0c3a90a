//! Inline tokenization.
//!
//! Inline text is tokenized in fixed stages over a list of spans. Each stage
//! only re-splits spans that are still [`TextSpan::Plain`]:
//!
//! 1. `**` delimiters become [`TextSpan::Bold`]
//! 2. `_` delimiters become [`TextSpan::Italic`]
//! 3. `` ` `` delimiters become [`TextSpan::Code`]
//! 4. `![alt](url)` becomes [`TextSpan::Image`]
//! 5. `[label](url)` becomes [`TextSpan::Link`]
//!
//! Brackets are not balanced: alt text and labels cannot contain `[` or `]`
//! and urls cannot contain `(` or `)`, so for nested syntax the innermost
//! complete occurrence wins.

use std::ops::Range;

use mdsite_core::HtmlNode;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::span::TextSpan;
use crate::{MarkdownError, Result};

/// Delimiters in the order they are split on
const DELIMITERS: &[(&str, fn(String) -> TextSpan)] = &[
    ("**", TextSpan::Bold),
    ("_", TextSpan::Italic),
    ("`", TextSpan::Code),
];

static IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid image regex"));

static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid link regex"));

/// A link or image found in a text run
#[derive(Debug, Clone, PartialEq, Eq)]
struct SpanMatch {
    range: Range<usize>,
    text: String,
    url: String,
}

/// Tokenize inline markdown into spans
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>> {
    let mut spans = vec![TextSpan::Plain(text.to_string())];

    for &(delimiter, make) in DELIMITERS {
        spans = split_spans_delimiter(spans, delimiter, make)?;
    }

    let spans = split_spans_images(spans);
    Ok(split_spans_links(spans))
}

/// Tokenize inline markdown and render every span as an HTML leaf
pub fn text_to_html_nodes(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(text_to_spans(text)?
        .iter()
        .map(TextSpan::to_html_node)
        .collect())
}

/// Split plain spans on a paired delimiter.
///
/// Text between a pair of delimiters becomes a span built by `make`, even
/// when empty. Empty plain text around the pairs is dropped. A plain span
/// with an odd number of delimiters is an error.
pub fn split_spans_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &'static str,
    make: fn(String) -> TextSpan,
) -> Result<Vec<TextSpan>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        let TextSpan::Plain(text) = span else {
            result.push(span);
            continue;
        };

        if text.matches(delimiter).count() % 2 != 0 {
            return Err(MarkdownError::UnmatchedDelimiter { delimiter, text });
        }

        for (i, section) in text.split(delimiter).enumerate() {
            if i % 2 == 1 {
                result.push(make(section.to_string()));
            } else if !section.is_empty() {
                result.push(TextSpan::Plain(section.to_string()));
            }
        }
    }

    Ok(result)
}

/// Split `![alt](url)` images out of plain spans
pub fn split_spans_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_matches(spans, image_matches, |alt, url| TextSpan::Image { alt, url })
}

/// Split `[label](url)` links out of plain spans
pub fn split_spans_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_matches(spans, link_matches, |label, url| TextSpan::Link { label, url })
}

/// Find all `(alt, url)` pairs of images in a text
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    image_matches(text)
        .into_iter()
        .map(|m| (m.text, m.url))
        .collect()
}

/// Find all `(label, url)` pairs of links in a text, skipping images
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    link_matches(text)
        .into_iter()
        .map(|m| (m.text, m.url))
        .collect()
}

fn split_spans_matches(
    spans: Vec<TextSpan>,
    find: fn(&str) -> Vec<SpanMatch>,
    make: fn(String, String) -> TextSpan,
) -> Vec<TextSpan> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        let TextSpan::Plain(text) = span else {
            result.push(span);
            continue;
        };

        let matches = find(&text);
        if matches.is_empty() {
            result.push(TextSpan::Plain(text));
            continue;
        }

        let mut cursor = 0;
        for m in matches {
            push_plain(&mut result, &text[cursor..m.range.start]);
            result.push(make(m.text, m.url));
            cursor = m.range.end;
        }
        push_plain(&mut result, &text[cursor..]);
    }

    result
}

fn push_plain(spans: &mut Vec<TextSpan>, text: &str) {
    if !text.is_empty() {
        spans.push(TextSpan::Plain(text.to_string()));
    }
}

fn image_matches(text: &str) -> Vec<SpanMatch> {
    IMAGE_PATTERN
        .captures_iter(text)
        .filter_map(|caps| span_match(&caps))
        .collect()
}

/// Link matches, excluding any preceded by `!`.
///
/// A rejected candidate resumes the scan one byte after its `[`, so text
/// inside it can still match.
fn link_matches(text: &str) -> Vec<SpanMatch> {
    let mut matches = Vec::new();
    let mut start = 0;

    while let Some(caps) = LINK_PATTERN.captures_at(text, start) {
        let Some(found) = span_match(&caps) else {
            break;
        };

        if text[..found.range.start].ends_with('!') {
            start = found.range.start + 1;
            continue;
        }

        start = found.range.end;
        matches.push(found);
    }

    matches
}

fn span_match(caps: &regex::Captures) -> Option<SpanMatch> {
    let whole = caps.get(0)?;
    Some(SpanMatch {
        range: whole.range(),
        text: caps.get(1)?.as_str().to_string(),
        url: caps.get(2)?.as_str().to_string(),
    })
}
