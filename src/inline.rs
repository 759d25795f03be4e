//! Inline tokenizer: turns one logical line of markdown into [`TextSpan`]s.
//!
//! Nested emphasis is not supported. Each pass only splits spans that are
//! still [`SpanKind::Normal`], so a delimiter inside an already typed span is
//! kept as literal text.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::block::{SpanKind, TextSpan};
use crate::error::{Error, Result};

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// Same shape as [`IMAGE_RE`] without the `!`. Matches preceded by `!` are
/// rejected in [`find_links`] since `regex` has no lookbehind.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// Tokenize `text` into spans.
///
/// Passes run in a fixed order: bold, italic, code, image, link. Images must
/// be resolved before links or the link pattern would eat the `[alt](url)`
/// part of every image.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>> {
    let spans = vec![TextSpan::normal(text)];
    let spans = split_delimiter(spans, "**", SpanKind::Bold)?;
    let spans = split_delimiter(spans, "_", SpanKind::Italic)?;
    let spans = split_delimiter(spans, "`", SpanKind::Code)?;
    let spans = split_images(spans);
    Ok(split_links(spans))
}

/// Split every normal span on a paired delimiter, promoting the enclosed
/// text to `kind`. Fails on an odd number of delimiters within one span.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>> {
    if delimiter.is_empty() {
        return Ok(spans);
    }

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if span.is_normal() {
            out.extend(split_text(&span.content, delimiter, kind)?);
        } else {
            out.push(span);
        }
    }
    Ok(out)
}

fn split_text(text: &str, delimiter: &str, kind: SpanKind) -> Result<Vec<TextSpan>> {
    let positions: Vec<usize> = text.match_indices(delimiter).map(|(i, _)| i).collect();
    if positions.len() % 2 != 0 {
        return Err(Error::MalformedDelimiter {
            delimiter: delimiter.to_string(),
            count: positions.len(),
            text: text.to_string(),
        });
    }

    let mut spans = Vec::new();
    let mut cursor = 0;
    for pair in positions.chunks_exact(2) {
        let (open, close) = (pair[0], pair[1]);
        push_nonempty(&mut spans, &text[cursor..open], SpanKind::Normal);
        push_nonempty(&mut spans, &text[open + delimiter.len()..close], kind);
        cursor = close + delimiter.len();
    }
    push_nonempty(&mut spans, &text[cursor..], SpanKind::Normal);

    Ok(spans)
}

fn push_nonempty(spans: &mut Vec<TextSpan>, text: &str, kind: SpanKind) {
    if !text.is_empty() {
        spans.push(TextSpan::new(text, kind));
    }
}

/// A `[label](url)` match within a larger string
#[derive(Debug)]
struct Found<'a> {
    range: Range<usize>,
    label: &'a str,
    url: &'a str,
}

fn find_images(text: &str) -> Vec<Found<'_>> {
    IMAGE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            Some(Found {
                range: caps.get(0)?.range(),
                label: caps.get(1)?.as_str(),
                url: caps.get(2)?.as_str(),
            })
        })
        .collect()
}

fn find_links(text: &str) -> Vec<Found<'_>> {
    let mut found = Vec::new();
    let mut at = 0;
    while let Some(caps) = LINK_RE.captures_at(text, at) {
        let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            break;
        };
        if text[..whole.start()].ends_with('!') {
            // Retry just past the `[` so a later match can still be found.
            at = whole.start() + 1;
            continue;
        }
        found.push(Found {
            range: whole.range(),
            label: label.as_str(),
            url: url.as_str(),
        });
        at = whole.end();
    }
    found
}

/// `(alt, url)` pairs for every `![alt](url)` in `text`
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    find_images(text)
        .into_iter()
        .map(|f| (f.label.to_string(), f.url.to_string()))
        .collect()
}

/// `(text, url)` pairs for every `[text](url)` in `text` not preceded by `!`
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    find_links(text)
        .into_iter()
        .map(|f| (f.label.to_string(), f.url.to_string()))
        .collect()
}

pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, find_images, |alt, url| TextSpan::image(alt, url))
}

pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, find_links, |text, url| TextSpan::link(text, url))
}

fn split_matches(
    spans: Vec<TextSpan>,
    find: fn(&str) -> Vec<Found<'_>>,
    make: fn(&str, &str) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_normal() {
            out.push(span);
            continue;
        }

        let matches = find(&span.content);
        if matches.is_empty() {
            out.push(span);
            continue;
        }

        let mut cursor = 0;
        for m in &matches {
            push_nonempty(&mut out, &span.content[cursor..m.range.start], SpanKind::Normal);
            out.push(make(m.label, m.url));
            cursor = m.range.end;
        }
        push_nonempty(&mut out, &span.content[cursor..], SpanKind::Normal);
    }
    out
}
