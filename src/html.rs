//! Assembles classified blocks into an HTML [`Node`] tree.

use crate::block::{Block, BlockKind, SpanKind, TextSpan};
use crate::error::{Error, Result};
use crate::inline::text_to_spans;
use crate::node::Node;
use crate::parser::{heading_prefix_level, ordered_prefix, parse};

/// Convert a whole document into a single `div` holding one node per block.
pub fn markdown_to_node(markdown: &str) -> Result<Node> {
    let children = parse(markdown)
        .iter()
        .map(block_to_node)
        .collect::<Result<Vec<_>>>()?;
    Ok(Node::parent("div", children))
}

/// Build the subtree for one classified block.
pub fn block_to_node(block: &Block) -> Result<Node> {
    let text = block.text.as_str();
    match block.kind {
        BlockKind::Paragraph => Ok(Node::parent("p", text_to_children(text)?)),
        BlockKind::Heading(level) if (1..=6).contains(&level) => {
            let content = strip_heading_prefix(text)?;
            Ok(Node::parent(format!("h{level}"), text_to_children(content)?))
        }
        BlockKind::Heading(level) => Err(Error::UnsupportedBlockKind(format!(
            "heading level {level}"
        ))),
        BlockKind::Code => code_to_node(text),
        BlockKind::Quote => {
            let stripped = text
                .split('\n')
                .map(|line| line.strip_prefix('>').unwrap_or(line))
                .collect::<Vec<_>>()
                .join("\n");
            Ok(Node::parent("blockquote", text_to_children(&stripped)?))
        }
        BlockKind::UnorderedList => {
            let items = text
                .split('\n')
                .map(|line| line.strip_prefix("- ").unwrap_or(line));
            list_to_node("ul", items)
        }
        BlockKind::OrderedList => {
            let items = text.split('\n').enumerate().map(|(i, line)| {
                let prefix = ordered_prefix(i);
                line.strip_prefix(prefix.as_str()).unwrap_or(line)
            });
            list_to_node("ol", items)
        }
    }
}

/// The fences are dropped and the body is kept verbatim, with no inline parsing.
fn code_to_node(block: &str) -> Result<Node> {
    let lines: Vec<&str> = block.split('\n').collect();
    let body = lines
        .get(1..lines.len().saturating_sub(1))
        .unwrap_or_default();
    let mut content = body.join("\n");
    content.push('\n');

    let code = span_to_node(&TextSpan::new(content, SpanKind::Code))?;
    Ok(Node::parent("pre", vec![code]))
}

fn list_to_node<'a>(tag: &str, items: impl Iterator<Item = &'a str>) -> Result<Node> {
    let children = items
        .map(|item| Ok(Node::parent("li", text_to_children(item)?)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Node::parent(tag, children))
}

/// Collapse soft line wraps into one logical line and tokenize it.
pub fn text_to_children(text: &str) -> Result<Vec<Node>> {
    let joined = text.split('\n').map(str::trim).collect::<Vec<_>>().join(" ");
    text_to_spans(&joined)?.iter().map(span_to_node).collect()
}

pub fn span_to_node(span: &TextSpan) -> Result<Node> {
    let text = span.content.as_str();
    let node = match span.kind {
        SpanKind::Normal => Node::text(text),
        SpanKind::Bold => Node::leaf("b", text),
        SpanKind::Italic => Node::leaf("i", text),
        SpanKind::Code => Node::leaf("code", text),
        SpanKind::Link => Node::leaf("a", text).with_attr("href", target(span, "a")?),
        SpanKind::Image => Node::void("img")
            .with_attr("src", target(span, "img")?)
            .with_attr("alt", text),
    };
    Ok(node)
}

fn target<'a>(span: &'a TextSpan, tag: &str) -> Result<&'a str> {
    span.target.as_deref().ok_or_else(|| Error::Structure {
        tag: tag.to_string(),
        reason: format!("{:?} span has no target url", span.kind),
    })
}

/// Number of leading `#` in a heading block.
pub fn heading_level(block: &str) -> Result<u8> {
    heading_prefix_level(block).ok_or_else(|| Error::MalformedHeading(block.to_string()))
}

/// `"### Heading"` -> `"Heading"`
pub fn strip_heading_prefix(block: &str) -> Result<&str> {
    let level = heading_level(block)?;
    Ok(&block[level as usize + 1..])
}

/// The text of the first line starting with `# `, trimmed.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .split('\n')
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(Error::MissingTitle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown_to_html;
    use pretty_assertions::assert_eq;

    #[test]
    fn paragraphs() {
        let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here

";
        assert_eq!(
            markdown_to_html(md).unwrap(),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn heading_then_paragraph() {
        let md = "\n### Heading level 3\n\nAnd then some paragraph text\n";
        assert_eq!(
            markdown_to_html(md).unwrap(),
            "<div><h3>Heading level 3</h3><p>And then some paragraph text</p></div>"
        );
    }

    #[test]
    fn title_and_bold() {
        let md = "# Title\n\nSome **bold** text";
        assert_eq!(
            markdown_to_html(md).unwrap(),
            "<div><h1>Title</h1><p>Some <b>bold</b> text</p></div>"
        );
        assert_eq!(extract_title(md).unwrap(), "Title");
    }

    #[test]
    fn code_block_is_verbatim() {
        let md = "
```
This is text that _should_ remain
the **same** even with `inline` stuff
```
";
        assert_eq!(
            markdown_to_html(md).unwrap(),
            "<div><pre><code>This is text that _should_ remain\nthe **same** even with `inline` stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn code_block_lines() {
        assert_eq!(
            markdown_to_html("```\nline one\nline two\n```").unwrap(),
            "<div><pre><code>line one\nline two\n</code></pre></div>"
        );
    }

    #[test]
    fn quote_block() {
        assert_eq!(
            markdown_to_html(">a\n> b").unwrap(),
            "<div><blockquote>a b</blockquote></div>"
        );
        assert_eq!(
            markdown_to_html(">This is a block\n> of quoted text").unwrap(),
            "<div><blockquote>This is a block of quoted text</blockquote></div>"
        );
    }

    #[test]
    fn ordered_list() {
        let md = "\n1. **bold**\n2. _italic_\n3. `code`\n";
        assert_eq!(
            markdown_to_html(md).unwrap(),
            "<div><ol><li><b>bold</b></li><li><i>italic</i></li><li><code>code</code></li></ol></div>"
        );
    }

    #[test]
    fn ordered_list_past_nine() {
        let md = (1..=11)
            .map(|n| format!("{n}. item {n}"))
            .collect::<Vec<_>>()
            .join("\n");
        let html = markdown_to_html(&md).unwrap();
        assert!(html.starts_with("<div><ol><li>item 1</li>"));
        assert!(html.ends_with("<li>item 10</li><li>item 11</li></ol></div>"));
    }

    #[test]
    fn unordered_list() {
        assert_eq!(
            markdown_to_html("- **bold**\n- _italic_").unwrap(),
            "<div><ul><li><b>bold</b></li><li><i>italic</i></li></ul></div>"
        );
    }

    #[test]
    fn links_and_images() {
        let md = "See [the docs](https://example.com) and ![a cat](/cat.png)";
        assert_eq!(
            markdown_to_html(md).unwrap(),
            "<div><p>See <a href=\"https://example.com\">the docs</a> and <img src=\"/cat.png\" alt=\"a cat\"></p></div>"
        );
    }

    #[test]
    fn malformed_block_fails_whole_document() {
        let err = markdown_to_html("# Fine\n\nthis **is not closed").unwrap_err();
        assert!(matches!(err, Error::MalformedDelimiter { .. }));
    }

    #[test]
    fn empty_document_is_empty_div() {
        assert_eq!(markdown_to_html("").unwrap(), "<div></div>");
    }

    #[test]
    fn text_to_children_paragraph() {
        let children = text_to_children("this is a **paragraph**").unwrap();
        assert_eq!(children, vec![Node::text("this is a "), Node::leaf("b", "paragraph")]);
    }

    #[test]
    fn heading_helpers() {
        assert_eq!(heading_level("### Size 3 Heading").unwrap(), 3);
        assert_eq!(
            strip_heading_prefix("### This is a level 3 heading").unwrap(),
            "This is a level 3 heading"
        );
        assert!(matches!(
            heading_level("not a heading"),
            Err(Error::MalformedHeading(_))
        ));
    }

    #[test]
    fn out_of_range_heading_kind_is_unsupported() {
        let block = Block {
            text: "# x".to_string(),
            kind: BlockKind::Heading(7),
        };
        assert!(matches!(
            block_to_node(&block),
            Err(Error::UnsupportedBlockKind(_))
        ));
    }

    #[test]
    fn link_without_target_is_structure_error() {
        let span = TextSpan {
            content: "x".to_string(),
            kind: SpanKind::Link,
            target: None,
        };
        assert!(matches!(span_to_node(&span), Err(Error::Structure { .. })));
    }

    #[test]
    fn title_from_anywhere_in_document() {
        let md = "Intro text\n## Not it\n#  Spaced Title  \n# Second";
        assert_eq!(extract_title(md).unwrap(), "Spaced Title");
    }

    #[test]
    fn missing_title() {
        assert!(matches!(
            extract_title("## Only h2\n\n#NoSpace"),
            Err(Error::MissingTitle)
        ));
    }
}
