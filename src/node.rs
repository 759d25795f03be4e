//! HTML output tree.

use crate::error::{Error, Result};

/// An element of the HTML output tree.
///
/// A node is one of:
/// - text: no tag, `content` set
/// - leaf element: tag and `content`
/// - container element: tag and `children`
/// - void element: tag and attributes only (e.g. `img`)
///
/// Constructing anything else is possible, but [`Node::render`] rejects it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    pub tag: Option<String>,
    pub content: Option<String>,
    pub children: Option<Vec<Node>>,
    /// Rendered in insertion order
    pub attributes: Vec<(String, String)>,
}

impl Node {
    /// Raw text with no wrapping element
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn leaf(tag: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            tag: Some(tag.into()),
            children: Some(children),
            ..Self::default()
        }
    }

    pub fn void(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Serialize this node and its descendants to HTML.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<()> {
        let Some(tag) = self.tag.as_deref() else {
            return match (&self.content, &self.children) {
                (Some(content), None) => {
                    out.push_str(content);
                    Ok(())
                }
                _ => Err(self.malformed("untagged node must carry text content only")),
            };
        };

        match (&self.content, &self.children) {
            (Some(_), Some(_)) => Err(self.malformed("node has both content and children")),
            (Some(content), None) => {
                self.open_tag(tag, out);
                out.push_str(content);
                close_tag(tag, out);
                Ok(())
            }
            (None, Some(children)) => {
                self.open_tag(tag, out);
                for child in children {
                    child.render_into(out)?;
                }
                close_tag(tag, out);
                Ok(())
            }
            (None, None) if is_void_tag(tag) => {
                self.open_tag(tag, out);
                Ok(())
            }
            (None, None) => Err(self.malformed("element has neither content nor children")),
        }
    }

    /// Attributes as ` name="value"` pairs, or an empty string.
    pub fn attrs_to_html(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out
    }

    fn open_tag(&self, tag: &str, out: &mut String) {
        out.push('<');
        out.push_str(tag);
        out.push_str(&self.attrs_to_html());
        out.push('>');
    }

    fn malformed(&self, reason: &str) -> Error {
        Error::Structure {
            tag: self.tag.clone().unwrap_or_default(),
            reason: reason.to_string(),
        }
    }
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Elements that never have content or a closing tag
fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input" | "link" | "meta"
            | "source" | "track" | "wbr"
    )
}
