/// Inline formatting carried by a [`TextSpan`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Normal,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A run of inline text with a single kind.
///
/// `target` holds the URL and is only ever set for links and images; use the
/// constructors rather than building the struct by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub content: String,
    pub kind: SpanKind,
    pub target: Option<String>,
}

impl TextSpan {
    /// A span of `kind` with no target. Link and image spans go through
    /// [`TextSpan::link`] and [`TextSpan::image`].
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        debug_assert!(!matches!(kind, SpanKind::Link | SpanKind::Image));
        Self {
            content: content.into(),
            kind,
            target: None,
        }
    }

    pub fn normal(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Normal)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: text.into(),
            kind: SpanKind::Link,
            target: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: alt.into(),
            kind: SpanKind::Image,
            target: Some(url.into()),
        }
    }

    pub fn is_normal(&self) -> bool {
        self.kind == SpanKind::Normal
    }
}

/// Block-level classification of a chunk of markdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    /// Heading level, 1 through 6
    Heading(u8),
    Code,
    Quote,
    OrderedList,
    UnorderedList,
}

/// A blank-line separated chunk of the document together with its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub text: String,
    pub kind: BlockKind,
}
