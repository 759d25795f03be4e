mod block;
mod config;
mod error;
mod html;
mod inline;
mod node;
mod parser;
pub mod site;

pub use block::{Block, BlockKind, SpanKind, TextSpan};
pub use config::{Config, PathsConfig};
pub use error::{Error, Result};
pub use html::{
    block_to_node, extract_title, heading_level, markdown_to_node, span_to_node,
    strip_heading_prefix, text_to_children,
};
pub use inline::{
    extract_images, extract_links, split_delimiter, split_images, split_links, text_to_spans,
};
pub use node::Node;
pub use parser::{classify, parse, segment};

/// Convert markdown to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    markdown_to_node(markdown)?.render()
}
