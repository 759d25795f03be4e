//! Block segmentation and classification.

use log::debug;

use crate::block::{Block, BlockKind};

/// Split a document into blocks and classify each one.
pub fn parse(markdown: &str) -> Vec<Block> {
    segment(markdown)
        .into_iter()
        .map(|text| {
            let kind = classify(&text);
            debug!("classified block as {kind:?}: {:?}", first_line(&text));
            Block { text, kind }
        })
        .collect()
}

/// Split a document on blank lines, trimming each block and dropping empties.
pub fn segment(markdown: &str) -> Vec<String> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classify a single (already trimmed) block. First matching rule wins.
pub fn classify(block: &str) -> BlockKind {
    if let Some(level) = heading_prefix_level(block) {
        return BlockKind::Heading(level);
    }

    let lines: Vec<&str> = block.split('\n').collect();
    let first = lines[0];

    if lines.len() > 1 && first.starts_with("```") && lines[lines.len() - 1].starts_with("```") {
        return BlockKind::Code;
    }

    if first.starts_with('>') {
        if lines.iter().all(|line| line.starts_with('>')) {
            return BlockKind::Quote;
        }
        debug!("quote block has lines without '>', treating as paragraph");
        return BlockKind::Paragraph;
    }

    if first.starts_with("- ") {
        if lines.iter().all(|line| line.starts_with("- ")) {
            return BlockKind::UnorderedList;
        }
        debug!("list block has lines without '- ', treating as paragraph");
        return BlockKind::Paragraph;
    }

    if first.starts_with("1. ") {
        if lines.iter().enumerate().all(|(i, line)| line.starts_with(&ordered_prefix(i))) {
            return BlockKind::OrderedList;
        }
        debug!("ordered list numbering is not sequential, treating as paragraph");
        return BlockKind::Paragraph;
    }

    BlockKind::Paragraph
}

/// Level of a `#`..`######` prefix followed by a space, if `text` has one.
pub(crate) fn heading_prefix_level(text: &str) -> Option<u8> {
    let hashes = text.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && text[hashes..].starts_with(' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

/// `"1. "` for the first item, `"2. "` for the second, and so on.
pub(crate) fn ordered_prefix(index: usize) -> String {
    format!("{}. ", index + 1)
}

fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or_default()
}
