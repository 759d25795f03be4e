//! Property tests for the markdown pipeline.

use proptest::prelude::*;
use sitegen::{BlockKind, Error, classify, extract_title, segment, text_to_spans};

/// Plain words with no markdown syntax in them
fn plain() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.]{0,12}"
}

proptest! {
    #[test]
    fn balanced_delimiters_keep_content(parts in prop::collection::vec(plain(), 1..8)) {
        // Alternate plain and emphasised pieces: "a **b** c _d_ e `f` ..."
        let delimiters = ["**", "_", "`"];
        let mut text = String::new();
        let mut expected = String::new();
        for (i, part) in parts.iter().enumerate() {
            if i % 2 == 1 {
                let d = delimiters[i / 2 % delimiters.len()];
                text.push_str(&format!("{d}{part}{d}"));
            } else {
                text.push_str(part);
            }
            expected.push_str(part);
        }

        let spans = text_to_spans(&text).unwrap();
        let joined: String = spans.iter().map(|s| s.content.as_str()).collect();
        prop_assert_eq!(joined, expected);
        prop_assert!(spans.iter().all(|s| !s.content.is_empty()));
    }

    #[test]
    fn odd_delimiter_count_fails(
        parts in prop::collection::vec(plain(), 2..6),
        which in 0usize..3,
    ) {
        let delimiter = ["**", "_", "`"][which];
        // n parts joined by n - 1 delimiters; force an odd count
        let mut parts = parts;
        if parts.len() % 2 == 1 {
            parts.pop();
        }
        let text = parts.join(delimiter);
        let result = text_to_spans(&text);
        prop_assert!(
            matches!(result, Err(Error::MalformedDelimiter { .. })),
            "expected delimiter error, got {:?}",
            result
        );
    }

    #[test]
    fn segment_is_idempotent(doc in "[a-z# >\\-\n]{0,80}") {
        let once = segment(&doc);
        let twice = segment(&once.join("\n\n"));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn title_round_trip(title in "[A-Za-z][A-Za-z0-9 ]{0,20}[A-Za-z0-9]", body in "[a-z ]{0,40}") {
        let doc = format!("{body}\n\n#   {title}  \n\n{body}");
        prop_assert_eq!(extract_title(&doc).unwrap(), title);
    }

    #[test]
    fn skipped_numbering_is_not_a_list(n in 3usize..9) {
        let block = (1..=n)
            .filter(|&i| i != 2)
            .map(|i| format!("{i}. item"))
            .collect::<Vec<_>>()
            .join("\n");
        prop_assert_eq!(classify(&block), BlockKind::Paragraph);
    }
}
