//! Text normalization and cheap synchronous counters.
//!
//! Everything here is pure and total: any string input produces a result,
//! no error paths. These metrics feed the UI summary directly and run on
//! every keystroke, so they must stay allocation-light.

mod counters;
mod normalize;

pub use counters::{
    count_bytes_utf8, count_characters, count_code_points, count_graphemes, count_lines,
    count_words, count_words_basic,
};
pub use normalize::{normalize_text, NormalizeOptions};

use serde::Serialize;

/// One-shot bundle of every counter, for UI-facing summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    /// UTF-16 code units (what a text field reports as "length").
    pub characters: usize,
    /// User-perceived characters (extended grapheme clusters).
    pub graphemes: usize,
    pub words: usize,
    pub lines: usize,
    pub bytes_utf8: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            characters: count_characters(text),
            graphemes: count_graphemes(text),
            words: count_words(text),
            lines: count_lines(text),
            bytes_utf8: count_bytes_utf8(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_of_empty_text_are_all_zero() {
        let stats = TextStats::of("");
        assert_eq!(stats.characters, 0);
        assert_eq!(stats.graphemes, 0);
        assert_eq!(stats.words, 0);
        assert_eq!(stats.lines, 0);
        assert_eq!(stats.bytes_utf8, 0);
    }

    #[test]
    fn stats_bundle_matches_individual_counters() {
        let text = "Hello world\nsecond line";
        let stats = TextStats::of(text);
        assert_eq!(stats.characters, count_characters(text));
        assert_eq!(stats.words, 4);
        assert_eq!(stats.lines, 2);
    }
}
