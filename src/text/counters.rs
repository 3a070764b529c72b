use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Word-like runs: letters/numbers (with combining marks) optionally joined
/// by apostrophes or hyphens. The simpler alternate to full word
/// segmentation; see [`count_words_basic`].
static WORD_LIKE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}][\p{L}\p{N}\p{M}]*(?:['’\-][\p{L}\p{N}\p{M}]+)*")
        .expect("word pattern is valid")
});

/// UTF-16 code unit count. Distinct from the grapheme count: "🦀" is one
/// grapheme but two code units.
pub fn count_characters(text: &str) -> usize {
    text.encode_utf16().count()
}

/// User-perceived characters: extended grapheme clusters.
pub fn count_graphemes(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Unicode code point count. Approximates the grapheme count when
/// segmentation is not wanted; under-counts nothing but merges nothing
/// either, so multi-code-point graphemes (emoji with modifiers, flags)
/// count as several.
pub fn count_code_points(text: &str) -> usize {
    text.chars().count()
}

/// Word count via Unicode word segmentation.
pub fn count_words(text: &str) -> usize {
    text.unicode_words().count()
}

/// Regex-based word count: letter/number runs joined by apostrophes or
/// hyphens. Alternate strategy for callers that want hyphenated compounds
/// counted as single words.
pub fn count_words_basic(text: &str) -> usize {
    WORD_LIKE.find_iter(text).count()
}

/// 0 for empty text, else 1 plus one per embedded LF.
pub fn count_lines(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        1 + text.bytes().filter(|&b| b == b'\n').count()
    }
}

/// Byte length of the UTF-8 encoding.
pub fn count_bytes_utf8(text: &str) -> usize {
    text.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_count_utf16_units() {
        assert_eq!(count_characters("abc"), 3);
        assert_eq!(count_characters("€"), 1);
        // Surrogate pair in UTF-16.
        assert_eq!(count_characters("🦀"), 2);
    }

    #[test]
    fn characters_and_utf8_bytes_diverge_for_non_ascii() {
        assert_eq!(count_bytes_utf8("€"), 3);
        assert_ne!(count_characters("€"), count_bytes_utf8("€"));
        assert_eq!(count_bytes_utf8("abc"), 3);
    }

    #[test]
    fn graphemes_merge_combining_sequences() {
        // e + combining acute accent: two code points, one grapheme.
        let text = "e\u{0301}";
        assert_eq!(count_graphemes(text), 1);
        assert_eq!(count_code_points(text), 2);
        // Emoji with skin-tone modifier is a single grapheme.
        assert_eq!(count_graphemes("👍🏽"), 1);
    }

    #[test]
    fn words_handle_punctuation_and_contractions() {
        assert_eq!(count_words("Hello, world!"), 2);
        assert_eq!(count_words("don't stop"), 2);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \n\t  "), 0);
    }

    #[test]
    fn basic_word_strategy_joins_hyphenated_compounds() {
        assert_eq!(count_words_basic("state-of-the-art design"), 2);
        assert_eq!(count_words_basic("don't"), 1);
        assert_eq!(count_words_basic("!!!"), 0);
    }

    #[test]
    fn line_count_rules() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("one"), 1);
        assert_eq!(count_lines("one\ntwo"), 2);
        assert_eq!(count_lines("trailing\n"), 2);
    }
}
