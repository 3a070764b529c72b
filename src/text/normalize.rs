use once_cell::sync::Lazy;
use regex::Regex;

/// Invisible and zero-width code points stripped by
/// [`NormalizeOptions::remove_invisible`]: soft hyphen, combining grapheme
/// joiner, Mongolian vowel separator, zero-width space/non-joiner/joiner,
/// word joiner, BOM / zero-width no-break space.
static INVISIBLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("[\u{00AD}\u{034F}\u{180E}\u{200B}\u{200C}\u{200D}\u{2060}\u{FEFF}]")
        .expect("invisible-chars pattern is valid")
});

/// Runs of horizontal whitespace. Newlines are deliberately excluded so
/// line structure survives normalization.
static SPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new("[ \t]+").expect("space-run pattern is valid"));

#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    /// Strip invisible/zero-width code points that paste in from rich text.
    pub remove_invisible: bool,
}

/// Canonicalize line endings and whitespace.
///
/// CRLF and lone CR become LF, runs of space/tab collapse to one space,
/// and the result is trimmed. Pure and total.
pub fn normalize_text(text: &str, options: &NormalizeOptions) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let cleaned = if options.remove_invisible {
        INVISIBLE.replace_all(&unified, "")
    } else {
        std::borrow::Cow::Borrowed(unified.as_str())
    };
    SPACE_RUNS.replace_all(&cleaned, " ").trim().to_string()
}
