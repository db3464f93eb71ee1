//! Text normalization.
//!
//! Converts arbitrary user or corpus text into a stable, comparable
//! form:
//! 1. Curly quotes become a straight `'`
//! 2. ASCII punctuation, Latin-1 symbols and the General Punctuation
//!    block become spaces (Devanagari U+0900..U+097F is never touched)
//! 3. Whitespace runs collapse to one space, ends are trimmed
//! 4. Latin text is lowercased
//!
//! The output is idempotent: `normalize(normalize(s)) == normalize(s)`.

use once_cell::sync::Lazy;
use regex::Regex;

// Regex patterns compiled once at startup
static SMART_QUOTES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{2018}\x{2019}\x{201C}\x{201D}]").unwrap());

// Control chars, ASCII punctuation, Latin-1 symbols, General Punctuation.
// Digits (0x30-0x39) and ASCII letters sit in the gaps between ranges.
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[\x{0000}-\x{002F}\x{003A}-\x{0040}\x{005B}-\x{0060}\x{007B}-\x{00BF}\x{2000}-\x{206F}]",
    )
    .unwrap()
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static DEVANAGARI: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\x{0900}-\x{097F}]").unwrap());

/// Normalize text for token comparison.
///
/// # Examples
///
/// ```
/// use medibot::core::text::normalize;
///
/// assert_eq!(normalize("  What's   FEVER?? "), "what s fever");
/// assert_eq!(normalize("सिर दर्द!"), "सिर दर्द");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let quoted = SMART_QUOTES.replace_all(text, "'");
    let stripped = PUNCTUATION.replace_all(&quoted, " ");
    let collapsed = WHITESPACE.replace_all(&stripped, " ");

    collapsed.trim().to_lowercase()
}

/// Check whether text contains any Devanagari (Hindi script) character
pub fn has_devanagari(text: &str) -> bool {
    DEVANAGARI.is_match(text)
}
