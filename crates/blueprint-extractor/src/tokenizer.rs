//! Word-like token extraction across Latin and Japanese scripts

use regex::Regex;
use std::sync::LazyLock;

// ASCII letters and digits, CJK ideographs U+4E00..U+9FA5, hiragana
// U+3041..U+3093, katakana U+30A1..U+30F3. The prolonged sound mark and
// full-width Latin fall outside the class and act as separators.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9\x{4E00}-\x{9FA5}\x{3041}-\x{3093}\x{30A1}-\x{30F3}]+").unwrap()
});

/// Extract maximal word-like runs in left-to-right order
///
/// Punctuation and whitespace are discarded entirely.
///
/// # Examples
///
/// ```
/// use blueprint_extractor::tokenize;
///
/// assert_eq!(tokenize("Rain fell, because 雨が降った!"), ["Rain", "fell", "because", "雨が降った"]);
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN.find_iter(text).map(|m| m.as_str()).collect()
}
