//! Sentence segmentation for mixed-script text

/// Characters that end a sentence (full-width and half-width)
pub const SENTENCE_DELIMITERS: [char; 4] = ['。', '.', '!', '?'];

/// Split raw text into trimmed, non-empty sentences
///
/// Purely delimiter-based: no language detection and no abbreviation
/// handling. Empty segments between consecutive delimiters are dropped.
///
/// # Examples
///
/// ```
/// use blueprint_extractor::split_sentences;
///
/// let sentences = split_sentences("雨が降った。Rain fell!! Why?");
/// assert_eq!(sentences, ["雨が降った", "Rain fell", "Why"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_DELIMITERS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("  ...  !? 。").is_empty());
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(split_sentences("  First one.   Second one  "), ["First one", "Second one"]);
    }

    #[test]
    fn test_decimal_point_splits() {
        // Delimiter-only segmentation does not special-case numbers
        assert_eq!(split_sentences("Pi is 3.14"), ["Pi is 3", "14"]);
    }

    #[test]
    fn test_full_width_delimiter() {
        assert_eq!(split_sentences("今日は晴れ。明日は雨"), ["今日は晴れ", "明日は雨"]);
    }

    #[test]
    fn test_multiline_sentence_kept_together() {
        assert_eq!(split_sentences("line one\nline two."), ["line one\nline two"]);
    }
}
