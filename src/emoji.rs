//! Emoji-only content detection.

use once_cell::sync::Lazy;
use regex::Regex;

static EMOJI_ONLY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{Emoji}\s]+$").expect("emoji pattern is valid")
});

/// Check whether a message consists solely of emoji (and internal whitespace).
///
/// Surrounding whitespace is ignored. Classification follows the Unicode
/// `Emoji` property, so ASCII digits, `#` and `*` count as emoji while
/// joiners and variation selectors do not.
///
/// ```ignore
/// is_emoji_only("😀") == true
/// is_emoji_only(" 😀 😀 ") == true
/// is_emoji_only("😀 hello") == false
/// is_emoji_only("   ") == false
/// ```
pub fn is_emoji_only(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && EMOJI_ONLY_RE.is_match(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emoji_only_basic() {
        assert!(is_emoji_only("😀"));
        assert!(is_emoji_only("😀😀😀"));
        assert!(is_emoji_only("👍 🎉"));
        assert!(is_emoji_only("  🙂\n"));
    }

    #[test]
    fn test_mixed_content_is_not_emoji_only() {
        assert!(!is_emoji_only("😀 hello"));
        assert!(!is_emoji_only("thanks 👍"));
        assert!(!is_emoji_only("hello"));
    }

    #[test]
    fn test_blank_content_is_not_emoji_only() {
        assert!(!is_emoji_only(""));
        assert!(!is_emoji_only("   "));
        assert!(!is_emoji_only("\t\n"));
    }

    #[test]
    fn test_unicode_property_edges() {
        // Digits carry the Emoji property
        assert!(is_emoji_only("123"));
        // Zero-width joiner is not in the Emoji category
        assert!(!is_emoji_only("👩\u{200D}💻"));
    }
}
