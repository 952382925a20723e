//! Text Utilities
//!
//! All width calculations use unicode display width, not byte length.

use std::borrow::Cow;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Get display width of a string (handles unicode properly)
#[inline]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut a string at `max_width` display columns, no ellipsis.
///
/// Log lines are clipped this way, like a `nowrap` console.
pub fn clip_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    let mut width = 0;
    let clipped: String = s
        .chars()
        .take_while(|c| {
            let char_width = UnicodeWidthChar::width(*c).unwrap_or(0);
            if width + char_width <= max_width {
                width += char_width;
                true
            } else {
                false
            }
        })
        .collect();

    Cow::Owned(clipped)
}

/// Truncate a string to fit within max display width, adding ellipsis if needed.
///
/// Returns `Cow::Borrowed` if no truncation needed (zero allocation).
pub fn truncate_ellipsis(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    // Need at least 4 chars for "X..." pattern
    if max_width < 4 {
        return clip_to_width(s, max_width);
    }

    Cow::Owned(format!("{}...", clip_to_width(s, max_width - 3)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_short_is_borrowed() {
        assert!(matches!(clip_to_width("hello", 10), Cow::Borrowed("hello")));
    }

    #[test]
    fn test_clip_long() {
        assert_eq!(clip_to_width("176354.0300000 > MEM_SYNC", 16), "176354.0300000 >");
    }

    #[test]
    fn test_clip_wide_chars() {
        // Each CJK char is two columns wide
        assert_eq!(clip_to_width("日本語", 5), "日本");
    }

    #[test]
    fn test_truncate_ellipsis() {
        assert_eq!(truncate_ellipsis("Syncing order book", 10), "Syncing...");
        assert_eq!(truncate_ellipsis("Syncing", 10), "Syncing");
        assert_eq!(truncate_ellipsis("Syncing", 3), "Syn");
    }
}
