// Display formatters
//
// Shared formatting utilities for prices and fixed-width text in the TUI.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a price with a dollar sign and two decimals
///
/// # Examples
/// ```ignore
/// assert_eq!(format_price(20.0), "$20.00");
/// assert_eq!(format_price(19.995), "$20.00");
/// ```
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Truncate a string to at most `max_width` display columns, appending an
/// ellipsis when anything was cut
///
/// Width-aware rather than byte-aware so CJK and emoji titles don't overflow
/// their card.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Leave one column for the ellipsis
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(20.0), "$20.00");
        assert_eq!(format_price(15.5), "$15.50");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_format_price_rounds() {
        assert_eq!(format_price(19.995), "$20.00");
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_to_width("Tee", 10), "Tee");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Black Hoodie", 8), "Black H…");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is two columns; 5 columns fit two chars + ellipsis
        let out = truncate_to_width("日本語テスト", 5);
        assert_eq!(out, "日本…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("Tee", 0), "");
    }
}
