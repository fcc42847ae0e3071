// Output formatting: terminal display, CSV export and the export cache.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub mod cache;
pub mod csv;
pub mod terminal;

/// Terminal columns a string occupies. Hangul and other wide scripts take two.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Truncate a string to at most `max_cols` terminal columns, "..." included.
///
/// Works on whole chars, so it never splits a multi-byte character the way
/// byte slicing (`&text[..30]`) can.
pub fn truncate_width(text: &str, max_cols: usize) -> String {
    if display_width(text) <= max_cols {
        return text.to_string();
    }
    let budget = max_cols.saturating_sub(3);
    let mut used = 0;
    let mut truncated = String::new();
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        truncated.push(ch);
    }
    format!("{truncated}...")
}

/// Left-align a string in a field `cols` terminal columns wide.
///
/// `format!("{:<n}")` pads by char count, which misaligns wide characters.
pub fn pad_to_width(text: &str, cols: usize) -> String {
    let pad = cols.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(pad))
}

/// Format a score the way it is shown and exported: two decimals.
pub fn format_score(score: f64) -> String {
    format!("{score:.2}")
}
