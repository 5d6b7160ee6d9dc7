//! Text formatting logic
//!
//! Pure functions for the clipboard payload, export filenames, and wrapping
//! of mixed CJK/Latin text into terminal columns.

use unicode_width::UnicodeWidthChar;

use crate::quotes::Quote;

/// Separator between quotation text and source in copied text
pub const CLIPBOARD_SEPARATOR: &str = " —— ";

/// Filename used when the share pick has no usable identifier
pub const FALLBACK_EXPORT_NAME: &str = "mao-quote-share.png";

/// Format a quotation for the clipboard: text, separator, then source
///
/// # Examples
/// ```
/// use quotui::logic::format::clipboard_text;
/// use quotui::quotes::{Category, Quote};
///
/// let q = Quote { id: 1, text: "A".into(), source: "S1".into(), category: Category::Work, year: None };
/// assert_eq!(clipboard_text(&q), "A —— S1");
/// ```
pub fn clipboard_text(quote: &Quote) -> String {
    format!("{}{}{}", quote.text, CLIPBOARD_SEPARATOR, quote.source)
}

/// Build the PNG filename for an exported share card
///
/// Falls back to `mao-quote-share.png` when there is no share pick, and also
/// when the id is `0`, which is treated as "no identifier".
///
/// # Examples
/// ```
/// use quotui::logic::format::export_filename;
///
/// assert_eq!(export_filename(Some(2)), "mao-quote-2.png");
/// assert_eq!(export_filename(Some(0)), "mao-quote-share.png");
/// assert_eq!(export_filename(None), "mao-quote-share.png");
/// ```
pub fn export_filename(id: Option<u32>) -> String {
    match id {
        Some(id) if id != 0 => format!("mao-quote-{}.png", id),
        _ => FALLBACK_EXPORT_NAME.to_string(),
    }
}

/// Wrap text into lines no wider than `width` terminal columns
///
/// Breaks between any two characters, which suits CJK text; for Latin runs it
/// prefers the last space on the line when there is one. Explicit newlines
/// are kept. A zero width yields no lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for ch in paragraph.chars() {
            let ch_width = ch.width().unwrap_or(0);

            if line_width + ch_width > width && !line.is_empty() {
                // Prefer breaking at the last space in a Latin run
                match line.rfind(' ') {
                    Some(pos) if pos > 0 && ch != ' ' => {
                        let rest = line[pos + 1..].to_string();
                        line.truncate(pos);
                        lines.push(std::mem::take(&mut line));
                        line_width = display_width(&rest);
                        line = rest;
                    }
                    _ => {
                        lines.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                }

                if ch == ' ' && line.is_empty() {
                    continue;
                }
            }

            line.push(ch);
            line_width += ch_width;
        }

        lines.push(line);
    }

    lines
}

/// Display width of a string in terminal columns
pub fn display_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}
