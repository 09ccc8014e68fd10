use std::fmt;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A render line that tracks its visible width separately from the escape
/// sequences embedded in the buffer. All padding math runs on the visible
/// width, which matters for double-width CJK labels.
pub struct Line {
    buf: String,
    width: usize,
}

impl Line {
    pub fn new() -> Line {
        Line {
            buf: String::new(),
            width: 0,
        }
    }

    pub fn push(&mut self, text: &str) {
        self.buf.push_str(text);
        self.width += UnicodeWidthStr::width(text);
    }

    pub fn push_styled<S: fmt::Display>(&mut self, text: &str, style: S) {
        self.buf
            .push_str(&format!("{}{}{}", style, text, termion::style::Reset));
        self.width += UnicodeWidthStr::width(text);
    }

    pub fn pad_to(&mut self, width: usize) {
        if self.width < width {
            let missing = width - self.width;
            self.buf.push_str(&" ".repeat(missing));
            self.width = width;
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl Default for Line {
    fn default() -> Line {
        Line::new()
    }
}

/// Centers `text` in a field of `width` visible columns.
pub fn pad_center(text: &str, width: usize) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width >= width {
        return text.to_owned();
    }

    let left = (width - text_width) / 2;
    let right = width - text_width - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Splits `text` into chunks of at most `width` visible columns, breaking
/// between characters. CJK text has no useful word boundaries to prefer.
pub fn wrap_visible(text: &str, width: usize) -> Vec<String> {
    let width = width.max(2);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > width && !current.is_empty() {
            chunks.push(current);
            current = String::new();
            current_width = 0;
        }
        current.push(ch);
        current_width += ch_width;
    }

    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_tracks_visible_width_not_byte_length() {
        let mut line = Line::new();
        line.push("春节"); // two double-width characters
        assert_eq!(line.width(), 4);

        line.push_styled("12", termion::style::Bold);
        assert_eq!(line.width(), 6);

        line.pad_to(10);
        assert_eq!(line.width(), 10);
    }

    #[test]
    fn pad_center_balances_cjk_labels() {
        assert_eq!(pad_center("一月", 8), "  一月  ");
        assert_eq!(pad_center("abc", 6), " abc  ");
        // already wide enough, left untouched
        assert_eq!(pad_center("十一月长", 4), "十一月长");
    }

    #[test]
    fn wrap_respects_double_width_characters() {
        let chunks = wrap_visible("保持专注每天努力", 6);
        assert_eq!(chunks, vec!["保持专", "注每天", "努力"]);

        assert_eq!(wrap_visible("", 10), vec![""]);
        assert_eq!(wrap_visible("short", 10), vec!["short"]);
    }
}
