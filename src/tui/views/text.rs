//! Width-aware text helpers. Widths are terminal columns, not chars.

use unicode_width::UnicodeWidthChar;

/// Cut `text` to `width` columns and pad it with spaces to exactly `width`
///
/// Control characters are dropped.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut fitted = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars().filter(|ch| !ch.is_control()) {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        fitted.push(ch);
        used += ch_width;
    }
    fitted.extend(std::iter::repeat(' ').take(width - used));
    fitted
}

/// Break `text` into lines of at most `width` columns
///
/// Newlines always break. Lines break at spaces where possible; a word
/// wider than `width` is split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for (index, word) in paragraph.split(' ').enumerate() {
            let word_width: usize = word.chars().map(|ch| ch.width().unwrap_or(0)).sum();
            let separator = usize::from(index > 0);

            if line_width + separator + word_width <= width {
                if index > 0 {
                    line.push(' ');
                }
                line.push_str(word);
                line_width += separator + word_width;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if line_width + ch_width > width {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(ch);
                line_width += ch_width;
            }
        }
        lines.push(line);
    }
    lines
}
