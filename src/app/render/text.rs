//! Text wrapping measured in terminal cells

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` into lines no wider than `max_width` cells
///
/// Breaks at spaces where possible and splits words that are wider than a
/// whole line. Existing newlines are kept, so blank lines survive.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
            let word_width = word.width();
            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };

            if needed <= max_width {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(word);
                current_width += word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= max_width {
                current.push_str(word);
                current_width = word_width;
            } else {
                for piece in split_by_width(word, max_width) {
                    if !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                    }
                    current_width = piece.width();
                    current = piece;
                }
            }
        }

        lines.push(current);
    }

    lines
}

/// Split one word into chunks of at most `max_width` cells
fn split_by_width(word: &str, max_width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut width = 0;

    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            width = 0;
        }
        piece.push(ch);
        width += ch_width;
    }

    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod text_tests;
