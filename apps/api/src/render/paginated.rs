//! Paginated layout — fixed-width lines at fixed vertical positions on pages
//! of fixed dimensions.
//!
//! Greedy word-wrap fills each output line up to the column width; wrapped
//! lines are packed onto pages top to bottom. An output line is never split,
//! line order is always preserved, and a new page starts exactly when the
//! current one's line capacity is exhausted. The output embeds nothing
//! besides the content (no timestamps, no page numbers), so identical input
//! always yields byte-identical output.

use serde::{Deserialize, Serialize};

/// Fixed page dimensions in character cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width_cols: usize,
    pub height_lines: usize,
}

/// Default geometry: 72 columns × 56 lines, roughly US letter at a
/// monospaced 12pt with 1" margins.
pub fn default_page_geometry() -> PageGeometry {
    PageGeometry {
        width_cols: 72,
        height_lines: 56,
    }
}

/// Separator between pages in the rendered byte stream (form feed).
pub const PAGE_BREAK: char = '\x0c';

/// Greedy word-wrap of a single flattened line into output lines of at most
/// `width` columns. Empty input yields one empty output line (vertical
/// positions are fixed, so blank content still occupies its slot). Words
/// longer than a full line are hard-split rather than overflowing.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return vec![String::new()];
    }

    let mut wrapped: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_cols = 0usize;

    for word in words {
        for piece in split_oversized(word, width) {
            let piece_cols = piece.chars().count();
            let needed = if current_cols == 0 {
                piece_cols
            } else {
                current_cols + 1 + piece_cols
            };

            if current_cols > 0 && needed > width {
                wrapped.push(std::mem::take(&mut current));
                current_cols = 0;
            }
            if current_cols > 0 {
                current.push(' ');
                current_cols += 1;
            }
            current.push_str(&piece);
            current_cols += piece_cols;
        }
    }
    wrapped.push(current);
    wrapped
}

/// Splits a word into pieces of at most `width` characters.
fn split_oversized(word: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= width {
        return vec![word.to_string()];
    }
    chars.chunks(width).map(|c| c.iter().collect()).collect()
}

/// Lays the flattened lines out as pages and returns the output bytes.
///
/// Each page holds exactly `height_lines` newline-terminated lines (padded
/// with empty lines at the end of the final page); pages are separated by a
/// form feed.
pub fn render_paginated(lines: &[String], geometry: &PageGeometry) -> Vec<u8> {
    let wrapped: Vec<String> = lines
        .iter()
        .flat_map(|line| wrap_line(line, geometry.width_cols))
        .collect();

    let mut output = String::new();
    for (page_index, page) in wrapped.chunks(geometry.height_lines).enumerate() {
        if page_index > 0 {
            output.push(PAGE_BREAK);
        }
        for line in page {
            output.push_str(line);
            output.push('\n');
        }
        // Pad the page to its full height: lines sit at fixed vertical positions.
        for _ in page.len()..geometry.height_lines {
            output.push('\n');
        }
    }

    output.into_bytes()
}
