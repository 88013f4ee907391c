//! Text normalization and statistics

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub word_count: usize,
    pub character_count: usize,
    pub line_count: usize,
}

/// Normalize typographic characters that PDF extraction tends to produce.
/// Line structure is preserved; the extractors depend on it.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            '\u{2026}' => '.',
            '\u{00A0}' => ' ',
            _ => c,
        })
        .collect()
}

pub fn stats(text: &str) -> TextStats {
    TextStats {
        word_count: text.unicode_words().count(),
        character_count: text.chars().count(),
        line_count: text.lines().count(),
    }
}
