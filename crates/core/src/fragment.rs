//! Positioned text fragments, the input of every extractor.

use serde::{Deserialize, Serialize};

/// One piece of text as delivered by the fragment source.
///
/// `y` already carries the page offset, so sorting by `(y, start_x)` orders
/// fragments across the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFragment {
    pub page: u32,
    pub text: String,
    pub start_x: f64,
    pub end_x: f64,
    pub avg_x: f64,
    pub y: f64,
    pub height: f64,
}

impl TextFragment {
    pub fn new(
        page: u32,
        text: impl Into<String>,
        start_x: f64,
        end_x: f64,
        y: f64,
        height: f64,
    ) -> Self {
        Self {
            page,
            text: text.into(),
            start_x,
            end_x,
            avg_x: (start_x + end_x) / 2.0,
            y,
            height,
        }
    }

    /// Lowercased text, the form every keyword match is made against.
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lower().contains(needle)
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Whitespace separated token count.
    pub fn token_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Find the first fragment whose lowercased text contains `needle`.
pub fn find_containing<'a>(fragments: &'a [TextFragment], needle: &str) -> Option<&'a TextFragment> {
    fragments.iter().find(|f| f.contains(needle))
}

/// Find the first non-blank fragment on the same row as `label`, right of it.
pub fn right_of<'a>(fragments: &'a [TextFragment], label: &TextFragment) -> Option<&'a TextFragment> {
    fragments
        .iter()
        .find(|f| f.y == label.y && f.start_x > label.end_x && !f.is_blank())
}
