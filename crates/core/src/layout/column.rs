//! Header-anchored column extraction.

use crate::fragment::TextFragment;

/// Tuning for one column lookup at one extraction site.
///
/// The values are matched against known document templates. Each site keeps
/// its own constants; there is no tolerance that suits every layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpec {
    /// Lowercase keyword contained in the header fragment.
    pub header: &'static str,
    /// Cells with more whitespace separated tokens than this are not values.
    pub max_tokens: usize,
    /// Maximum distance between a cell center and the header center.
    pub tolerance_x: f64,
}

impl ColumnSpec {
    pub const fn new(header: &'static str, max_tokens: usize, tolerance_x: f64) -> Self {
        Self {
            header,
            max_tokens,
            tolerance_x,
        }
    }

    pub fn extract<'a>(&self, fragments: &'a [TextFragment]) -> Vec<&'a TextFragment> {
        extract_column(fragments, self.header, self.max_tokens, self.tolerance_x)
    }
}

/// Strict distance check between two horizontal centers.
pub fn is_within_delta(a: f64, b: f64, delta: f64) -> bool {
    (a - b).abs() < delta
}

/// Collect the column under the first fragment containing `header`.
///
/// Cells are the non-blank fragments strictly below the header whose center
/// lies closer than `tolerance_x` to the header center and that have at most
/// `max_tokens` tokens. Returns an empty list when no header is printed.
pub fn extract_column<'a>(
    fragments: &'a [TextFragment],
    header: &str,
    max_tokens: usize,
    tolerance_x: f64,
) -> Vec<&'a TextFragment> {
    let Some(head) = fragments.iter().find(|f| f.contains(header)) else {
        return Vec::new();
    };

    let mut cells: Vec<&TextFragment> = fragments
        .iter()
        .filter(|f| {
            f.y > head.y
                && is_within_delta(f.avg_x, head.avg_x, tolerance_x)
                && !f.is_blank()
                && f.token_count() <= max_tokens
        })
        .collect();
    cells.sort_by(|a, b| a.y.total_cmp(&b.y));
    cells
}
