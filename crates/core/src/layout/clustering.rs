//! Baseline clustering.
//!
//! The fragment source reports one exact `y` per printed line, so rows are
//! formed by exact baseline equality rather than by a tolerance band.

use std::collections::BTreeMap;

use crate::fragment::TextFragment;

use super::keys::{KeyF64, key_f64};

/// Fragments sharing one baseline, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<'a> {
    pub y: f64,
    pub fragments: Vec<&'a TextFragment>,
}

impl<'a> Row<'a> {
    /// Fragments of the row sorted left to right.
    pub fn left_to_right(&self) -> Vec<&'a TextFragment> {
        let mut sorted = self.fragments.clone();
        sorted.sort_by(|a, b| a.start_x.total_cmp(&b.start_x));
        sorted
    }

    /// Non-blank fragment following the first one equal (case-insensitively,
    /// trimmed) to `label`, reading left to right.
    pub fn value_after(&self, label: &str) -> Option<&'a TextFragment> {
        let ordered: Vec<&'a TextFragment> = self
            .left_to_right()
            .into_iter()
            .filter(|f| !f.is_blank())
            .collect();
        let idx = ordered
            .iter()
            .position(|f| f.text.trim().to_lowercase() == label)?;
        ordered.get(idx + 1).copied()
    }
}

/// Group fragments into rows keyed by baseline, top to bottom.
///
/// Every input fragment lands in exactly one row and no two rows share a `y`.
pub fn group_rows(fragments: &[TextFragment]) -> Vec<Row<'_>> {
    let mut rows: BTreeMap<KeyF64, Vec<&TextFragment>> = BTreeMap::new();
    for fragment in fragments {
        rows.entry(key_f64(fragment.y)).or_default().push(fragment);
    }
    rows.into_iter()
        .map(|(y, fragments)| Row {
            y: y.into_inner(),
            fragments,
        })
        .collect()
}

/// One row of several parallel columns, with a cell per column.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedRow<'a> {
    pub y: f64,
    pub cells: Vec<Option<&'a TextFragment>>,
}

impl AlignedRow<'_> {
    /// Trimmed text of the cell at `column`, if any.
    pub fn text(&self, column: usize) -> Option<String> {
        self.cells
            .get(column)
            .copied()
            .flatten()
            .map(|f| f.text.trim().to_string())
    }
}

/// Merge parallel columns by shared baseline.
///
/// Rows are the union of every `y` seen in any column, top to bottom, so a
/// row populated in only some columns still yields a record with the other
/// cells empty. Each cell takes the first fragment of its column at that `y`.
pub fn align_rows<'a>(columns: &[Vec<&'a TextFragment>]) -> Vec<AlignedRow<'a>> {
    let mut rows: BTreeMap<KeyF64, Vec<Option<&'a TextFragment>>> = BTreeMap::new();
    for (idx, column) in columns.iter().enumerate() {
        for fragment in column {
            let cells = rows
                .entry(key_f64(fragment.y))
                .or_insert_with(|| vec![None; columns.len()]);
            if cells[idx].is_none() {
                cells[idx] = Some(*fragment);
            }
        }
    }
    rows.into_iter()
        .map(|(y, cells)| AlignedRow {
            y: y.into_inner(),
            cells,
        })
        .collect()
}
