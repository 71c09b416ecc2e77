//! Row and column reconstruction from positioned fragments.
//!
//! Fragments carry no table structure of their own. Rows are recovered from
//! shared baselines and columns from a header fragment plus a horizontal
//! tolerance band around its center.

mod clustering;
mod column;
mod keys;

pub use clustering::{AlignedRow, Row, align_rows, group_rows};
pub use column::{ColumnSpec, extract_column, is_within_delta};
