//! Column reconstruction of the F24 tax table.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::fragment::{TextFragment, find_containing};
use crate::layout::{AlignedRow, align_rows, extract_column};
use crate::utils::{find_date, parse_amount};

use super::layouts::TaxFormLayout;
use super::types::{Particulars, TaxFormEntry};

/// Tax category headings printed above groups of lines.
static CATEGORY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*(erario|inps|regioni|imu e altri tributi locali|trib\.?\s*locali|inail|altri enti)",
    )
    .expect("valid category regex")
});

// Cell positions in the aligned rows.
const SECTION: usize = 0;
const CODE: usize = 1;
const TAX_CAUSE: usize = 2;
const RAVV: usize = 3;
const CHANGED_UNITS: usize = 4;
const ADVANCE: usize = 5;
const BALANCE: usize = 6;
const UNIT_COUNT: usize = 7;
const PERIOD: usize = 8;
const DEBIT: usize = 9;
const CREDIT: usize = 10;

/// Date cells hold at most a date and a time.
const DATE_MAX_TOKENS: usize = 3;

/// Fragments from the header row down to, excluding, the end marker.
fn table_region(fragments: &[TextFragment], layout: &TaxFormLayout) -> Vec<TextFragment> {
    let top = find_containing(fragments, layout.section.header).map_or(f64::NEG_INFINITY, |h| h.y);
    let bottom = fragments
        .iter()
        .find(|f| f.y > top && f.contains(layout.end_marker))
        .map_or(f64::INFINITY, |f| f.y);

    fragments
        .iter()
        .filter(|f| f.y >= top && f.y < bottom)
        .cloned()
        .collect()
}

fn amount(text: Option<String>) -> f64 {
    text.map_or(0.0, |t| {
        parse_amount(t.trim_start_matches(|c: char| !c.is_ascii_digit() && c != '-' && c != ','))
    })
}

fn category_for(row: &AlignedRow<'_>, labels: &[&TextFragment]) -> Option<String> {
    if let Some(section) = row.text(SECTION).filter(|s| CATEGORY_RE.is_match(s)) {
        return Some(section);
    }
    labels
        .iter()
        .rev()
        .find(|label| label.y <= row.y)
        .map(|label| label.text.trim().to_string())
}

/// Every tax line of the table, top to bottom.
pub(crate) fn entries(fragments: &[TextFragment], layout: &TaxFormLayout) -> Vec<TaxFormEntry> {
    let region = table_region(fragments, layout);
    let columns = [
        layout.section.extract(&region),
        layout.code.extract(&region),
        layout.tax_cause.extract(&region),
        layout.ravv.extract(&region),
        layout.changed_units.extract(&region),
        layout.advance.extract(&region),
        layout.balance.extract(&region),
        layout.unit_count.extract(&region),
        layout.period.extract(&region),
        layout.debit.extract(&region),
        layout.credit.extract(&region),
    ];

    let mut labels: Vec<&TextFragment> = region
        .iter()
        .filter(|f| CATEGORY_RE.is_match(&f.text))
        .collect();
    labels.sort_by(|a, b| a.y.total_cmp(&b.y));

    align_rows(&columns)
        .iter()
        .map(|row| TaxFormEntry {
            category: category_for(row, &labels),
            section: row.text(SECTION),
            code: row.text(CODE),
            tax_cause: row.text(TAX_CAUSE),
            particulars: Particulars {
                ravv: row.text(RAVV),
                changed_units: row.text(CHANGED_UNITS),
                advance: row.text(ADVANCE),
                balance: row.text(BALANCE),
                unit_count: row.text(UNIT_COUNT),
            },
            period: row.text(PERIOD),
            debit_amount: amount(row.text(DEBIT)),
            credit_amount: amount(row.text(CREDIT)),
        })
        .filter(|entry| {
            entry.code.is_some()
                || entry.tax_cause.is_some()
                || entry.debit_amount != 0.0
                || entry.credit_amount != 0.0
        })
        .collect()
}

/// Payment date printed at, right of, or under the first matching label.
pub(crate) fn payment_date(fragments: &[TextFragment], layout: &TaxFormLayout) -> Option<NaiveDate> {
    layout.date_labels.iter().find_map(|needle| {
        let label = find_containing(fragments, needle)?;
        if let Some(date) = find_date(&label.text) {
            return Some(date);
        }

        let mut right: Vec<&TextFragment> = fragments
            .iter()
            .filter(|f| f.y == label.y && f.start_x > label.end_x)
            .collect();
        right.sort_by(|a, b| a.start_x.total_cmp(&b.start_x));

        right
            .into_iter()
            .find_map(|f| find_date(&f.text))
            .or_else(|| {
                extract_column(fragments, needle, DATE_MAX_TOKENS, layout.date_tolerance_x)
                    .into_iter()
                    .find_map(|f| find_date(&f.text))
            })
    })
}
