//! Titled-table registry layout ("Visura n.: ...").
//!
//! Each situation is printed as a table introduced by a title fragment
//! ("Situazione dell'unità immobiliare dal ..."), most recent first. The body
//! of a section is every fragment from its title row down to the next title
//! row, both inclusive.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::fragment::{TextFragment, find_containing};
use crate::layout::{ColumnSpec, align_rows};
use crate::utils::{find_bounded_date, find_date};

use super::fields::{property_kind, status_of_fragments, value_of_fragments};
use super::types::{Situation, UnitRef};

// Column tuning for the table layout. Tolerances are in source x units
// (about five glyphs per unit).
const FOGLIO: ColumnSpec = ColumnSpec::new("foglio", 1, 1.0);
const PARTICELLA: ColumnSpec = ColumnSpec::new("particella", 1, 1.0);
const SUB: ColumnSpec = ColumnSpec::new("sub", 1, 1.0);
const CATEGORIA: ColumnSpec = ColumnSpec::new("categoria", 2, 1.0);
/// Free-text "dati derivanti da" column, scanned for a date when the title
/// carries none.
const DERIVANTI: ColumnSpec = ColumnSpec::new("derivanti", 100, 1.0);

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Visura\s+n\.:\s*([A-Z]?\d+)").expect("valid number regex"));
static MUNICIPALITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Comune di\s+([\w\s']+)\s*\(\s*Codice\s*:\s*([A-Z0-9]+)\s*\)")
        .expect("valid municipality regex")
});

/// Document number from the "Visura n.:" fragment.
pub(crate) fn number(fragments: &[TextFragment]) -> String {
    find_containing(fragments, "visura n")
        .and_then(|f| NUMBER_RE.captures(&f.text))
        .map(|c| c[1].to_string())
        .unwrap_or_default()
}

/// Municipality name and code from the "Comune di X (Codice: Y)" fragment.
pub(crate) fn municipality(fragments: &[TextFragment]) -> (String, String) {
    find_containing(fragments, "comune di")
        .and_then(|f| MUNICIPALITY_RE.captures(&f.text))
        .map(|c| (c[1].trim().to_string(), c[2].trim().to_string()))
        .unwrap_or_default()
}

fn is_section_title(fragment: &TextFragment) -> bool {
    let text = fragment.lower();
    (text.contains("situazione") && text.contains("immobil")) || text.contains("unità immobil")
}

/// Section bodies, one per title, in document order.
fn sections(fragments: &[TextFragment]) -> Vec<(&TextFragment, Vec<TextFragment>)> {
    let titles: Vec<&TextFragment> = fragments.iter().filter(|f| is_section_title(f)).collect();

    titles
        .iter()
        .enumerate()
        .map(|(idx, title)| {
            let start = title.y;
            let end = titles.get(idx + 1).map_or(f64::INFINITY, |next| next.y);
            let body = fragments
                .iter()
                .filter(|f| f.y >= start && f.y <= end)
                .cloned()
                .collect();
            (*title, body)
        })
        .collect()
}

fn section_date(title: &TextFragment, body: &[TextFragment]) -> Option<chrono::NaiveDate> {
    find_date(&title.text).or_else(|| {
        let notes = DERIVANTI
            .extract(body)
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        find_bounded_date(&notes)
    })
}

fn units(body: &[TextFragment]) -> Vec<UnitRef> {
    let columns = [FOGLIO.extract(body), PARTICELLA.extract(body), SUB.extract(body)];
    align_rows(&columns)
        .into_iter()
        .map(|row| UnitRef {
            foglio: row.text(0),
            particella: row.text(1),
            sub: row.text(2),
        })
        .collect()
}

/// Situations of a table-layout document, most recent first.
pub(crate) fn situations(fragments: &[TextFragment]) -> Vec<Situation> {
    let sections = sections(fragments);
    debug!(sections = sections.len(), "table layout sections");

    sections
        .iter()
        .filter_map(|(title, body)| {
            let category = CATEGORIA
                .extract(body)
                .first()
                .map(|f| f.text.trim().to_string());
            let situation = Situation {
                effective_from: section_date(title, body),
                status: status_of_fragments(body),
                units: units(body),
                property_kind: Some(property_kind(body, category.as_deref())),
                value: value_of_fragments(body),
                category,
            };
            (!situation.is_empty()).then_some(situation)
        })
        .collect()
}
