//! Cross-referencing of F24 payments with registry documents.

use indexmap::IndexMap;

use crate::registry::Document;

use super::types::TaxForm;

/// Forms paying local tax to `municipality_code` for a period mentioning `year`.
pub fn forms_for<'a>(forms: &'a [TaxForm], municipality_code: &str, year: i32) -> Vec<&'a TaxForm> {
    let year = year.to_string();
    forms
        .iter()
        .filter(|form| {
            form.local_tax_entries().any(|entry| {
                entry
                    .code
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(municipality_code))
                    && entry.period.as_deref().is_some_and(|p| p.contains(&year))
            })
        })
        .collect()
}

/// Net local tax paid to `municipality_code` for `year`, debit minus credit
/// over the matching entries of every form.
pub fn paid_for(forms: &[TaxForm], municipality_code: &str, year: i32) -> f64 {
    let year = year.to_string();
    forms
        .iter()
        .flat_map(|form| form.local_tax_entries())
        .filter(|entry| {
            entry
                .code
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(municipality_code))
                && entry.period.as_deref().is_some_and(|p| p.contains(&year))
        })
        .map(|entry| entry.debit_amount - entry.credit_amount)
        .sum()
}

/// Documents grouped by municipality code, in first-seen order.
///
/// Documents without a code share the empty key.
pub fn group_by_municipality(documents: &[Document]) -> IndexMap<String, Vec<&Document>> {
    let mut groups: IndexMap<String, Vec<&Document>> = IndexMap::new();
    for document in documents {
        groups
            .entry(document.municipality_code.clone())
            .or_default()
            .push(document);
    }
    groups
}
