//! Distinct cadastral units across a set of registry documents.

use indexmap::IndexMap;
use serde::Serialize;

use crate::registry::{Document, UnitRef};

/// One distinct unit and what the documents say about it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CensusEntry {
    pub unit: UnitRef,
    /// Distinct categories, first-seen order.
    pub categories: Vec<String>,
    /// Sum of the values of every situation listing the unit.
    pub value: f64,
    /// Index of the first document listing the unit.
    pub document: usize,
}

/// Units keyed by `(foglio, particella, sub)`, in first-seen order.
pub fn census(documents: &[Document]) -> Vec<CensusEntry> {
    let mut units: IndexMap<UnitRef, CensusEntry> = IndexMap::new();

    for (index, document) in documents.iter().enumerate() {
        for situation in &document.situations {
            for unit in &situation.units {
                let entry = units.entry(unit.clone()).or_insert_with(|| CensusEntry {
                    unit: unit.clone(),
                    categories: Vec::new(),
                    value: 0.0,
                    document: index,
                });
                if let Some(category) = situation.category.as_deref()
                    && !entry.categories.iter().any(|c| c == category)
                {
                    entry.categories.push(category.to_string());
                }
                entry.value += situation.value.unwrap_or(0.0);
            }
        }
    }

    units.into_values().collect()
}
