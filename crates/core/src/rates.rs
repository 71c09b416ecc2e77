//! Municipal IMU rates, per municipality, year and category.
//!
//! Serialized as
//! `{ "<code>": { "comune": "<name>", "years": { "<year>": { "<category>": rate } } } }`
//! where an unset rate is `null`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::registry::Document;
use crate::utils::normalize_category;

/// Rates of one municipality.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MunicipalityRates {
    #[serde(rename = "comune", default)]
    pub name: String,
    #[serde(default)]
    pub years: BTreeMap<i32, BTreeMap<String, Option<f64>>>,
}

/// Rates in percent, keyed by municipality code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    municipalities: BTreeMap<String, MunicipalityRates>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(bytes: &[u8]) -> crate::Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Rate for `category`, tried verbatim and then normalized.
    ///
    /// Unset, zero and negative rates are all reported as absent.
    pub fn rate(&self, municipality_code: &str, year: i32, category: &str) -> Option<f64> {
        let categories = self
            .municipalities
            .get(municipality_code)?
            .years
            .get(&year)?;
        let rate = match categories.get(category).copied().flatten() {
            Some(rate) => Some(rate),
            None => categories
                .get(&normalize_category(category))
                .copied()
                .flatten(),
        };
        rate.filter(|r| *r > 0.0)
    }

    /// Set or clear one rate, creating the municipality and year as needed.
    pub fn set_rate(
        &mut self,
        municipality_code: &str,
        year: i32,
        category: &str,
        rate: Option<f64>,
    ) {
        self.municipalities
            .entry(municipality_code.to_string())
            .or_default()
            .years
            .entry(year)
            .or_default()
            .insert(category.to_string(), rate);
    }

    pub fn municipality(&self, code: &str) -> Option<&MunicipalityRates> {
        self.municipalities.get(code)
    }

    pub fn municipalities(&self) -> impl Iterator<Item = (&str, &MunicipalityRates)> {
        self.municipalities.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.municipalities.is_empty()
    }

    /// Skeleton with every rate a set of documents can need, all unset.
    ///
    /// Each municipality gets every year from its earliest situation through
    /// `last_year` and every rate category its situations use.
    pub fn preset<'a, I>(documents: I, last_year: i32) -> Self
    where
        I: IntoIterator<Item = &'a Document>,
    {
        let mut table = Self::new();
        let mut spans: BTreeMap<String, (i32, Vec<String>)> = BTreeMap::new();

        for document in documents {
            let Some(earliest) = document.earliest_year() else {
                continue;
            };
            let entry = table
                .municipalities
                .entry(document.municipality_code.clone())
                .or_default();
            if entry.name.is_empty() {
                entry.name = document.municipality.clone();
            }

            let (first, categories) = spans
                .entry(document.municipality_code.clone())
                .or_insert((earliest, Vec::new()));
            *first = (*first).min(earliest);
            for category in document.situations.iter().filter_map(|s| s.rate_category()) {
                if !categories.iter().any(|c| c == category) {
                    categories.push(category.to_string());
                }
            }
        }

        for (code, (first, categories)) in spans {
            let Some(entry) = table.municipalities.get_mut(&code) else {
                continue;
            };
            for year in first..=last_year {
                let slots = entry.years.entry(year).or_default();
                for category in &categories {
                    slots.insert(category.clone(), None);
                }
            }
        }

        debug!(
            municipalities = table.municipalities.len(),
            "built rate table skeleton"
        );
        table
    }
}
