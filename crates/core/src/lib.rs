//! catasto - positional table reconstruction for Italian registry extracts
//! (visure catastali) and F24 payment forms, and the IMU timeline computed
//! from them.
//!
//! The input is a flat list of positioned [`TextFragment`]s; see [`source`]
//! for loaders. [`extract`] classifies a document and runs the matching
//! extractor; [`imu::calculate`] turns a registry [`Document`] and a
//! [`RateTable`] into yearly amounts.

pub mod census;
pub mod classify;
pub mod error;
pub mod fragment;
pub mod imu;
pub mod layout;
pub mod rates;
pub mod registry;
pub mod source;
pub mod taxform;
pub mod temporal;
pub mod utils;

use serde::{Deserialize, Serialize};

pub use census::{CensusEntry, census};
pub use classify::{DocumentVariant, classify};
pub use error::{CatastoError, Result};
pub use fragment::TextFragment;
pub use imu::{CalcParams, YearData, YearlyTaxResult, calculate};
pub use rates::RateTable;
pub use registry::{Document, Situation};
pub use taxform::{TaxForm, TaxFormEntry};

/// Output of [`extract`], one per document family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Extraction {
    Registry(Document),
    TaxForm(TaxForm),
}

impl Extraction {
    pub fn variant(&self) -> DocumentVariant {
        match self {
            Self::Registry(doc) => doc.variant,
            Self::TaxForm(form) => form.variant,
        }
    }
}

/// Classify `fragments` and extract them with the matching extractor.
pub fn extract(fragments: &[TextFragment]) -> Extraction {
    let variant = classify(fragments);
    if variant.is_tax_form() {
        Extraction::TaxForm(taxform::build(fragments, variant))
    } else {
        Extraction::Registry(registry::build(fragments, variant))
    }
}
