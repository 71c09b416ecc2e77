//! F24 data model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classify::DocumentVariant;

/// The "estremi identificativi" sub-columns of a local-tax line. Each is the
/// printed mark or number, unset when blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Particulars {
    /// Late payment with voluntary correction ("ravv.").
    pub ravv: Option<String>,
    /// Property set changed during the year ("immob. variati").
    pub changed_units: Option<String>,
    /// Advance installment mark ("acc.").
    pub advance: Option<String>,
    /// Balance installment mark ("saldo").
    pub balance: Option<String>,
    /// Number of properties covered ("numero immobili").
    pub unit_count: Option<String>,
}

/// One tax line of an F24.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxFormEntry {
    /// Tax category heading the line belongs to (e.g. "TRIB.LOCALI").
    pub category: Option<String>,
    pub section: Option<String>,
    /// Municipality (ente) code.
    pub code: Option<String>,
    /// Tax cause code ("codice tributo", e.g. 3918).
    pub tax_cause: Option<String>,
    pub particulars: Particulars,
    pub period: Option<String>,
    pub debit_amount: f64,
    pub credit_amount: f64,
}

impl TaxFormEntry {
    /// Municipal tax line, the only kind reconciled against IMU.
    pub fn is_local_tax(&self) -> bool {
        let category_local = self.category.as_deref().is_some_and(is_local_category);
        let section_local = self
            .section
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("el") || is_local_category(s));
        category_local || section_local
    }
}

fn is_local_category(text: &str) -> bool {
    let text = text.to_lowercase();
    text.contains("trib.locali") || text.contains("trib. locali") || text.contains("tributi locali")
}

/// An extracted F24 with its payment date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxForm {
    pub variant: DocumentVariant,
    pub payment_date: Option<NaiveDate>,
    pub entries: Vec<TaxFormEntry>,
}

impl TaxForm {
    pub fn total_debit(&self) -> f64 {
        self.entries.iter().map(|e| e.debit_amount).sum()
    }

    pub fn total_credit(&self) -> f64 {
        self.entries.iter().map(|e| e.credit_amount).sum()
    }

    /// Lines retained for municipal tax cross-referencing.
    pub fn local_tax_entries(&self) -> impl Iterator<Item = &TaxFormEntry> {
        self.entries.iter().filter(|e| e.is_local_tax())
    }
}
