//! Month-by-month IMU accumulation.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::rates::RateTable;
use crate::registry::{Document, PropertyKind, Situation};
use crate::temporal::resolve;
use crate::utils::normalize_category;

use super::multiplier::{
    AGRICULTURAL_MULTIPLIER, AGRICULTURAL_REVALUATION, BUILDING_REVALUATION, multiplier,
};
use super::params::CalcParams;

/// Months up to this one (1-based) fall in the advance installment.
pub const ADVANCE_LAST_MONTH: u32 = 6;

const AGRICULTURAL_LABEL: &str = "Terreno Agricolo";
const BUILDABLE_LABEL: &str = "Terreno Edificabile";

/// Per-year figures, full precision. Rounding is left to presentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearData {
    /// Month-weighted value of the situations in force.
    pub taxable_value: f64,
    /// January to June.
    pub advance_amount: f64,
    /// July to December.
    pub balance_amount: f64,
    pub total_amount: f64,
    pub rates_used: BTreeSet<OrderedFloat<f64>>,
    pub categories_used: BTreeSet<String>,
    pub multipliers_used: BTreeSet<OrderedFloat<f64>>,
    pub taxable_bases_used: BTreeSet<OrderedFloat<f64>>,
}

impl YearData {
    pub fn rates(&self) -> Vec<f64> {
        self.rates_used.iter().map(|r| r.into_inner()).collect()
    }

    pub fn multipliers(&self) -> Vec<f64> {
        self.multipliers_used.iter().map(|m| m.into_inner()).collect()
    }

    pub fn taxable_bases(&self) -> Vec<f64> {
        self.taxable_bases_used.iter().map(|b| b.into_inner()).collect()
    }

    /// True when no month of the year was taxed.
    pub fn is_untaxed(&self) -> bool {
        self.rates_used.is_empty()
    }
}

/// Yearly results keyed by year.
pub type YearlyTaxResult = BTreeMap<i32, YearData>;

/// Taxable base of one situation and what produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub taxable_base: f64,
    pub multiplier: Option<f64>,
    pub category: String,
}

/// Taxable base of a situation, by property kind.
///
/// Buildings need a category with a known multiplier and a non-zero income;
/// land needs a non-zero value. Anything else is not taxable.
pub fn assess(situation: &Situation) -> Option<Assessment> {
    let value = situation.value.filter(|v| *v != 0.0)?;
    match situation.property_kind {
        Some(PropertyKind::AgriculturalLand) => Some(Assessment {
            taxable_base: value * AGRICULTURAL_REVALUATION * AGRICULTURAL_MULTIPLIER,
            multiplier: None,
            category: AGRICULTURAL_LABEL.to_string(),
        }),
        Some(PropertyKind::BuildableLand) => Some(Assessment {
            taxable_base: value,
            multiplier: None,
            category: BUILDABLE_LABEL.to_string(),
        }),
        Some(PropertyKind::Building) | None => {
            let category = situation.category.as_deref()?;
            let coefficient = multiplier(category)?;
            Some(Assessment {
                taxable_base: value * BUILDING_REVALUATION * coefficient,
                multiplier: Some(coefficient),
                category: normalize_category(category),
            })
        }
    }
}

/// Tax owed for one month on `taxable_base` at `rate` percent.
pub fn monthly_amount(taxable_base: f64, rate: f64) -> f64 {
    taxable_base * (rate / 100.0) / 12.0
}

/// Compute the IMU timeline of one document.
///
/// Every year of the window gets an entry, taxed or not. Each month resolves
/// the situation in force on its first day, looks up the municipal rate for
/// its category and adds one twelfth of the yearly tax.
pub fn calculate(document: &Document, rates: &RateTable, params: &CalcParams) -> YearlyTaxResult {
    let mut result = YearlyTaxResult::new();
    let Some(earliest) = document.earliest_year() else {
        debug!(number = %document.number, "no dated situation, nothing to calculate");
        return result;
    };
    let first = params.first_year.map_or(earliest, |y| y.max(earliest));

    for year in first..=params.last_year {
        let data = result.entry(year).or_default();

        for month in 1..=12 {
            let Some(target) = NaiveDate::from_ymd_opt(year, month, 1) else {
                continue;
            };
            let Some(situation) = resolve(target, &document.situations) else {
                trace!(year, month, "no situation in force");
                continue;
            };
            let Some(category) = situation.rate_category() else {
                trace!(year, month, "situation without category");
                continue;
            };
            let Some(rate) = rates.rate(&document.municipality_code, year, category) else {
                trace!(year, month, category, "rate unset");
                continue;
            };
            let Some(assessment) = assess(situation) else {
                trace!(year, month, category, "situation not taxable");
                continue;
            };

            let monthly = monthly_amount(assessment.taxable_base, rate);
            data.total_amount += monthly;
            if month <= ADVANCE_LAST_MONTH {
                data.advance_amount += monthly;
            } else {
                data.balance_amount += monthly;
            }
            data.taxable_value += situation.value.unwrap_or(0.0) / 12.0;

            data.rates_used.insert(OrderedFloat(rate));
            data.categories_used.insert(assessment.category);
            if let Some(m) = assessment.multiplier {
                data.multipliers_used.insert(OrderedFloat(m));
            }
            data.taxable_bases_used
                .insert(OrderedFloat(assessment.taxable_base));
        }
    }

    debug!(
        number = %document.number,
        years = result.len(),
        "calculated IMU timeline"
    );
    result
}
