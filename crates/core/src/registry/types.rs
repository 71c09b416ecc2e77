//! Registry data model: documents, situations and cadastral units.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::classify::DocumentVariant;

/// Rate-table key used for agricultural land.
pub const AGRICULTURAL_LAND_KEY: &str = "terreno_agricolo";
/// Rate-table key used for buildable land.
pub const BUILDABLE_LAND_KEY: &str = "area_fabbricabile";

/// Legal standing of the income figure of a situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SituationStatus {
    /// Figure proposed by the owner, still open to rectification.
    Proposed,
    /// Figure validated by the registry office.
    Validated,
    /// Figure changed by the office with respect to the previous proposal.
    Rectified,
    /// Proposal not rectified within the deadline, hence valid.
    NotRectified,
}

/// What the `value` of a situation measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKind {
    /// Building: `value` is the cadastral income.
    Building,
    /// Buildable land: `value` is the venal value.
    BuildableLand,
    /// Agricultural land: `value` is the agricultural (dominical) income.
    AgriculturalLand,
}

/// Sheet / parcel / sub-unit identifiers. Any of them may be missing on a
/// partially printed row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitRef {
    pub foglio: Option<String>,
    pub particella: Option<String>,
    pub sub: Option<String>,
}

impl UnitRef {
    /// Census key, missing parts rendered empty.
    pub fn key(&self) -> String {
        format!(
            "{}-{}-{}",
            self.foglio.as_deref().unwrap_or(""),
            self.particella.as_deref().unwrap_or(""),
            self.sub.as_deref().unwrap_or("")
        )
    }
}

/// One historical state of a property's registry valuation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Situation {
    pub effective_from: Option<NaiveDate>,
    pub status: Option<SituationStatus>,
    pub units: Vec<UnitRef>,
    pub category: Option<String>,
    pub value: Option<f64>,
    pub property_kind: Option<PropertyKind>,
}

impl Situation {
    /// True when no field carries information. Such records are dropped.
    ///
    /// A zero value counts as absent.
    pub fn is_empty(&self) -> bool {
        self.effective_from.is_none()
            && self.category.as_deref().is_none_or(|c| c.trim().is_empty())
            && self.value.is_none_or(|v| v == 0.0)
            && self.status.is_none()
            && self.units.is_empty()
    }

    /// Key under which the municipal rate for this situation is filed.
    pub fn rate_category(&self) -> Option<&str> {
        match self.property_kind {
            Some(PropertyKind::AgriculturalLand) => Some(AGRICULTURAL_LAND_KEY),
            Some(PropertyKind::BuildableLand) => Some(BUILDABLE_LAND_KEY),
            Some(PropertyKind::Building) | None => self.category.as_deref(),
        }
    }
}

/// An extracted registry document.
///
/// `situations` are ordered most recent first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub variant: DocumentVariant,
    pub number: String,
    pub municipality: String,
    pub municipality_code: String,
    pub situations: Vec<Situation>,
}

impl Document {
    /// Replace the value of one situation after manual review.
    ///
    /// Returns false when `index` is out of range.
    pub fn correct_value(&mut self, index: usize, value: f64) -> bool {
        match self.situations.get_mut(index) {
            Some(situation) => {
                situation.value = Some(value);
                true
            }
            None => false,
        }
    }

    /// Year of the oldest dated situation.
    pub fn earliest_year(&self) -> Option<i32> {
        self.situations
            .iter()
            .filter_map(|s| s.effective_from)
            .map(|d| d.year())
            .min()
    }
}
