//! Statutory multipliers applied to building incomes.

use crate::utils::normalize_category;

/// Revaluation of the cadastral income of a building.
pub const BUILDING_REVALUATION: f64 = 1.05;
/// Revaluation of the agricultural income of land.
pub const AGRICULTURAL_REVALUATION: f64 = 1.25;
/// Multiplier of revalued agricultural income.
pub const AGRICULTURAL_MULTIPLIER: f64 = 135.0;

fn lookup(code: &str) -> Option<f64> {
    let multiplier = match code {
        "A" => 160.0,
        "A10" => 80.0,
        "B" => 140.0,
        "C" => 160.0,
        "C1" => 55.0,
        "C2" | "C6" | "C7" => 160.0,
        "C3" | "C4" | "C5" => 140.0,
        "D" => 65.0,
        "D5" => 80.0,
        "E" => 65.0,
        _ => return None,
    };
    Some(multiplier)
}

/// Multiplier for a building category, by full code then by group letter.
///
/// `None` for categories outside the table; the month is then not taxed.
pub fn multiplier(category: &str) -> Option<f64> {
    let code = normalize_category(category);
    lookup(&code).or_else(|| code.get(..1).and_then(lookup))
}
