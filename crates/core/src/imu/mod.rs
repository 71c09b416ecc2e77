//! IMU calculation over the registry timeline.

mod calc;
mod multiplier;
mod params;

pub use calc::{
    ADVANCE_LAST_MONTH, Assessment, YearData, YearlyTaxResult, assess, calculate, monthly_amount,
};
pub use multiplier::{
    AGRICULTURAL_MULTIPLIER, AGRICULTURAL_REVALUATION, BUILDING_REVALUATION, multiplier,
};
pub use params::CalcParams;
