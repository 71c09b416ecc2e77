//! Calculation window.

use crate::error::{CatastoError, Result};

/// Years covered by a calculation.
///
/// `last_year` is always explicit so that results never depend on the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalcParams {
    /// First year to emit. `None` starts at the oldest dated situation; an
    /// explicit year earlier than that is raised to it.
    pub first_year: Option<i32>,
    /// Last year to emit, usually the current year.
    pub last_year: i32,
}

impl CalcParams {
    /// Creates a window, rejecting `first_year > last_year`.
    pub fn new(first_year: Option<i32>, last_year: i32) -> Result<Self> {
        if let Some(first) = first_year
            && first > last_year
        {
            return Err(CatastoError::InvalidYearRange {
                first,
                last: last_year,
            });
        }
        Ok(Self {
            first_year,
            last_year,
        })
    }

    /// From the oldest situation through `last_year`.
    pub fn through(last_year: i32) -> Self {
        Self {
            first_year: None,
            last_year,
        }
    }
}
