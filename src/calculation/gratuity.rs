//! Gratuity calculation functionality.
//!
//! This module provides the statutory gratuity rule: tenure is rounded to whole
//! years, employees below the qualifying minimum receive nothing, and everyone
//! else receives fifteen days of wages per year of service on a twenty-six
//! working-day month.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationInput, GratuityResult, TenureInterval};

use super::tenure::{qualifying_years, service_period};

/// Days of wages paid per qualifying year.
pub const GRATUITY_DAYS_PER_YEAR: u32 = 15;

/// Working days in a month for converting monthly wages to daily wages.
pub const WORKING_DAYS_PER_MONTH: u32 = 26;

/// Rounded years of service required before any gratuity is payable.
pub const MINIMUM_QUALIFYING_YEARS: i32 = 5;

/// Decimal places the payout is rounded to.
const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// Computes gratuity from raw dates and salary components.
///
/// This is a thin wrapper over [`compute_gratuity_for`].
///
/// # Errors
///
/// Returns [`EngineError::NegativeMoney`](crate::error::EngineError::NegativeMoney)
/// if either salary component is negative, and
/// [`EngineError::AmountOverflow`](crate::error::EngineError::AmountOverflow)
/// if the payout does not fit in a `Decimal`. A tenure end before its start is
/// not an error; it simply never qualifies.
///
/// # Examples
///
/// ```
/// use gratuity_engine::calculation::compute_gratuity;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let result = compute_gratuity(
///     NaiveDate::from_ymd_opt(2010, 4, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2020, 4, 1).unwrap(),
///     Decimal::new(26000, 0),
///     Decimal::ZERO,
/// )
/// .unwrap();
///
/// assert!(result.eligible);
/// assert_eq!(result.qualifying_years, 10);
/// assert_eq!(result.amount, Decimal::new(150000, 0));
/// ```
pub fn compute_gratuity(
    tenure_start: NaiveDate,
    tenure_end: NaiveDate,
    basic_salary: Decimal,
    dearness_allowance: Decimal,
) -> EngineResult<GratuityResult> {
    compute_gratuity_for(
        &TenureInterval::new(tenure_start, tenure_end),
        &CompensationInput {
            basic_salary,
            dearness_allowance,
        },
    )
}

/// Computes gratuity for a tenure interval and the current salary components.
///
/// 1. The service period is measured by calendar-field subtraction.
/// 2. Six or more remaining months add one year.
/// 3. Fewer than [`MINIMUM_QUALIFYING_YEARS`] rounded years is not eligible.
/// 4. Otherwise `years * (basic + da) * 15 / 26`, rounded half away from zero
///    to two decimal places.
pub fn compute_gratuity_for(
    tenure: &TenureInterval,
    compensation: &CompensationInput,
) -> EngineResult<GratuityResult> {
    compensation.validate()?;

    let years = qualifying_years(service_period(tenure));
    if years < MINIMUM_QUALIFYING_YEARS {
        return Ok(GratuityResult::not_eligible(years));
    }

    let wages = compensation.wages()?;

    // Single division, after every multiplication.
    let amount = Decimal::from(years)
        .checked_mul(wages)
        .and_then(|total| total.checked_mul(Decimal::from(GRATUITY_DAYS_PER_YEAR)))
        .and_then(|total| total.checked_div(Decimal::from(WORKING_DAYS_PER_MONTH)))
        .ok_or_else(|| EngineError::AmountOverflow {
            field: "amount".to_string(),
        })?
        .round_dp_with_strategy(AMOUNT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

    Ok(GratuityResult {
        eligible: true,
        qualifying_years: years,
        amount,
    })
}
