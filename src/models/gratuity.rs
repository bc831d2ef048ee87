//! Gratuity result models.
//!
//! This module contains the [`GratuityResult`] produced by the calculator and
//! the [`GratuityStatement`] shown for a stored employee.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Employee, ServicePeriod, TenureInterval};

/// The outcome of a gratuity computation.
///
/// # Example
///
/// ```
/// use gratuity_engine::models::GratuityResult;
///
/// let result = GratuityResult::not_eligible(4);
/// assert!(!result.eligible);
/// assert!(result.amount.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratuityResult {
    /// Whether the rounded tenure reaches the qualifying minimum.
    pub eligible: bool,
    /// Years of service after half-year rounding.
    pub qualifying_years: i32,
    /// The payout. Always zero when `eligible` is false.
    pub amount: Decimal,
}

impl GratuityResult {
    /// A non-qualifying result for the given rounded years.
    pub fn not_eligible(qualifying_years: i32) -> Self {
        Self {
            eligible: false,
            qualifying_years,
            amount: Decimal::ZERO,
        }
    }
}

/// The gratuity view of a single employee as of an exit date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratuityStatement {
    /// The stored employee record.
    pub employee: Employee,
    /// The exit date the computation was made against.
    pub as_of: NaiveDate,
    /// The interval from join date to `as_of`.
    pub tenure: TenureInterval,
    /// Completed years and months before rounding.
    pub service_period: ServicePeriod,
    /// The computed entitlement.
    pub result: GratuityResult,
}
