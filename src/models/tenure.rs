//! Tenure models.
//!
//! This module contains the [`TenureInterval`] a gratuity is computed over and
//! the [`ServicePeriod`] obtained by subtracting its calendar fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The span between joining and the reference exit date.
///
/// `end` is expected to be on or after `start`, but a reversed interval is
/// representable; the calculator treats it as not qualifying.
///
/// # Example
///
/// ```
/// use gratuity_engine::models::TenureInterval;
/// use chrono::NaiveDate;
///
/// let tenure = TenureInterval::new(
///     NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2020, 7, 1).unwrap(),
/// );
/// assert!(!tenure.is_reversed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenureInterval {
    /// First day of service (the join date).
    pub start: NaiveDate,
    /// Reference exit date.
    pub end: NaiveDate,
}

impl TenureInterval {
    /// Creates an interval from its two endpoints.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns true if the exit date precedes the start date.
    pub fn is_reversed(&self) -> bool {
        self.end < self.start
    }
}

/// Whole years and months of service before any rounding.
///
/// `months` is in `0..12` for any interval; `years` is negative when the
/// interval is reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServicePeriod {
    /// Completed years.
    pub years: i32,
    /// Completed months beyond `years`.
    pub months: i32,
}

impl std::fmt::Display for ServicePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} years {} months", self.years, self.months)
    }
}
