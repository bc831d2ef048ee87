//! Tenure measurement functionality.
//!
//! This module measures tenure by calendar-field subtraction (not by dividing
//! elapsed days) and applies the half-year rounding rule.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::{ServicePeriod, TenureInterval};

/// Months of a partial year that count as a whole additional year.
pub const HALF_YEAR_MONTHS: i32 = 6;

/// Computes the completed years and months between the two ends of a tenure.
///
/// Years and months are subtracted field by field. When the end day-of-month
/// is earlier than the start day-of-month one month is borrowed, and a negative
/// month count borrows a year.
///
/// # Examples
///
/// ```
/// use gratuity_engine::calculation::service_period;
/// use gratuity_engine::models::TenureInterval;
/// use chrono::NaiveDate;
///
/// let tenure = TenureInterval::new(
///     NaiveDate::from_ymd_opt(2015, 6, 15).unwrap(),
///     NaiveDate::from_ymd_opt(2020, 12, 14).unwrap(),
/// );
/// let period = service_period(&tenure);
/// assert_eq!((period.years, period.months), (5, 5));
/// ```
pub fn service_period(tenure: &TenureInterval) -> ServicePeriod {
    let (start, end) = (tenure.start, tenure.end);

    let mut years = end.year() - start.year();
    let mut months = end.month() as i32 - start.month() as i32;

    if end.day() < start.day() {
        months -= 1;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    ServicePeriod { years, months }
}

/// Applies the half-year rounding rule to a service period.
///
/// Six or more remaining months round the tenure up by one year; fewer are dropped.
///
/// # Examples
///
/// ```
/// use gratuity_engine::calculation::qualifying_years;
/// use gratuity_engine::models::ServicePeriod;
///
/// assert_eq!(qualifying_years(ServicePeriod { years: 5, months: 6 }), 6);
/// assert_eq!(qualifying_years(ServicePeriod { years: 5, months: 5 }), 5);
/// ```
pub fn qualifying_years(period: ServicePeriod) -> i32 {
    if period.months >= HALF_YEAR_MONTHS {
        period.years + 1
    } else {
        period.years
    }
}

/// Parses a strict `YYYY-MM-DD` calendar date.
///
/// Anything else, including surrounding whitespace, unpadded fields or
/// impossible dates such as `2021-02-29`, is rejected whole with
/// [`EngineError::InvalidDate`] naming `field`.
///
/// # Examples
///
/// ```
/// use gratuity_engine::calculation::parse_calendar_date;
///
/// assert!(parse_calendar_date("join_date", "2020-02-29").is_ok());
/// assert!(parse_calendar_date("join_date", "2020-2-29").is_err());
/// ```
pub fn parse_calendar_date(field: &str, value: &str) -> EngineResult<NaiveDate> {
    let invalid = || EngineError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    };

    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())
}
