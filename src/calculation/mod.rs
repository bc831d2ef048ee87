//! Calculation logic for the Gratuity Engine.
//!
//! This module contains the pure calculation functions: measuring a service
//! period by calendar fields, half-year rounding, strict date parsing, and the
//! statutory gratuity payout. Nothing here performs I/O or touches storage.

mod gratuity;
mod tenure;

pub use gratuity::{
    GRATUITY_DAYS_PER_YEAR, MINIMUM_QUALIFYING_YEARS, WORKING_DAYS_PER_MONTH, compute_gratuity,
    compute_gratuity_for,
};
pub use tenure::{HALF_YEAR_MONTHS, parse_calendar_date, qualifying_years, service_period};
