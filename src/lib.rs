//! Gratuity Engine
//!
//! This crate records employees and computes their statutory gratuity: fifteen
//! days of wages per year of service, on a twenty-six working-day month, for
//! employees whose rounded tenure reaches five years.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
