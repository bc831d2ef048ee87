//! Core data models for the Gratuity Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod compensation;
mod employee;
mod gratuity;
mod tenure;

pub use compensation::CompensationInput;
pub use employee::{Employee, NewEmployee};
pub use gratuity::{GratuityResult, GratuityStatement};
pub use tenure::{ServicePeriod, TenureInterval};
