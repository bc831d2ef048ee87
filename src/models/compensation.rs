//! Salary components consumed by the gratuity calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The salary components in force when gratuity is computed.
///
/// Only current values are known; historical salary is not tracked.
///
/// # Example
///
/// ```
/// use gratuity_engine::models::CompensationInput;
/// use rust_decimal::Decimal;
///
/// let pay = CompensationInput {
///     basic_salary: Decimal::new(20000, 0),
///     dearness_allowance: Decimal::new(6000, 0),
/// };
/// assert_eq!(pay.wages().unwrap(), Decimal::new(26000, 0));
/// assert!(pay.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationInput {
    /// Monthly basic salary.
    pub basic_salary: Decimal,
    /// Monthly dearness allowance.
    pub dearness_allowance: Decimal,
}

impl CompensationInput {
    /// Returns basic salary plus dearness allowance.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AmountOverflow`] if the sum exceeds the decimal range.
    pub fn wages(&self) -> EngineResult<Decimal> {
        self.basic_salary
            .checked_add(self.dearness_allowance)
            .ok_or_else(|| EngineError::AmountOverflow {
                field: "wages".to_string(),
            })
    }

    /// Rejects negative components, naming the first offending field.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, value) in [
            ("basic_salary", self.basic_salary),
            ("dearness_allowance", self.dearness_allowance),
        ] {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(EngineError::NegativeMoney {
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}
