//! Employee model and related types.
//!
//! This module defines the [`Employee`] record kept by the employee store and
//! the [`NewEmployee`] draft that callers submit before an identifier exists.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::CompensationInput;

/// An employee record as persisted by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Identifier assigned by the store.
    pub id: u64,
    /// The employee's full name.
    pub name: String,
    /// The employee's date of birth, if recorded.
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Postal address, if recorded.
    #[serde(default)]
    pub address: Option<String>,
    /// The date the employee joined. Tenure is measured from here.
    pub join_date: NaiveDate,
    /// Current monthly basic salary.
    pub basic_salary: Decimal,
    /// Current monthly dearness allowance.
    pub dearness_allowance: Decimal,
}

impl Employee {
    /// Builds a stored record from a validated draft and its assigned identifier.
    pub fn from_new(id: u64, new: NewEmployee) -> Self {
        Self {
            id,
            name: new.name,
            date_of_birth: new.date_of_birth,
            address: new.address,
            join_date: new.join_date,
            basic_salary: new.basic_salary,
            dearness_allowance: new.dearness_allowance,
        }
    }

    /// Returns the salary components used for gratuity.
    ///
    /// # Examples
    ///
    /// ```
    /// use gratuity_engine::models::Employee;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: 1,
    ///     name: "Asha Rao".to_string(),
    ///     date_of_birth: None,
    ///     address: None,
    ///     join_date: NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
    ///     basic_salary: Decimal::new(20000, 0),
    ///     dearness_allowance: Decimal::new(6000, 0),
    /// };
    /// assert_eq!(employee.compensation().wages().unwrap(), Decimal::new(26000, 0));
    /// ```
    pub fn compensation(&self) -> CompensationInput {
        CompensationInput {
            basic_salary: self.basic_salary,
            dearness_allowance: self.dearness_allowance,
        }
    }
}

/// An employee record that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// The employee's full name.
    pub name: String,
    /// The employee's date of birth, if known.
    pub date_of_birth: Option<NaiveDate>,
    /// Postal address, if known.
    pub address: Option<String>,
    /// The date the employee joined.
    pub join_date: NaiveDate,
    /// Current monthly basic salary.
    pub basic_salary: Decimal,
    /// Current monthly dearness allowance.
    pub dearness_allowance: Decimal,
}

impl NewEmployee {
    /// Checks the draft before it is handed to a store.
    ///
    /// The name must contain a non-whitespace character, salary components
    /// must not be negative, and a date of birth may not fall after the join date.
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "name".to_string(),
                message: "must not be blank".to_string(),
            });
        }

        self.compensation().validate()?;

        if let Some(dob) = self.date_of_birth {
            if dob > self.join_date {
                return Err(EngineError::InvalidEmployee {
                    field: "date_of_birth".to_string(),
                    message: format!("{} is after join date {}", dob, self.join_date),
                });
            }
        }

        Ok(())
    }

    fn compensation(&self) -> CompensationInput {
        CompensationInput {
            basic_salary: self.basic_salary,
            dearness_allowance: self.dearness_allowance,
        }
    }
}
