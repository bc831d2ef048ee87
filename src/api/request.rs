//! Request types for the gratuity API.
//!
//! Dates arrive as plain strings and are parsed strictly here so a malformed
//! date becomes an `INVALID_DATE` error naming the field, rather than a generic
//! JSON error.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::parse_calendar_date;
use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationInput, NewEmployee, TenureInterval};

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// The employee's full name.
    pub name: String,
    /// Date of birth as `YYYY-MM-DD`. Empty means not recorded.
    #[serde(default)]
    pub date_of_birth: Option<String>,
    /// Postal address. Empty means not recorded.
    #[serde(default)]
    pub address: Option<String>,
    /// Join date as `YYYY-MM-DD`.
    pub join_date: String,
    /// Monthly basic salary.
    pub basic_salary: Decimal,
    /// Monthly dearness allowance.
    pub dearness_allowance: Decimal,
}

impl TryFrom<CreateEmployeeRequest> for NewEmployee {
    type Error = EngineError;

    fn try_from(req: CreateEmployeeRequest) -> EngineResult<Self> {
        let date_of_birth = non_blank(req.date_of_birth)
            .map(|dob| parse_calendar_date("date_of_birth", &dob))
            .transpose()?;

        Ok(NewEmployee {
            name: req.name.trim().to_string(),
            date_of_birth,
            address: non_blank(req.address).map(|a| a.trim().to_string()),
            join_date: parse_calendar_date("join_date", &req.join_date)?,
            basic_salary: req.basic_salary,
            dearness_allowance: req.dearness_allowance,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Request body for `POST /gratuity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GratuityRequest {
    /// First day of service as `YYYY-MM-DD`.
    pub tenure_start: String,
    /// Reference exit date as `YYYY-MM-DD`.
    pub tenure_end: String,
    /// Monthly basic salary.
    pub basic_salary: Decimal,
    /// Monthly dearness allowance.
    pub dearness_allowance: Decimal,
}

impl GratuityRequest {
    /// Parses the request into calculator inputs.
    pub fn into_inputs(self) -> EngineResult<(TenureInterval, CompensationInput)> {
        let start = parse_calendar_date("tenure_start", &self.tenure_start)?;
        let end = parse_calendar_date("tenure_end", &self.tenure_end)?;

        Ok((
            TenureInterval::new(start, end),
            CompensationInput {
                basic_salary: self.basic_salary,
                dearness_allowance: self.dearness_allowance,
            },
        ))
    }
}

/// Query string for `GET /employees/:id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatementQuery {
    /// Exit date as `YYYY-MM-DD`; today when absent.
    #[serde(default)]
    pub exit_date: Option<String>,
}

impl StatementQuery {
    /// Resolves the exit date, falling back to `today`.
    pub fn exit_date_or(&self, today: NaiveDate) -> EngineResult<NaiveDate> {
        match non_blank(self.exit_date.clone()) {
            Some(value) => parse_calendar_date("exit_date", &value),
            None => Ok(today),
        }
    }
}
