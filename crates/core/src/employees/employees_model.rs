//! Employee domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::profit_split::shareholder_profit_and_percentage;

/// Domain model representing an employee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub monthly_salary: i64,
    /// Share of the company profit paid on each car this employee sells.
    pub commission_percentage: Option<Decimal>,
    pub hired_at: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl Employee {
    pub fn commission_for(&self, company_profit: i64) -> i64 {
        commission_on(company_profit, self.commission_percentage)
    }
}

/// Commission on a sale: the commission percentage of the company profit,
/// rounded the same way as a shareholder's share.
pub fn commission_on(company_profit: i64, commission_percentage: Option<Decimal>) -> i64 {
    match commission_percentage {
        Some(pct) => shareholder_profit_and_percentage(company_profit, pct).shareholder_profit,
        None => 0,
    }
}

/// Input model for creating a new employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub id: Option<String>,
    pub full_name: String,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub monthly_salary: i64,
    pub commission_percentage: Option<Decimal>,
    pub hired_at: NaiveDate,
}

impl NewEmployee {
    pub fn validate(&self) -> Result<()> {
        validate_employee(
            &self.full_name,
            self.monthly_salary,
            self.commission_percentage,
        )
    }
}

/// Input model for updating an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub id: Option<String>,
    pub full_name: String,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub monthly_salary: i64,
    pub commission_percentage: Option<Decimal>,
    pub hired_at: NaiveDate,
}

impl EmployeeUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::invalid_input("Employee ID is required for updates"));
        }
        validate_employee(
            &self.full_name,
            self.monthly_salary,
            self.commission_percentage,
        )
    }
}

fn validate_employee(
    full_name: &str,
    monthly_salary: i64,
    commission_percentage: Option<Decimal>,
) -> Result<()> {
    if full_name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "fullName".to_string(),
        )));
    }
    if monthly_salary < 0 {
        return Err(Error::Validation(ValidationError::OutOfRange {
            field: "monthlySalary".to_string(),
            message: "cannot be negative".to_string(),
        }));
    }
    if let Some(pct) = commission_percentage {
        if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED {
            return Err(Error::Validation(ValidationError::OutOfRange {
                field: "commissionPercentage".to_string(),
                message: "must be between 0 and 100".to_string(),
            }));
        }
    }
    Ok(())
}
