//! Expense domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    Repair,
    Transport,
    Rent,
    Salary,
    Marketing,
    Utilities,
    #[default]
    Other,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Repair => "REPAIR",
            ExpenseCategory::Transport => "TRANSPORT",
            ExpenseCategory::Rent => "RENT",
            ExpenseCategory::Salary => "SALARY",
            ExpenseCategory::Marketing => "MARKETING",
            ExpenseCategory::Utilities => "UTILITIES",
            ExpenseCategory::Other => "OTHER",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "REPAIR" => Ok(ExpenseCategory::Repair),
            "TRANSPORT" => Ok(ExpenseCategory::Transport),
            "RENT" => Ok(ExpenseCategory::Rent),
            "SALARY" => Ok(ExpenseCategory::Salary),
            "MARKETING" => Ok(ExpenseCategory::Marketing),
            "UTILITIES" => Ok(ExpenseCategory::Utilities),
            "OTHER" => Ok(ExpenseCategory::Other),
            other => Err(Error::invalid_input(format!(
                "Unknown expense category '{}'",
                other
            ))),
        }
    }
}

/// Domain model representing an expense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub category: ExpenseCategory,
    pub amount: i64,
    pub spent_at: NaiveDate,
    /// Car the expense was made for, if any.
    pub car_id: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub category: ExpenseCategory,
    pub amount: i64,
    pub spent_at: NaiveDate,
    pub car_id: Option<String>,
    pub notes: Option<String>,
}

impl NewExpense {
    pub fn validate(&self) -> Result<()> {
        validate_expense(&self.title, self.amount)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    pub id: Option<String>,
    pub title: String,
    pub category: ExpenseCategory,
    pub amount: i64,
    pub spent_at: NaiveDate,
    pub car_id: Option<String>,
    pub notes: Option<String>,
}

impl ExpenseUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::invalid_input("Expense ID is required for updates"));
        }
        validate_expense(&self.title, self.amount)
    }
}

fn validate_expense(title: &str, amount: i64) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "title".to_string(),
        )));
    }
    if amount < 0 {
        return Err(Error::Validation(ValidationError::OutOfRange {
            field: "amount".to_string(),
            message: "cannot be negative".to_string(),
        }));
    }
    Ok(())
}
