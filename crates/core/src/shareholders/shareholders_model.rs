//! Shareholder domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cars::CarStatus;
use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a shareholder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shareholder {
    pub id: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

/// Input model for creating a new shareholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShareholder {
    pub id: Option<String>,
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
}

impl NewShareholder {
    pub fn validate(&self) -> Result<()> {
        validate_contact(&self.full_name, self.email.as_deref())
    }
}

/// Input model for updating a shareholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareholderUpdate {
    pub id: Option<String>,
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
}

impl ShareholderUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::invalid_input(
                "Shareholder ID is required for updates",
            ));
        }
        validate_contact(&self.full_name, self.email.as_deref())
    }
}

fn validate_contact(full_name: &str, email: Option<&str>) -> Result<()> {
    if full_name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "fullName".to_string(),
        )));
    }
    if let Some(email) = email {
        if !email.trim().is_empty() && !email.contains('@') {
            return Err(Error::invalid_input(format!(
                "'{}' is not a valid email address",
                email
            )));
        }
    }
    Ok(())
}

/// One car on a shareholder statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShareholderCarLine {
    pub car_id: String,
    pub car_name: String,
    pub status: CarStatus,
    pub sold_at: Option<NaiveDate>,
    pub price: i64,
    pub investment_amount: i64,
    pub shareholder_percentage: Decimal,
    pub shareholder_profit: i64,
}

/// What a shareholder has put in and what they are owed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShareholderStatement {
    pub shareholder: Shareholder,
    pub total_investment: i64,
    /// Shareholder profit on cars already sold.
    pub realized_profit: i64,
    /// Shareholder profit on unsold cars at their current price.
    pub pending_profit: i64,
    pub cars: Vec<ShareholderCarLine>,
}
