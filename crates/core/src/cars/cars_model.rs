//! Car domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::MIN_MODEL_YEAR;
use crate::errors::{Error, Result, ValidationError};
use crate::profit_split::ProfitSplit;

/// Where a car is in the sales cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarStatus {
    #[default]
    Available,
    Reserved,
    Sold,
}

impl CarStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarStatus::Available => "AVAILABLE",
            CarStatus::Reserved => "RESERVED",
            CarStatus::Sold => "SOLD",
        }
    }
}

impl fmt::Display for CarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "AVAILABLE" => Ok(CarStatus::Available),
            "RESERVED" => Ok(CarStatus::Reserved),
            "SOLD" => Ok(CarStatus::Sold),
            other => Err(Error::invalid_input(format!("Unknown car status '{}'", other))),
        }
    }
}

/// Domain model representing a car in the inventory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i64>,
    pub purchase_price: i64,
    pub price: i64,
    pub status: CarStatus,
    pub sold_at: Option<NaiveDate>,
    pub sold_by_employee_id: Option<String>,
    pub shareholder_id: Option<String>,
    pub shareholder_percentage: Option<Decimal>,
    pub investment_amount: Option<i64>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl Car {
    /// Split of this car's price. Recomputed on every call.
    pub fn profit_split(&self) -> ProfitSplit {
        ProfitSplit::compute(self.price, self.shareholder_percentage)
    }

    pub fn is_sold(&self) -> bool {
        self.status == CarStatus::Sold
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

/// Input model for creating a new car.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCar {
    pub id: Option<String>,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i64>,
    pub purchase_price: i64,
    pub price: i64,
    #[serde(default)]
    pub status: CarStatus,
    pub shareholder_id: Option<String>,
    pub shareholder_percentage: Option<Decimal>,
    pub investment_amount: Option<i64>,
    pub notes: Option<String>,
}

impl NewCar {
    pub fn validate(&self) -> Result<()> {
        validate_car_fields(&CarFields {
            make: &self.make,
            model: &self.model,
            year: self.year,
            mileage: self.mileage,
            purchase_price: self.purchase_price,
            price: self.price,
            shareholder_id: self.shareholder_id.as_deref(),
            shareholder_percentage: self.shareholder_percentage,
            investment_amount: self.investment_amount,
        })?;
        if self.status == CarStatus::Sold {
            return Err(Error::invalid_input(
                "A new car cannot be created as sold; record the sale instead",
            ));
        }
        Ok(())
    }
}

/// Input model for updating an existing car.
///
/// Sale fields are not part of an update; use [`CarSale`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarUpdate {
    pub id: Option<String>,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i64>,
    pub purchase_price: i64,
    pub price: i64,
    pub status: CarStatus,
    pub shareholder_id: Option<String>,
    pub shareholder_percentage: Option<Decimal>,
    pub investment_amount: Option<i64>,
    pub notes: Option<String>,
}

impl CarUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::invalid_input("Car ID is required for updates"));
        }
        validate_car_fields(&CarFields {
            make: &self.make,
            model: &self.model,
            year: self.year,
            mileage: self.mileage,
            purchase_price: self.purchase_price,
            price: self.price,
            shareholder_id: self.shareholder_id.as_deref(),
            shareholder_percentage: self.shareholder_percentage,
            investment_amount: self.investment_amount,
        })
    }
}

/// Sale of a car.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarSale {
    pub sold_at: NaiveDate,
    /// Final price, if it differs from the listed one.
    pub price: Option<i64>,
    pub sold_by_employee_id: Option<String>,
}

struct CarFields<'a> {
    make: &'a str,
    model: &'a str,
    year: i32,
    mileage: Option<i64>,
    purchase_price: i64,
    price: i64,
    shareholder_id: Option<&'a str>,
    shareholder_percentage: Option<Decimal>,
    investment_amount: Option<i64>,
}

fn out_of_range(field: &str, message: impl Into<String>) -> Error {
    Error::Validation(ValidationError::OutOfRange {
        field: field.to_string(),
        message: message.into(),
    })
}

fn validate_car_fields(fields: &CarFields<'_>) -> Result<()> {
    if fields.make.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "make".to_string(),
        )));
    }
    if fields.model.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "model".to_string(),
        )));
    }

    let max_year = Utc::now().year() + 1;
    if fields.year < MIN_MODEL_YEAR || fields.year > max_year {
        return Err(out_of_range(
            "year",
            format!("must be between {} and {}", MIN_MODEL_YEAR, max_year),
        ));
    }
    if fields.mileage.is_some_and(|m| m < 0) {
        return Err(out_of_range("mileage", "cannot be negative"));
    }
    if fields.purchase_price < 0 {
        return Err(out_of_range("purchasePrice", "cannot be negative"));
    }
    if fields.price < 0 {
        return Err(out_of_range("price", "cannot be negative"));
    }
    if fields.investment_amount.is_some_and(|a| a < 0) {
        return Err(out_of_range("investmentAmount", "cannot be negative"));
    }

    if let Some(pct) = fields.shareholder_percentage {
        if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED {
            return Err(out_of_range(
                "shareholderPercentage",
                "must be between 0 and 100",
            ));
        }
        if fields.shareholder_id.is_none() {
            return Err(Error::invalid_input(
                "A shareholder percentage requires a shareholder",
            ));
        }
    }
    if fields.investment_amount.is_some() && fields.shareholder_id.is_none() {
        return Err(Error::invalid_input(
            "An investment amount requires a shareholder",
        ));
    }
    Ok(())
}
