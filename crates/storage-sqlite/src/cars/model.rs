//! Database models for cars.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use std::str::FromStr;

use crate::utils::{decimal_to_text, now, text_to_decimal};
use dealership_core::cars::{Car, CarStatus, CarUpdate, NewCar};
use dealership_core::errors::{Error, Result};

/// Database model for cars
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::cars)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CarDB {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i64>,
    pub purchase_price: i64,
    pub price: i64,
    pub status: String,
    pub sold_at: Option<NaiveDate>,
    pub sold_by_employee_id: Option<String>,
    pub shareholder_id: Option<String>,
    pub shareholder_percentage: Option<String>,
    pub investment_amount: Option<i64>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

/// Editable columns of a car. Sale columns are only written by `record_sale`.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::cars)]
#[diesel(treat_none_as_null = true)]
pub struct CarChangesDB {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i64>,
    pub purchase_price: i64,
    pub price: i64,
    pub status: String,
    pub shareholder_id: Option<String>,
    pub shareholder_percentage: Option<String>,
    pub investment_amount: Option<i64>,
    pub notes: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl CarDB {
    pub fn from_new(id: String, new_car: NewCar) -> Self {
        let timestamp = now();
        Self {
            id,
            make: new_car.make,
            model: new_car.model,
            year: new_car.year,
            vin: new_car.vin,
            color: new_car.color,
            mileage: new_car.mileage,
            purchase_price: new_car.purchase_price,
            price: new_car.price,
            status: new_car.status.as_str().to_string(),
            sold_at: None,
            sold_by_employee_id: None,
            shareholder_id: new_car.shareholder_id,
            shareholder_percentage: decimal_to_text(new_car.shareholder_percentage),
            investment_amount: new_car.investment_amount,
            notes: new_car.notes,
            created_at: timestamp,
            updated_at: timestamp,
            deleted_at: None,
        }
    }
}

impl From<CarUpdate> for CarChangesDB {
    fn from(update: CarUpdate) -> Self {
        Self {
            make: update.make,
            model: update.model,
            year: update.year,
            vin: update.vin,
            color: update.color,
            mileage: update.mileage,
            purchase_price: update.purchase_price,
            price: update.price,
            status: update.status.as_str().to_string(),
            shareholder_id: update.shareholder_id,
            shareholder_percentage: decimal_to_text(update.shareholder_percentage),
            investment_amount: update.investment_amount,
            notes: update.notes,
            updated_at: now(),
        }
    }
}

// Conversion to domain model
impl TryFrom<CarDB> for Car {
    type Error = Error;

    fn try_from(db: CarDB) -> Result<Self> {
        Ok(Self {
            status: CarStatus::from_str(&db.status)?,
            shareholder_percentage: text_to_decimal(
                "cars.shareholder_percentage",
                db.shareholder_percentage,
            )?,
            id: db.id,
            make: db.make,
            model: db.model,
            year: db.year,
            vin: db.vin,
            color: db.color,
            mileage: db.mileage,
            purchase_price: db.purchase_price,
            price: db.price,
            sold_at: db.sold_at,
            sold_by_employee_id: db.sold_by_employee_id,
            shareholder_id: db.shareholder_id,
            investment_amount: db.investment_amount,
            notes: db.notes,
            created_at: db.created_at,
            updated_at: db.updated_at,
            deleted_at: db.deleted_at,
        })
    }
}

pub(crate) fn cars_from_rows(rows: Vec<CarDB>) -> Result<Vec<Car>> {
    rows.into_iter().map(Car::try_from).collect()
}
