//! Database models for expenses.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use std::str::FromStr;

use crate::utils::now;
use dealership_core::errors::{Error, Result};
use dealership_core::expenses::{Expense, ExpenseCategory, ExpenseUpdate, NewExpense};

/// Database model for expenses
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExpenseDB {
    pub id: String,
    pub title: String,
    pub category: String,
    pub amount: i64,
    pub spent_at: NaiveDate,
    pub car_id: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(treat_none_as_null = true)]
pub struct ExpenseChangesDB {
    pub title: String,
    pub category: String,
    pub amount: i64,
    pub spent_at: NaiveDate,
    pub car_id: Option<String>,
    pub notes: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl ExpenseDB {
    pub fn from_new(id: String, new_expense: NewExpense) -> Self {
        let timestamp = now();
        Self {
            id,
            title: new_expense.title,
            category: new_expense.category.as_str().to_string(),
            amount: new_expense.amount,
            spent_at: new_expense.spent_at,
            car_id: new_expense.car_id,
            notes: new_expense.notes,
            created_at: timestamp,
            updated_at: timestamp,
            deleted_at: None,
        }
    }
}

impl From<ExpenseUpdate> for ExpenseChangesDB {
    fn from(update: ExpenseUpdate) -> Self {
        Self {
            title: update.title,
            category: update.category.as_str().to_string(),
            amount: update.amount,
            spent_at: update.spent_at,
            car_id: update.car_id,
            notes: update.notes,
            updated_at: now(),
        }
    }
}

impl TryFrom<ExpenseDB> for Expense {
    type Error = Error;

    fn try_from(db: ExpenseDB) -> Result<Self> {
        Ok(Self {
            category: ExpenseCategory::from_str(&db.category)?,
            id: db.id,
            title: db.title,
            amount: db.amount,
            spent_at: db.spent_at,
            car_id: db.car_id,
            notes: db.notes,
            created_at: db.created_at,
            updated_at: db.updated_at,
            deleted_at: db.deleted_at,
        })
    }
}
