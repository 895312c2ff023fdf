//! Database models for employees.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::utils::{decimal_to_text, now, text_to_decimal};
use dealership_core::employees::{Employee, EmployeeUpdate, NewEmployee};
use dealership_core::errors::{Error, Result};

/// Database model for employees
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::employees)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EmployeeDB {
    pub id: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub monthly_salary: i64,
    pub commission_percentage: Option<String>,
    pub hired_at: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::employees)]
#[diesel(treat_none_as_null = true)]
pub struct EmployeeChangesDB {
    pub full_name: String,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub monthly_salary: i64,
    pub commission_percentage: Option<String>,
    pub hired_at: NaiveDate,
    pub updated_at: NaiveDateTime,
}

impl EmployeeDB {
    pub fn from_new(id: String, new_employee: NewEmployee) -> Self {
        let timestamp = now();
        Self {
            id,
            full_name: new_employee.full_name,
            phone: new_employee.phone,
            position: new_employee.position,
            monthly_salary: new_employee.monthly_salary,
            commission_percentage: decimal_to_text(new_employee.commission_percentage),
            hired_at: new_employee.hired_at,
            created_at: timestamp,
            updated_at: timestamp,
            deleted_at: None,
        }
    }
}

impl From<EmployeeUpdate> for EmployeeChangesDB {
    fn from(update: EmployeeUpdate) -> Self {
        Self {
            full_name: update.full_name,
            phone: update.phone,
            position: update.position,
            monthly_salary: update.monthly_salary,
            commission_percentage: decimal_to_text(update.commission_percentage),
            hired_at: update.hired_at,
            updated_at: now(),
        }
    }
}

impl TryFrom<EmployeeDB> for Employee {
    type Error = Error;

    fn try_from(db: EmployeeDB) -> Result<Self> {
        Ok(Self {
            commission_percentage: text_to_decimal(
                "employees.commission_percentage",
                db.commission_percentage,
            )?,
            id: db.id,
            full_name: db.full_name,
            phone: db.phone,
            position: db.position,
            monthly_salary: db.monthly_salary,
            hired_at: db.hired_at,
            created_at: db.created_at,
            updated_at: db.updated_at,
            deleted_at: db.deleted_at,
        })
    }
}

pub(crate) fn employees_from_rows(rows: Vec<EmployeeDB>) -> Result<Vec<Employee>> {
    rows.into_iter().map(Employee::try_from).collect()
}
