use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::model::{employees_from_rows, EmployeeChangesDB, EmployeeDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::{not_found, IntoCore};
use crate::schema::employees;
use crate::utils::now;
use dealership_core::employees::{Employee, EmployeeRepositoryTrait, EmployeeUpdate, NewEmployee};
use dealership_core::errors::{Error, Result};

pub struct EmployeeRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl EmployeeRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        EmployeeRepository { pool, writer }
    }
}

fn load_active(conn: &mut SqliteConnection, employee_id: &str) -> Result<Employee> {
    employees::table
        .find(employee_id)
        .filter(employees::deleted_at.is_null())
        .select(EmployeeDB::as_select())
        .first::<EmployeeDB>(conn)
        .optional()
        .into_core()?
        .ok_or_else(|| not_found("Employee", employee_id))
        .and_then(Employee::try_from)
}

#[async_trait]
impl EmployeeRepositoryTrait for EmployeeRepository {
    fn get_by_id(&self, employee_id: &str) -> Result<Employee> {
        let mut conn = get_connection(&self.pool)?;
        load_active(&mut conn, employee_id)
    }

    fn list(&self) -> Result<Vec<Employee>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = employees::table
            .filter(employees::deleted_at.is_null())
            .order(employees::full_name.asc())
            .select(EmployeeDB::as_select())
            .load::<EmployeeDB>(&mut conn)
            .into_core()?;
        employees_from_rows(rows)
    }

    fn list_all(&self) -> Result<Vec<Employee>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = employees::table
            .order(employees::full_name.asc())
            .select(EmployeeDB::as_select())
            .load::<EmployeeDB>(&mut conn)
            .into_core()?;
        employees_from_rows(rows)
    }

    async fn create(&self, new_employee: NewEmployee) -> Result<Employee> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Employee> {
                let employee_id = new_employee
                    .id
                    .clone()
                    .unwrap_or_else(|| Uuid::new_v4().to_string());
                let employee_db = EmployeeDB::from_new(employee_id, new_employee);

                let result_db = diesel::insert_into(employees::table)
                    .values(&employee_db)
                    .returning(EmployeeDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Employee::try_from(result_db)
            })
            .await
    }

    async fn update(&self, employee_update: EmployeeUpdate) -> Result<Employee> {
        let employee_id = employee_update
            .id
            .clone()
            .ok_or_else(|| Error::invalid_input("Employee id is required for an update"))?;
        let changes = EmployeeChangesDB::from(employee_update);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Employee> {
                let updated = diesel::update(
                    employees::table
                        .find(&employee_id)
                        .filter(employees::deleted_at.is_null()),
                )
                .set(&changes)
                .execute(conn)
                .into_core()?;
                if updated == 0 {
                    return Err(not_found("Employee", &employee_id));
                }
                load_active(conn, &employee_id)
            })
            .await
    }

    async fn soft_delete(&self, employee_id: &str) -> Result<usize> {
        let employee_id = employee_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let timestamp = now();
                diesel::update(
                    employees::table
                        .find(&employee_id)
                        .filter(employees::deleted_at.is_null()),
                )
                .set((
                    employees::deleted_at.eq(Some(timestamp)),
                    employees::updated_at.eq(timestamp),
                ))
                .execute(conn)
                .into_core()
            })
            .await
    }
}
