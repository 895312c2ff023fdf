use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::model::{ExpenseChangesDB, ExpenseDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::{not_found, IntoCore};
use crate::schema::expenses;
use crate::utils::now;
use dealership_core::errors::{Error, Result};
use dealership_core::expenses::{Expense, ExpenseRepositoryTrait, ExpenseUpdate, NewExpense};

pub struct ExpenseRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl ExpenseRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        ExpenseRepository { pool, writer }
    }
}

fn load_active(conn: &mut SqliteConnection, expense_id: &str) -> Result<Expense> {
    expenses::table
        .find(expense_id)
        .filter(expenses::deleted_at.is_null())
        .select(ExpenseDB::as_select())
        .first::<ExpenseDB>(conn)
        .optional()
        .into_core()?
        .ok_or_else(|| not_found("Expense", expense_id))
        .and_then(Expense::try_from)
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    fn get_by_id(&self, expense_id: &str) -> Result<Expense> {
        let mut conn = get_connection(&self.pool)?;
        load_active(&mut conn, expense_id)
    }

    fn list(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = expenses::table
            .filter(expenses::deleted_at.is_null())
            .into_boxed();
        if let Some(from) = from {
            query = query.filter(expenses::spent_at.ge(from));
        }
        if let Some(to) = to {
            query = query.filter(expenses::spent_at.le(to));
        }

        let rows = query
            .order((expenses::spent_at.desc(), expenses::id.asc()))
            .select(ExpenseDB::as_select())
            .load::<ExpenseDB>(&mut conn)
            .into_core()?;
        rows.into_iter().map(Expense::try_from).collect()
    }

    async fn create(&self, new_expense: NewExpense) -> Result<Expense> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let expense_id = new_expense
                    .id
                    .clone()
                    .unwrap_or_else(|| Uuid::new_v4().to_string());
                let expense_db = ExpenseDB::from_new(expense_id, new_expense);

                let result_db = diesel::insert_into(expenses::table)
                    .values(&expense_db)
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Expense::try_from(result_db)
            })
            .await
    }

    async fn update(&self, expense_update: ExpenseUpdate) -> Result<Expense> {
        let expense_id = expense_update
            .id
            .clone()
            .ok_or_else(|| Error::invalid_input("Expense id is required for an update"))?;
        let changes = ExpenseChangesDB::from(expense_update);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let updated = diesel::update(
                    expenses::table
                        .find(&expense_id)
                        .filter(expenses::deleted_at.is_null()),
                )
                .set(&changes)
                .execute(conn)
                .into_core()?;
                if updated == 0 {
                    return Err(not_found("Expense", &expense_id));
                }
                load_active(conn, &expense_id)
            })
            .await
    }

    async fn soft_delete(&self, expense_id: &str) -> Result<usize> {
        let expense_id = expense_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let timestamp = now();
                diesel::update(
                    expenses::table
                        .find(&expense_id)
                        .filter(expenses::deleted_at.is_null()),
                )
                .set((
                    expenses::deleted_at.eq(Some(timestamp)),
                    expenses::updated_at.eq(timestamp),
                ))
                .execute(conn)
                .into_core()
            })
            .await
    }
}
