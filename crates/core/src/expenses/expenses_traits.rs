use async_trait::async_trait;
use chrono::NaiveDate;

use super::expenses_model::{Expense, ExpenseUpdate, NewExpense};
use crate::errors::Result;

/// Persistence contract for expenses. Soft-deleted rows are not returned.
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    fn get_by_id(&self, expense_id: &str) -> Result<Expense>;

    /// Expenses spent within the optional inclusive date bounds.
    fn list(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Vec<Expense>>;

    async fn create(&self, new_expense: NewExpense) -> Result<Expense>;
    async fn update(&self, expense_update: ExpenseUpdate) -> Result<Expense>;
    async fn soft_delete(&self, expense_id: &str) -> Result<usize>;
}

#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    fn get_expenses(&self, from: Option<NaiveDate>, to: Option<NaiveDate>)
        -> Result<Vec<Expense>>;
    fn get_expense(&self, expense_id: &str) -> Result<Expense>;
    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense>;
    async fn update_expense(&self, expense_update: ExpenseUpdate) -> Result<Expense>;
    async fn delete_expense(&self, expense_id: &str) -> Result<()>;
}
