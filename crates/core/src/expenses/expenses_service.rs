use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info};

use super::expenses_model::{Expense, ExpenseUpdate, NewExpense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::cars::CarRepositoryTrait;
use crate::errors::{Error, Result};

pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
    car_repository: Arc<dyn CarRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(
        repository: Arc<dyn ExpenseRepositoryTrait>,
        car_repository: Arc<dyn CarRepositoryTrait>,
    ) -> Self {
        ExpenseService {
            repository,
            car_repository,
        }
    }

    fn ensure_car_exists(&self, car_id: Option<&str>) -> Result<()> {
        let Some(id) = car_id else {
            return Ok(());
        };
        match self.car_repository.get_by_id(id) {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => Err(Error::invalid_input(format!(
                "Car '{}' does not exist",
                id
            ))),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    fn get_expenses(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<Expense>> {
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(Error::invalid_input(format!(
                    "Start date {} is after end date {}",
                    from, to
                )));
            }
        }
        self.repository.list(from, to)
    }

    fn get_expense(&self, expense_id: &str) -> Result<Expense> {
        self.repository.get_by_id(expense_id)
    }

    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense> {
        new_expense.validate()?;
        self.ensure_car_exists(new_expense.car_id.as_deref())?;
        debug!(
            "Recording {} expense of {} on {}",
            new_expense.category, new_expense.amount, new_expense.spent_at
        );
        let expense = self.repository.create(new_expense).await?;
        info!("Created expense {}", expense.id);
        Ok(expense)
    }

    async fn update_expense(&self, expense_update: ExpenseUpdate) -> Result<Expense> {
        expense_update.validate()?;
        self.ensure_car_exists(expense_update.car_id.as_deref())?;
        self.repository.update(expense_update).await
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<()> {
        self.repository.soft_delete(expense_id).await?;
        Ok(())
    }
}
