//! SQLite storage implementation for expenses.

mod model;
mod repository;

pub use model::{ExpenseChangesDB, ExpenseDB};
pub use repository::ExpenseRepository;
