//! SQLite storage implementation for employees.

mod model;
mod repository;

pub use model::{EmployeeChangesDB, EmployeeDB};
pub use repository::EmployeeRepository;
