//! Employees module - staff records and sales commission.

mod employees_model;
mod employees_service;
mod employees_traits;

pub use employees_model::{commission_on, Employee, EmployeeUpdate, NewEmployee};
pub use employees_service::EmployeeService;
pub use employees_traits::{EmployeeRepositoryTrait, EmployeeServiceTrait};
