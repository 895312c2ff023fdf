use async_trait::async_trait;

use super::employees_model::{Employee, EmployeeUpdate, NewEmployee};
use crate::errors::Result;

/// Persistence contract for employees. Soft-deleted rows are not returned.
#[async_trait]
pub trait EmployeeRepositoryTrait: Send + Sync {
    fn get_by_id(&self, employee_id: &str) -> Result<Employee>;
    fn list(&self) -> Result<Vec<Employee>>;
    /// Includes soft-deleted employees, for reports on past sales.
    fn list_all(&self) -> Result<Vec<Employee>>;
    async fn create(&self, new_employee: NewEmployee) -> Result<Employee>;
    async fn update(&self, employee_update: EmployeeUpdate) -> Result<Employee>;
    async fn soft_delete(&self, employee_id: &str) -> Result<usize>;
}

#[async_trait]
pub trait EmployeeServiceTrait: Send + Sync {
    fn get_employees(&self) -> Result<Vec<Employee>>;
    fn get_employee(&self, employee_id: &str) -> Result<Employee>;
    async fn create_employee(&self, new_employee: NewEmployee) -> Result<Employee>;
    async fn update_employee(&self, employee_update: EmployeeUpdate) -> Result<Employee>;
    async fn delete_employee(&self, employee_id: &str) -> Result<()>;
}
