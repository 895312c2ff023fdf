use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use super::employees_model::{Employee, EmployeeUpdate, NewEmployee};
use super::employees_traits::{EmployeeRepositoryTrait, EmployeeServiceTrait};
use crate::errors::Result;

pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepositoryTrait>,
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn EmployeeRepositoryTrait>) -> Self {
        EmployeeService { repository }
    }
}

#[async_trait]
impl EmployeeServiceTrait for EmployeeService {
    fn get_employees(&self) -> Result<Vec<Employee>> {
        self.repository.list()
    }

    fn get_employee(&self, employee_id: &str) -> Result<Employee> {
        self.repository.get_by_id(employee_id)
    }

    async fn create_employee(&self, new_employee: NewEmployee) -> Result<Employee> {
        new_employee.validate()?;
        let employee = self.repository.create(new_employee).await?;
        info!("Created employee {}", employee.id);
        Ok(employee)
    }

    async fn update_employee(&self, employee_update: EmployeeUpdate) -> Result<Employee> {
        employee_update.validate()?;
        self.repository.update(employee_update).await
    }

    // Sold cars keep their seller id; reports still resolve it.
    async fn delete_employee(&self, employee_id: &str) -> Result<()> {
        self.repository.soft_delete(employee_id).await?;
        Ok(())
    }
}
