use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use super::cars_model::{Car, CarSale, CarStatus, CarUpdate, NewCar};
use super::cars_traits::{CarRepositoryTrait, CarServiceTrait};
use crate::employees::EmployeeRepositoryTrait;
use crate::errors::{Error, Result};
use crate::profit_split::ProfitSplit;
use crate::shareholders::ShareholderRepositoryTrait;

/// Service for managing the car inventory.
pub struct CarService {
    repository: Arc<dyn CarRepositoryTrait>,
    shareholder_repository: Arc<dyn ShareholderRepositoryTrait>,
    employee_repository: Arc<dyn EmployeeRepositoryTrait>,
}

impl CarService {
    pub fn new(
        repository: Arc<dyn CarRepositoryTrait>,
        shareholder_repository: Arc<dyn ShareholderRepositoryTrait>,
        employee_repository: Arc<dyn EmployeeRepositoryTrait>,
    ) -> Self {
        CarService {
            repository,
            shareholder_repository,
            employee_repository,
        }
    }

    fn ensure_shareholder_exists(&self, shareholder_id: Option<&str>) -> Result<()> {
        let Some(id) = shareholder_id else {
            return Ok(());
        };
        match self.shareholder_repository.get_by_id(id) {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => Err(Error::invalid_input(format!(
                "Shareholder '{}' does not exist",
                id
            ))),
            Err(e) => Err(e),
        }
    }

    fn ensure_employee_exists(&self, employee_id: Option<&str>) -> Result<()> {
        let Some(id) = employee_id else {
            return Ok(());
        };
        match self.employee_repository.get_by_id(id) {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => Err(Error::invalid_input(format!(
                "Employee '{}' does not exist",
                id
            ))),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl CarServiceTrait for CarService {
    fn get_cars(&self) -> Result<Vec<Car>> {
        self.repository.list(None, None)
    }

    fn list_cars(
        &self,
        status_filter: Option<CarStatus>,
        shareholder_id: Option<&str>,
    ) -> Result<Vec<Car>> {
        self.repository.list(status_filter, shareholder_id)
    }

    fn get_car(&self, car_id: &str) -> Result<Car> {
        self.repository.get_by_id(car_id)
    }

    fn get_car_profit_split(&self, car_id: &str) -> Result<ProfitSplit> {
        Ok(self.repository.get_by_id(car_id)?.profit_split())
    }

    async fn create_car(&self, new_car: NewCar) -> Result<Car> {
        new_car.validate()?;
        self.ensure_shareholder_exists(new_car.shareholder_id.as_deref())?;

        debug!(
            "Creating car {} {} {} priced at {}",
            new_car.year, new_car.make, new_car.model, new_car.price
        );
        let car = self.repository.create(new_car).await?;
        info!("Created car {} ({})", car.id, car.display_name());
        Ok(car)
    }

    async fn update_car(&self, car_update: CarUpdate) -> Result<Car> {
        car_update.validate()?;
        let car_id = car_update.id.clone().unwrap_or_default();
        let existing = self.repository.get_by_id(&car_id)?;

        if existing.is_sold() && car_update.status != CarStatus::Sold {
            return Err(Error::ConstraintViolation(format!(
                "Car {} is sold and its status cannot change",
                car_id
            )));
        }
        if !existing.is_sold() && car_update.status == CarStatus::Sold {
            return Err(Error::ConstraintViolation(format!(
                "Car {} must be sold through a sale, not an update",
                car_id
            )));
        }
        self.ensure_shareholder_exists(car_update.shareholder_id.as_deref())?;

        self.repository.update(car_update).await
    }

    async fn sell_car(&self, car_id: &str, sale: CarSale) -> Result<Car> {
        let existing = self.repository.get_by_id(car_id)?;
        if existing.is_sold() {
            return Err(Error::ConstraintViolation(format!(
                "Car {} is already sold",
                car_id
            )));
        }
        if sale.price.is_some_and(|p| p < 0) {
            return Err(Error::invalid_input("Sale price cannot be negative"));
        }
        self.ensure_employee_exists(sale.sold_by_employee_id.as_deref())?;

        let car = self.repository.record_sale(car_id, sale).await?;
        let split = car.profit_split();
        info!(
            "Sold car {} on {:?} for {} (company {}, shareholder {})",
            car.id, car.sold_at, car.price, split.company_profit, split.shareholder_profit
        );
        Ok(car)
    }

    async fn delete_car(&self, car_id: &str) -> Result<()> {
        let deleted = self.repository.soft_delete(car_id).await?;
        debug!("Soft-deleted {} car row(s) for id {}", deleted, car_id);
        Ok(())
    }
}
