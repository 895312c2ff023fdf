//! Car repository and service traits.
//!
//! These traits define the contract for inventory operations without any
//! database-specific types.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::cars_model::{Car, CarSale, CarStatus, CarUpdate, NewCar};
use crate::errors::Result;
use crate::profit_split::ProfitSplit;

/// Persistence contract for cars.
///
/// Soft-deleted cars are invisible to every read method: `get_by_id`
/// reports them as not found.
#[async_trait]
pub trait CarRepositoryTrait: Send + Sync {
    fn get_by_id(&self, car_id: &str) -> Result<Car>;

    /// Lists cars, optionally filtered by status and shareholder.
    fn list(
        &self,
        status_filter: Option<CarStatus>,
        shareholder_id: Option<&str>,
    ) -> Result<Vec<Car>>;

    /// Cars sold between `from` and `to`, both inclusive.
    fn list_sold_between(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Car>>;

    async fn create(&self, new_car: NewCar) -> Result<Car>;

    async fn update(&self, car_update: CarUpdate) -> Result<Car>;

    /// Marks the car as sold with the sale details.
    async fn record_sale(&self, car_id: &str, sale: CarSale) -> Result<Car>;

    /// Returns the number of rows marked deleted.
    async fn soft_delete(&self, car_id: &str) -> Result<usize>;
}

/// Inventory operations with business validation.
#[async_trait]
pub trait CarServiceTrait: Send + Sync {
    fn get_cars(&self) -> Result<Vec<Car>>;

    fn list_cars(
        &self,
        status_filter: Option<CarStatus>,
        shareholder_id: Option<&str>,
    ) -> Result<Vec<Car>>;

    fn get_car(&self, car_id: &str) -> Result<Car>;

    fn get_car_profit_split(&self, car_id: &str) -> Result<ProfitSplit>;

    async fn create_car(&self, new_car: NewCar) -> Result<Car>;

    async fn update_car(&self, car_update: CarUpdate) -> Result<Car>;

    async fn sell_car(&self, car_id: &str, sale: CarSale) -> Result<Car>;

    async fn delete_car(&self, car_id: &str) -> Result<()>;
}
