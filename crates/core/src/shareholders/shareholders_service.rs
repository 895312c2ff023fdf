use std::sync::Arc;

use async_trait::async_trait;
use log::info;
use rust_decimal::Decimal;

use super::shareholders_model::{
    NewShareholder, Shareholder, ShareholderCarLine, ShareholderStatement, ShareholderUpdate,
};
use super::shareholders_traits::{ShareholderRepositoryTrait, ShareholderServiceTrait};
use crate::cars::CarRepositoryTrait;
use crate::errors::{Error, Result};

pub struct ShareholderService {
    repository: Arc<dyn ShareholderRepositoryTrait>,
    car_repository: Arc<dyn CarRepositoryTrait>,
}

impl ShareholderService {
    pub fn new(
        repository: Arc<dyn ShareholderRepositoryTrait>,
        car_repository: Arc<dyn CarRepositoryTrait>,
    ) -> Self {
        ShareholderService {
            repository,
            car_repository,
        }
    }
}

#[async_trait]
impl ShareholderServiceTrait for ShareholderService {
    fn get_shareholders(&self) -> Result<Vec<Shareholder>> {
        self.repository.list()
    }

    fn get_shareholder(&self, shareholder_id: &str) -> Result<Shareholder> {
        self.repository.get_by_id(shareholder_id)
    }

    async fn create_shareholder(&self, new_shareholder: NewShareholder) -> Result<Shareholder> {
        new_shareholder.validate()?;
        let shareholder = self.repository.create(new_shareholder).await?;
        info!("Created shareholder {}", shareholder.id);
        Ok(shareholder)
    }

    async fn update_shareholder(
        &self,
        shareholder_update: ShareholderUpdate,
    ) -> Result<Shareholder> {
        shareholder_update.validate()?;
        self.repository.update(shareholder_update).await
    }

    async fn delete_shareholder(&self, shareholder_id: &str) -> Result<()> {
        let open_cars = self
            .car_repository
            .list(None, Some(shareholder_id))?
            .into_iter()
            .filter(|car| !car.is_sold())
            .count();
        if open_cars > 0 {
            return Err(Error::ConstraintViolation(format!(
                "Shareholder {} still holds a share in {} unsold car(s)",
                shareholder_id, open_cars
            )));
        }
        self.repository.soft_delete(shareholder_id).await?;
        Ok(())
    }

    fn get_shareholder_statement(&self, shareholder_id: &str) -> Result<ShareholderStatement> {
        let shareholder = self.repository.get_by_id(shareholder_id)?;
        let cars = self.car_repository.list(None, Some(shareholder_id))?;

        let mut total_investment = 0i64;
        let mut realized_profit = 0i64;
        let mut pending_profit = 0i64;
        let mut lines = Vec::with_capacity(cars.len());

        for car in &cars {
            let split = car.profit_split();
            let investment = car.investment_amount.unwrap_or(0);
            total_investment += investment;
            if car.is_sold() {
                realized_profit += split.shareholder_profit;
            } else {
                pending_profit += split.shareholder_profit;
            }
            lines.push(ShareholderCarLine {
                car_id: car.id.clone(),
                car_name: car.display_name(),
                status: car.status,
                sold_at: car.sold_at,
                price: car.price,
                investment_amount: investment,
                shareholder_percentage: split.shareholder_percentage.unwrap_or(Decimal::ZERO),
                shareholder_profit: split.shareholder_profit,
            });
        }

        Ok(ShareholderStatement {
            shareholder,
            total_investment,
            realized_profit,
            pending_profit,
            cars: lines,
        })
    }
}
