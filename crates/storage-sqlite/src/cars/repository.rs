use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::model::{cars_from_rows, CarChangesDB, CarDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::{not_found, IntoCore};
use crate::schema::cars;
use crate::utils::now;
use dealership_core::cars::{Car, CarRepositoryTrait, CarSale, CarStatus, CarUpdate, NewCar};
use dealership_core::errors::{Error, Result};

pub struct CarRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl CarRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        CarRepository { pool, writer }
    }
}

fn load_active(conn: &mut SqliteConnection, car_id: &str) -> Result<Car> {
    cars::table
        .find(car_id)
        .filter(cars::deleted_at.is_null())
        .select(CarDB::as_select())
        .first::<CarDB>(conn)
        .optional()
        .into_core()?
        .ok_or_else(|| not_found("Car", car_id))
        .and_then(Car::try_from)
}

#[async_trait]
impl CarRepositoryTrait for CarRepository {
    fn get_by_id(&self, car_id: &str) -> Result<Car> {
        let mut conn = get_connection(&self.pool)?;
        load_active(&mut conn, car_id)
    }

    fn list(
        &self,
        status_filter: Option<CarStatus>,
        shareholder_id: Option<&str>,
    ) -> Result<Vec<Car>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = cars::table
            .filter(cars::deleted_at.is_null())
            .into_boxed();
        if let Some(status) = status_filter {
            query = query.filter(cars::status.eq(status.as_str()));
        }
        if let Some(owner) = shareholder_id {
            query = query.filter(cars::shareholder_id.eq(owner));
        }

        let rows = query
            .order((cars::created_at.desc(), cars::id.asc()))
            .select(CarDB::as_select())
            .load::<CarDB>(&mut conn)
            .into_core()?;
        cars_from_rows(rows)
    }

    fn list_sold_between(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Car>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = cars::table
            .filter(cars::deleted_at.is_null())
            .filter(cars::status.eq(CarStatus::Sold.as_str()))
            .filter(cars::sold_at.ge(from))
            .filter(cars::sold_at.le(to))
            .order((cars::sold_at.asc(), cars::id.asc()))
            .select(CarDB::as_select())
            .load::<CarDB>(&mut conn)
            .into_core()?;
        cars_from_rows(rows)
    }

    async fn create(&self, new_car: NewCar) -> Result<Car> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Car> {
                let car_id = new_car
                    .id
                    .clone()
                    .unwrap_or_else(|| Uuid::new_v4().to_string());
                let car_db = CarDB::from_new(car_id, new_car);

                let result_db = diesel::insert_into(cars::table)
                    .values(&car_db)
                    .returning(CarDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Car::try_from(result_db)
            })
            .await
    }

    async fn update(&self, car_update: CarUpdate) -> Result<Car> {
        let car_id = car_update
            .id
            .clone()
            .ok_or_else(|| Error::invalid_input("Car id is required for an update"))?;
        let changes = CarChangesDB::from(car_update);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Car> {
                let updated = diesel::update(
                    cars::table
                        .find(&car_id)
                        .filter(cars::deleted_at.is_null()),
                )
                .set(&changes)
                .execute(conn)
                .into_core()?;
                if updated == 0 {
                    return Err(not_found("Car", &car_id));
                }
                load_active(conn, &car_id)
            })
            .await
    }

    async fn record_sale(&self, car_id: &str, sale: CarSale) -> Result<Car> {
        let car_id = car_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Car> {
                let current = load_active(conn, &car_id)?;
                diesel::update(cars::table.find(&car_id))
                    .set((
                        cars::status.eq(CarStatus::Sold.as_str()),
                        cars::sold_at.eq(Some(sale.sold_at)),
                        cars::sold_by_employee_id.eq(sale.sold_by_employee_id),
                        cars::price.eq(sale.price.unwrap_or(current.price)),
                        cars::updated_at.eq(now()),
                    ))
                    .execute(conn)
                    .into_core()?;
                load_active(conn, &car_id)
            })
            .await
    }

    async fn soft_delete(&self, car_id: &str) -> Result<usize> {
        let car_id = car_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let timestamp = now();
                diesel::update(
                    cars::table
                        .find(&car_id)
                        .filter(cars::deleted_at.is_null()),
                )
                .set((
                    cars::deleted_at.eq(Some(timestamp)),
                    cars::updated_at.eq(timestamp),
                ))
                .execute(conn)
                .into_core()
            })
            .await
    }
}
