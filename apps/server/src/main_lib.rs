use std::sync::Arc;

use crate::config::Config;
use dealership_core::{
    cars::{CarService, CarServiceTrait},
    employees::{EmployeeService, EmployeeServiceTrait},
    expenses::{ExpenseService, ExpenseServiceTrait},
    reports::{ReportService, ReportServiceTrait},
    shareholders::{ShareholderService, ShareholderServiceTrait},
};
use dealership_storage_sqlite::{
    db, CarRepository, EmployeeRepository, ExpenseRepository, ShareholderRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub car_service: Arc<dyn CarServiceTrait + Send + Sync>,
    pub shareholder_service: Arc<dyn ShareholderServiceTrait + Send + Sync>,
    pub employee_service: Arc<dyn EmployeeServiceTrait + Send + Sync>,
    pub expense_service: Arc<dyn ExpenseServiceTrait + Send + Sync>,
    pub report_service: Arc<dyn ReportServiceTrait + Send + Sync>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("DL_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let car_repository = Arc::new(CarRepository::new(pool.clone(), writer.clone()));
    let shareholder_repository =
        Arc::new(ShareholderRepository::new(pool.clone(), writer.clone()));
    let employee_repository = Arc::new(EmployeeRepository::new(pool.clone(), writer.clone()));
    let expense_repository = Arc::new(ExpenseRepository::new(pool.clone(), writer));

    let car_service = Arc::new(CarService::new(
        car_repository.clone(),
        shareholder_repository.clone(),
        employee_repository.clone(),
    ));
    let shareholder_service = Arc::new(ShareholderService::new(
        shareholder_repository.clone(),
        car_repository.clone(),
    ));
    let employee_service = Arc::new(EmployeeService::new(employee_repository.clone()));
    let expense_service = Arc::new(ExpenseService::new(
        expense_repository.clone(),
        car_repository.clone(),
    ));
    let report_service = Arc::new(ReportService::new(
        car_repository,
        shareholder_repository,
        employee_repository,
        expense_repository,
    ));

    Ok(Arc::new(AppState {
        car_service,
        shareholder_service,
        employee_service,
        expense_service,
        report_service,
        db_path,
    }))
}
