//! Reports module - monthly profit and sold-car reports built on the profit split.

mod reports_export;
mod reports_model;
mod reports_service;
mod reports_traits;

pub use reports_export::sold_cars_to_csv;
pub use reports_model::{MonthlyProfit, SoldCarRow, SoldCarsReport, SoldCarsTotals};
pub use reports_service::ReportService;
pub use reports_traits::ReportServiceTrait;
