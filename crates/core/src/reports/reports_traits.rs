use chrono::NaiveDate;

use super::reports_model::{MonthlyProfit, SoldCarsReport};
use crate::errors::Result;

/// Read-only reporting over sold cars, commissions and expenses.
///
/// All date ranges are inclusive on both ends; `from > to` is rejected.
pub trait ReportServiceTrait: Send + Sync {
    /// One entry per calendar month in the range, empty months included.
    fn get_monthly_profit(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<MonthlyProfit>>;

    fn get_sold_cars_report(&self, from: NaiveDate, to: NaiveDate) -> Result<SoldCarsReport>;

    /// The sold-car report rendered as CSV.
    fn export_sold_cars_csv(&self, from: NaiveDate, to: NaiveDate) -> Result<String>;
}
