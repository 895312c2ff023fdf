use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::NaiveDate;
use log::{debug, warn};

use super::reports_export::sold_cars_to_csv;
use super::reports_model::{MonthlyProfit, SoldCarRow, SoldCarsReport, SoldCarsTotals};
use super::reports_traits::ReportServiceTrait;
use crate::cars::{Car, CarRepositoryTrait};
use crate::employees::{Employee, EmployeeRepositoryTrait};
use crate::errors::{Error, Result};
use crate::expenses::ExpenseRepositoryTrait;
use crate::shareholders::{Shareholder, ShareholderRepositoryTrait};
use crate::utils::time_utils::{get_months_between, month_key};

pub struct ReportService {
    car_repository: Arc<dyn CarRepositoryTrait>,
    shareholder_repository: Arc<dyn ShareholderRepositoryTrait>,
    employee_repository: Arc<dyn EmployeeRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl ReportService {
    pub fn new(
        car_repository: Arc<dyn CarRepositoryTrait>,
        shareholder_repository: Arc<dyn ShareholderRepositoryTrait>,
        employee_repository: Arc<dyn EmployeeRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        ReportService {
            car_repository,
            shareholder_repository,
            employee_repository,
            expense_repository,
        }
    }

    fn check_range(from: NaiveDate, to: NaiveDate) -> Result<()> {
        if from > to {
            return Err(Error::invalid_input(format!(
                "Start date {} is after end date {}",
                from, to
            )));
        }
        Ok(())
    }

    fn employees_by_id(&self) -> Result<HashMap<String, Employee>> {
        Ok(self
            .employee_repository
            .list_all()?
            .into_iter()
            .map(|e| (e.id.clone(), e))
            .collect())
    }

    fn shareholders_by_id(&self) -> Result<HashMap<String, Shareholder>> {
        Ok(self
            .shareholder_repository
            .list_all()?
            .into_iter()
            .map(|s| (s.id.clone(), s))
            .collect())
    }

    /// Sold cars in range that carry a sale date, ordered by date then id.
    fn sold_cars(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<(NaiveDate, Car)>> {
        let mut cars: Vec<(NaiveDate, Car)> = self
            .car_repository
            .list_sold_between(from, to)?
            .into_iter()
            .filter_map(|car| match car.sold_at {
                Some(sold_at) => Some((sold_at, car)),
                None => {
                    warn!("Sold car {} has no sale date; left out of reports", car.id);
                    None
                }
            })
            .collect();
        cars.sort_by(|(a_date, a), (b_date, b)| a_date.cmp(b_date).then_with(|| a.id.cmp(&b.id)));
        Ok(cars)
    }
}

fn commission_for(car: &Car, company_profit: i64, employees: &HashMap<String, Employee>) -> i64 {
    car.sold_by_employee_id
        .as_ref()
        .and_then(|id| employees.get(id))
        .map(|employee| employee.commission_for(company_profit))
        .unwrap_or(0)
}

impl ReportServiceTrait for ReportService {
    fn get_monthly_profit(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<MonthlyProfit>> {
        Self::check_range(from, to)?;

        let mut months: BTreeMap<String, MonthlyProfit> = get_months_between(from, to)
            .into_iter()
            .map(|m| {
                let key = month_key(m);
                (key.clone(), MonthlyProfit::empty(key))
            })
            .collect();

        let employees = self.employees_by_id()?;
        for (sold_at, car) in self.sold_cars(from, to)? {
            let Some(entry) = months.get_mut(&month_key(sold_at)) else {
                continue;
            };
            let split = car.profit_split();
            entry.add_sale(&split, commission_for(&car, split.company_profit, &employees))?;
        }

        for expense in self.expense_repository.list(Some(from), Some(to))? {
            if let Some(entry) = months.get_mut(&month_key(expense.spent_at)) {
                entry.add_expense(expense.amount)?;
            }
        }

        let result = months
            .into_values()
            .map(|mut m| {
                m.recompute_net()?;
                Ok(m)
            })
            .collect::<Result<Vec<MonthlyProfit>>>()?;
        debug!(
            "Computed monthly profit for {} month(s) between {} and {}",
            result.len(),
            from,
            to
        );
        Ok(result)
    }

    fn get_sold_cars_report(&self, from: NaiveDate, to: NaiveDate) -> Result<SoldCarsReport> {
        Self::check_range(from, to)?;

        let employees = self.employees_by_id()?;
        let shareholders = self.shareholders_by_id()?;
        let mut totals = SoldCarsTotals::default();
        let mut rows = Vec::new();

        for (sold_at, car) in self.sold_cars(from, to)? {
            let split = car.profit_split();
            let commission = commission_for(&car, split.company_profit, &employees);

            totals.add_sale(&split, commission)?;

            rows.push(SoldCarRow {
                car_name: car.display_name(),
                shareholder_name: car
                    .shareholder_id
                    .as_ref()
                    .and_then(|id| shareholders.get(id))
                    .map(|s| s.full_name.clone()),
                seller_name: car
                    .sold_by_employee_id
                    .as_ref()
                    .and_then(|id| employees.get(id))
                    .map(|e| e.full_name.clone()),
                car_id: car.id,
                vin: car.vin,
                sold_at,
                purchase_price: car.purchase_price,
                price: split.price,
                shareholder_id: car.shareholder_id,
                shareholder_percentage: split.shareholder_percentage,
                shareholder_profit: split.shareholder_profit,
                company_profit: split.company_profit,
                seller_id: car.sold_by_employee_id,
                commission,
            });
        }

        Ok(SoldCarsReport {
            from,
            to,
            rows,
            totals,
        })
    }

    fn export_sold_cars_csv(&self, from: NaiveDate, to: NaiveDate) -> Result<String> {
        let report = self.get_sold_cars_report(from, to)?;
        sold_cars_to_csv(&report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cars::{CarSale, CarService, CarServiceTrait};
    use crate::expenses::{ExpenseService, ExpenseServiceTrait};
    use crate::test_support::{sample_expense, sample_new_car, InMemoryStore};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reports(store: &Arc<InMemoryStore>) -> ReportService {
        ReportService::new(store.clone(), store.clone(), store.clone(), store.clone())
    }

    async fn seed(store: &Arc<InMemoryStore>) {
        let shareholder = store.add_shareholder("Alice Investor");
        let seller = store.add_employee("Sam Seller", Some(dec!(5)));
        let cars = CarService::new(store.clone(), store.clone(), store.clone());

        let mut shared = sample_new_car(1_000_000);
        shared.shareholder_id = Some(shareholder.id.clone());
        shared.shareholder_percentage = Some(dec!(40));
        let shared = cars.create_car(shared).await.unwrap();
        cars.sell_car(
            &shared.id,
            CarSale {
                sold_at: date(2024, 1, 20),
                price: None,
                sold_by_employee_id: Some(seller.id.clone()),
            },
        )
        .await
        .unwrap();

        let own = cars.create_car(sample_new_car(250_000)).await.unwrap();
        cars.sell_car(
            &own.id,
            CarSale {
                sold_at: date(2024, 3, 2),
                price: None,
                sold_by_employee_id: None,
            },
        )
        .await
        .unwrap();

        // Never sold, must not show up anywhere.
        cars.create_car(sample_new_car(80_000)).await.unwrap();

        let expenses = ExpenseService::new(store.clone(), store.clone());
        expenses
            .create_expense(sample_expense(2024, 1, 5, 20_000))
            .await
            .unwrap();
        expenses
            .create_expense(sample_expense(2024, 3, 31, 10_000))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_monthly_profit_includes_empty_months() {
        let store = Arc::new(InMemoryStore::default());
        seed(&store).await;

        let months = reports(&store)
            .get_monthly_profit(date(2024, 1, 1), date(2024, 3, 31))
            .unwrap();

        assert_eq!(months.len(), 3);
        assert_eq!(months[0].month, "2024-01");
        assert_eq!(months[0].sold_count, 1);
        assert_eq!(months[0].revenue, 1_000_000);
        assert_eq!(months[0].company_profit, 600_000);
        assert_eq!(months[0].shareholder_profit, 400_000);
        assert_eq!(months[0].commissions, 30_000);
        assert_eq!(months[0].expenses, 20_000);
        assert_eq!(months[0].net_profit, 550_000);

        assert_eq!(months[1], MonthlyProfit::empty("2024-02".to_string()));

        assert_eq!(months[2].company_profit, 250_000);
        assert_eq!(months[2].expenses, 10_000);
        assert_eq!(months[2].net_profit, 240_000);
    }

    #[tokio::test]
    async fn test_monthly_profit_rejects_reversed_range() {
        let store = Arc::new(InMemoryStore::default());
        let result = reports(&store).get_monthly_profit(date(2024, 2, 1), date(2024, 1, 1));
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_sold_cars_report_rows_and_totals() {
        let store = Arc::new(InMemoryStore::default());
        seed(&store).await;

        let report = reports(&store)
            .get_sold_cars_report(date(2024, 1, 1), date(2024, 12, 31))
            .unwrap();

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].sold_at, date(2024, 1, 20));
        assert_eq!(report.rows[0].shareholder_name.as_deref(), Some("Alice Investor"));
        assert_eq!(report.rows[0].seller_name.as_deref(), Some("Sam Seller"));
        assert_eq!(report.rows[0].commission, 30_000);
        assert_eq!(report.rows[1].shareholder_name, None);

        assert_eq!(report.totals.sold_count, 2);
        assert_eq!(report.totals.revenue, 1_250_000);
        assert_eq!(report.totals.company_profit, 850_000);
        assert_eq!(report.totals.shareholder_profit, 400_000);
        assert_eq!(report.totals.commissions, 30_000);
    }

    #[tokio::test]
    async fn test_deleted_seller_still_resolved() {
        let store = Arc::new(InMemoryStore::default());
        seed(&store).await;
        let seller_id = store.employee_ids()[0].clone();
        store.mark_employee_deleted(&seller_id);

        let report = reports(&store)
            .get_sold_cars_report(date(2024, 1, 1), date(2024, 1, 31))
            .unwrap();
        assert_eq!(report.rows[0].seller_name.as_deref(), Some("Sam Seller"));
        assert_eq!(report.rows[0].commission, 30_000);
    }

    #[tokio::test]
    async fn test_totals_beyond_i64_fail_instead_of_overflowing() {
        let store = Arc::new(InMemoryStore::default());
        let cars = CarService::new(store.clone(), store.clone(), store.clone());
        for _ in 0..2 {
            let car = cars.create_car(sample_new_car(i64::MAX)).await.unwrap();
            cars.sell_car(
                &car.id,
                CarSale {
                    sold_at: date(2024, 1, 2),
                    price: None,
                    sold_by_employee_id: None,
                },
            )
            .await
            .unwrap();
        }
        let reports = reports(&store);
        let (from, to) = (date(2024, 1, 1), date(2024, 1, 31));

        assert!(matches!(
            reports.get_monthly_profit(from, to),
            Err(Error::Report(_))
        ));
        assert!(matches!(
            reports.get_sold_cars_report(from, to),
            Err(Error::Report(_))
        ));
        assert!(matches!(
            reports.export_sold_cars_csv(from, to),
            Err(Error::Report(_))
        ));
    }

    #[tokio::test]
    async fn test_single_max_price_sale_still_reports() {
        let store = Arc::new(InMemoryStore::default());
        let cars = CarService::new(store.clone(), store.clone(), store.clone());
        let car = cars.create_car(sample_new_car(i64::MAX)).await.unwrap();
        cars.sell_car(
            &car.id,
            CarSale {
                sold_at: date(2024, 1, 2),
                price: None,
                sold_by_employee_id: None,
            },
        )
        .await
        .unwrap();

        let months = reports(&store)
            .get_monthly_profit(date(2024, 1, 1), date(2024, 1, 31))
            .unwrap();
        assert_eq!(months[0].revenue, i64::MAX);
        assert_eq!(months[0].net_profit, i64::MAX);
    }

    #[tokio::test]
    async fn test_export_csv_has_header_and_rows() {
        let store = Arc::new(InMemoryStore::default());
        seed(&store).await;

        let csv = reports(&store)
            .export_sold_cars_csv(date(2024, 1, 1), date(2024, 12, 31))
            .unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Car,VIN,Sold at"));
        assert!(lines[1].contains("2024-01-20"));
        assert!(lines[1].contains("Alice Investor"));
    }
}
