//! In-memory repositories shared by the service tests.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::cars::{Car, CarRepositoryTrait, CarSale, CarStatus, CarUpdate, NewCar};
use crate::employees::{Employee, EmployeeRepositoryTrait, EmployeeUpdate, NewEmployee};
use crate::errors::{DatabaseError, Error, Result};
use crate::expenses::{
    Expense, ExpenseCategory, ExpenseRepositoryTrait, ExpenseUpdate, NewExpense,
};
use crate::shareholders::{
    NewShareholder, Shareholder, ShareholderRepositoryTrait, ShareholderUpdate,
};

#[derive(Default)]
pub struct InMemoryStore {
    cars: RwLock<Vec<Car>>,
    shareholders: RwLock<Vec<Shareholder>>,
    employees: RwLock<Vec<Employee>>,
    expenses: RwLock<Vec<Expense>>,
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn not_found(kind: &str, id: &str) -> Error {
    Error::Database(DatabaseError::NotFound(format!("{} {}", kind, id)))
}

pub fn sample_new_car(price: i64) -> NewCar {
    NewCar {
        id: None,
        make: "Toyota".to_string(),
        model: "Camry".to_string(),
        year: 2020,
        vin: None,
        color: Some("Silver".to_string()),
        mileage: Some(60_000),
        purchase_price: price.max(0) / 2,
        price,
        status: CarStatus::Available,
        shareholder_id: None,
        shareholder_percentage: None,
        investment_amount: None,
        notes: None,
    }
}

pub fn sample_expense(year: i32, month: u32, day: u32, amount: i64) -> NewExpense {
    NewExpense {
        id: None,
        title: "Showroom rent".to_string(),
        category: ExpenseCategory::Rent,
        amount,
        spent_at: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        car_id: None,
        notes: None,
    }
}

impl InMemoryStore {
    pub fn add_shareholder(&self, full_name: &str) -> Shareholder {
        let shareholder = Shareholder {
            id: Uuid::new_v4().to_string(),
            full_name: full_name.to_string(),
            phone: None,
            email: None,
            notes: None,
            created_at: now(),
            updated_at: now(),
            deleted_at: None,
        };
        self.shareholders.write().unwrap().push(shareholder.clone());
        shareholder
    }

    pub fn add_employee(&self, full_name: &str, commission: Option<Decimal>) -> Employee {
        let employee = Employee {
            id: Uuid::new_v4().to_string(),
            full_name: full_name.to_string(),
            phone: None,
            position: None,
            monthly_salary: 3_000,
            commission_percentage: commission,
            hired_at: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            created_at: now(),
            updated_at: now(),
            deleted_at: None,
        };
        self.employees.write().unwrap().push(employee.clone());
        employee
    }

    pub fn employee_ids(&self) -> Vec<String> {
        self.employees
            .read()
            .unwrap()
            .iter()
            .map(|e| e.id.clone())
            .collect()
    }

    pub fn mark_employee_deleted(&self, employee_id: &str) {
        for e in self.employees.write().unwrap().iter_mut() {
            if e.id == employee_id {
                e.deleted_at = Some(now());
            }
        }
    }
}

#[async_trait]
impl CarRepositoryTrait for InMemoryStore {
    fn get_by_id(&self, car_id: &str) -> Result<Car> {
        self.cars
            .read()
            .unwrap()
            .iter()
            .find(|c| c.id == car_id && c.deleted_at.is_none())
            .cloned()
            .ok_or_else(|| not_found("car", car_id))
    }

    fn list(
        &self,
        status_filter: Option<CarStatus>,
        shareholder_id: Option<&str>,
    ) -> Result<Vec<Car>> {
        Ok(self
            .cars
            .read()
            .unwrap()
            .iter()
            .filter(|c| c.deleted_at.is_none())
            .filter(|c| status_filter.map_or(true, |s| c.status == s))
            .filter(|c| shareholder_id.map_or(true, |id| c.shareholder_id.as_deref() == Some(id)))
            .cloned()
            .collect())
    }

    fn list_sold_between(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Car>> {
        Ok(self
            .cars
            .read()
            .unwrap()
            .iter()
            .filter(|c| c.deleted_at.is_none() && c.status == CarStatus::Sold)
            .filter(|c| c.sold_at.is_some_and(|d| d >= from && d <= to))
            .cloned()
            .collect())
    }

    async fn create(&self, new_car: NewCar) -> Result<Car> {
        let car = Car {
            id: new_car.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            make: new_car.make,
            model: new_car.model,
            year: new_car.year,
            vin: new_car.vin,
            color: new_car.color,
            mileage: new_car.mileage,
            purchase_price: new_car.purchase_price,
            price: new_car.price,
            status: new_car.status,
            sold_at: None,
            sold_by_employee_id: None,
            shareholder_id: new_car.shareholder_id,
            shareholder_percentage: new_car.shareholder_percentage,
            investment_amount: new_car.investment_amount,
            notes: new_car.notes,
            created_at: now(),
            updated_at: now(),
            deleted_at: None,
        };
        self.cars.write().unwrap().push(car.clone());
        Ok(car)
    }

    async fn update(&self, car_update: CarUpdate) -> Result<Car> {
        let id = car_update.id.clone().unwrap_or_default();
        let mut cars = self.cars.write().unwrap();
        let car = cars
            .iter_mut()
            .find(|c| c.id == id && c.deleted_at.is_none())
            .ok_or_else(|| not_found("car", &id))?;
        car.make = car_update.make;
        car.model = car_update.model;
        car.year = car_update.year;
        car.vin = car_update.vin;
        car.color = car_update.color;
        car.mileage = car_update.mileage;
        car.purchase_price = car_update.purchase_price;
        car.price = car_update.price;
        car.status = car_update.status;
        car.shareholder_id = car_update.shareholder_id;
        car.shareholder_percentage = car_update.shareholder_percentage;
        car.investment_amount = car_update.investment_amount;
        car.notes = car_update.notes;
        car.updated_at = now();
        Ok(car.clone())
    }

    async fn record_sale(&self, car_id: &str, sale: CarSale) -> Result<Car> {
        let mut cars = self.cars.write().unwrap();
        let car = cars
            .iter_mut()
            .find(|c| c.id == car_id && c.deleted_at.is_none())
            .ok_or_else(|| not_found("car", car_id))?;
        car.status = CarStatus::Sold;
        car.sold_at = Some(sale.sold_at);
        car.sold_by_employee_id = sale.sold_by_employee_id;
        if let Some(price) = sale.price {
            car.price = price;
        }
        car.updated_at = now();
        Ok(car.clone())
    }

    async fn soft_delete(&self, car_id: &str) -> Result<usize> {
        let mut count = 0;
        for c in self.cars.write().unwrap().iter_mut() {
            if c.id == car_id && c.deleted_at.is_none() {
                c.deleted_at = Some(now());
                count += 1;
            }
        }
        Ok(count)
    }
}

#[async_trait]
impl ShareholderRepositoryTrait for InMemoryStore {
    fn get_by_id(&self, shareholder_id: &str) -> Result<Shareholder> {
        self.shareholders
            .read()
            .unwrap()
            .iter()
            .find(|s| s.id == shareholder_id && s.deleted_at.is_none())
            .cloned()
            .ok_or_else(|| not_found("shareholder", shareholder_id))
    }

    fn list(&self) -> Result<Vec<Shareholder>> {
        Ok(self
            .shareholders
            .read()
            .unwrap()
            .iter()
            .filter(|s| s.deleted_at.is_none())
            .cloned()
            .collect())
    }

    fn list_all(&self) -> Result<Vec<Shareholder>> {
        Ok(self.shareholders.read().unwrap().clone())
    }

    async fn create(&self, new_shareholder: NewShareholder) -> Result<Shareholder> {
        let shareholder = Shareholder {
            id: new_shareholder
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            full_name: new_shareholder.full_name,
            phone: new_shareholder.phone,
            email: new_shareholder.email,
            notes: new_shareholder.notes,
            created_at: now(),
            updated_at: now(),
            deleted_at: None,
        };
        self.shareholders.write().unwrap().push(shareholder.clone());
        Ok(shareholder)
    }

    async fn update(&self, shareholder_update: ShareholderUpdate) -> Result<Shareholder> {
        let id = shareholder_update.id.clone().unwrap_or_default();
        let mut shareholders = self.shareholders.write().unwrap();
        let shareholder = shareholders
            .iter_mut()
            .find(|s| s.id == id && s.deleted_at.is_none())
            .ok_or_else(|| not_found("shareholder", &id))?;
        shareholder.full_name = shareholder_update.full_name;
        shareholder.phone = shareholder_update.phone;
        shareholder.email = shareholder_update.email;
        shareholder.notes = shareholder_update.notes;
        shareholder.updated_at = now();
        Ok(shareholder.clone())
    }

    async fn soft_delete(&self, shareholder_id: &str) -> Result<usize> {
        let mut count = 0;
        for s in self.shareholders.write().unwrap().iter_mut() {
            if s.id == shareholder_id && s.deleted_at.is_none() {
                s.deleted_at = Some(now());
                count += 1;
            }
        }
        Ok(count)
    }
}

#[async_trait]
impl EmployeeRepositoryTrait for InMemoryStore {
    fn get_by_id(&self, employee_id: &str) -> Result<Employee> {
        self.employees
            .read()
            .unwrap()
            .iter()
            .find(|e| e.id == employee_id && e.deleted_at.is_none())
            .cloned()
            .ok_or_else(|| not_found("employee", employee_id))
    }

    fn list(&self) -> Result<Vec<Employee>> {
        Ok(self
            .employees
            .read()
            .unwrap()
            .iter()
            .filter(|e| e.deleted_at.is_none())
            .cloned()
            .collect())
    }

    fn list_all(&self) -> Result<Vec<Employee>> {
        Ok(self.employees.read().unwrap().clone())
    }

    async fn create(&self, new_employee: NewEmployee) -> Result<Employee> {
        let employee = Employee {
            id: new_employee.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            full_name: new_employee.full_name,
            phone: new_employee.phone,
            position: new_employee.position,
            monthly_salary: new_employee.monthly_salary,
            commission_percentage: new_employee.commission_percentage,
            hired_at: new_employee.hired_at,
            created_at: now(),
            updated_at: now(),
            deleted_at: None,
        };
        self.employees.write().unwrap().push(employee.clone());
        Ok(employee)
    }

    async fn update(&self, employee_update: EmployeeUpdate) -> Result<Employee> {
        let id = employee_update.id.clone().unwrap_or_default();
        let mut employees = self.employees.write().unwrap();
        let employee = employees
            .iter_mut()
            .find(|e| e.id == id && e.deleted_at.is_none())
            .ok_or_else(|| not_found("employee", &id))?;
        employee.full_name = employee_update.full_name;
        employee.phone = employee_update.phone;
        employee.position = employee_update.position;
        employee.monthly_salary = employee_update.monthly_salary;
        employee.commission_percentage = employee_update.commission_percentage;
        employee.hired_at = employee_update.hired_at;
        employee.updated_at = now();
        Ok(employee.clone())
    }

    async fn soft_delete(&self, employee_id: &str) -> Result<usize> {
        self.mark_employee_deleted(employee_id);
        Ok(1)
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for InMemoryStore {
    fn get_by_id(&self, expense_id: &str) -> Result<Expense> {
        self.expenses
            .read()
            .unwrap()
            .iter()
            .find(|e| e.id == expense_id && e.deleted_at.is_none())
            .cloned()
            .ok_or_else(|| not_found("expense", expense_id))
    }

    fn list(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Vec<Expense>> {
        Ok(self
            .expenses
            .read()
            .unwrap()
            .iter()
            .filter(|e| e.deleted_at.is_none())
            .filter(|e| from.map_or(true, |f| e.spent_at >= f))
            .filter(|e| to.map_or(true, |t| e.spent_at <= t))
            .cloned()
            .collect())
    }

    async fn create(&self, new_expense: NewExpense) -> Result<Expense> {
        let expense = Expense {
            id: new_expense.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            title: new_expense.title,
            category: new_expense.category,
            amount: new_expense.amount,
            spent_at: new_expense.spent_at,
            car_id: new_expense.car_id,
            notes: new_expense.notes,
            created_at: now(),
            updated_at: now(),
            deleted_at: None,
        };
        self.expenses.write().unwrap().push(expense.clone());
        Ok(expense)
    }

    async fn update(&self, expense_update: ExpenseUpdate) -> Result<Expense> {
        let id = expense_update.id.clone().unwrap_or_default();
        let mut expenses = self.expenses.write().unwrap();
        let expense = expenses
            .iter_mut()
            .find(|e| e.id == id && e.deleted_at.is_none())
            .ok_or_else(|| not_found("expense", &id))?;
        expense.title = expense_update.title;
        expense.category = expense_update.category;
        expense.amount = expense_update.amount;
        expense.spent_at = expense_update.spent_at;
        expense.car_id = expense_update.car_id;
        expense.notes = expense_update.notes;
        expense.updated_at = now();
        Ok(expense.clone())
    }

    async fn soft_delete(&self, expense_id: &str) -> Result<usize> {
        let mut count = 0;
        for e in self.expenses.write().unwrap().iter_mut() {
            if e.id == expense_id && e.deleted_at.is_none() {
                e.deleted_at = Some(now());
                count += 1;
            }
        }
        Ok(count)
    }
}
