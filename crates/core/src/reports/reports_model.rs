//! Report models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::profit_split::ProfitSplit;

/// Adds `amount` to a running total, failing instead of wrapping.
fn accumulate(total: &mut i64, amount: i64, field: &str) -> Result<()> {
    *total = total
        .checked_add(amount)
        .ok_or_else(|| Error::Report(format!("{} total exceeds the supported range", field)))?;
    Ok(())
}

/// Profit figures for one calendar month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyProfit {
    /// `YYYY-MM`
    pub month: String,
    pub sold_count: u32,
    /// Sum of sale prices.
    pub revenue: i64,
    pub company_profit: i64,
    pub shareholder_profit: i64,
    pub commissions: i64,
    pub expenses: i64,
    /// `company_profit - commissions - expenses`
    pub net_profit: i64,
}

impl MonthlyProfit {
    pub fn empty(month: String) -> Self {
        MonthlyProfit {
            month,
            ..Default::default()
        }
    }

    pub(crate) fn add_sale(&mut self, split: &ProfitSplit, commission: i64) -> Result<()> {
        self.sold_count += 1;
        accumulate(&mut self.revenue, split.price, "revenue")?;
        accumulate(&mut self.company_profit, split.company_profit, "company profit")?;
        accumulate(&mut self.shareholder_profit, split.shareholder_profit, "shareholder profit")?;
        accumulate(&mut self.commissions, commission, "commission")
    }

    pub(crate) fn add_expense(&mut self, amount: i64) -> Result<()> {
        accumulate(&mut self.expenses, amount, "expense")
    }

    pub(crate) fn recompute_net(&mut self) -> Result<()> {
        self.net_profit = self
            .company_profit
            .checked_sub(self.commissions)
            .and_then(|net| net.checked_sub(self.expenses))
            .ok_or_else(|| {
                Error::Report(format!("Net profit for {} exceeds the supported range", self.month))
            })?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoldCarRow {
    pub car_id: String,
    pub car_name: String,
    pub vin: Option<String>,
    pub sold_at: NaiveDate,
    pub purchase_price: i64,
    pub price: i64,
    pub shareholder_id: Option<String>,
    pub shareholder_name: Option<String>,
    pub shareholder_percentage: Option<Decimal>,
    pub shareholder_profit: i64,
    pub company_profit: i64,
    pub seller_id: Option<String>,
    pub seller_name: Option<String>,
    pub commission: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoldCarsTotals {
    pub sold_count: u32,
    pub revenue: i64,
    pub company_profit: i64,
    pub shareholder_profit: i64,
    pub commissions: i64,
}

impl SoldCarsTotals {
    pub(crate) fn add_sale(&mut self, split: &ProfitSplit, commission: i64) -> Result<()> {
        self.sold_count += 1;
        accumulate(&mut self.revenue, split.price, "revenue")?;
        accumulate(&mut self.company_profit, split.company_profit, "company profit")?;
        accumulate(&mut self.shareholder_profit, split.shareholder_profit, "shareholder profit")?;
        accumulate(&mut self.commissions, commission, "commission")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoldCarsReport {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub rows: Vec<SoldCarRow>,
    pub totals: SoldCarsTotals,
}
