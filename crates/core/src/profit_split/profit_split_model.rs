//! Profit split value types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::profit_split_calculator::{
    clamp_percentage, clamp_price, company_profit_and_percentage,
    shareholder_profit_and_percentage,
};

/// The dealership's side of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyShare {
    pub company_profit: i64,
    pub company_percentage: Decimal,
}

/// The shareholder's side of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareholderShare {
    pub shareholder_profit: i64,
    pub shareholder_percentage: Decimal,
}

/// Derived split of a car's price. Never persisted.
///
/// Invariants: `company_profit + shareholder_profit == price`, and
/// `company_percentage + shareholder_percentage == 100` (the shareholder
/// side counts as 0 when there is no shareholder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitSplit {
    pub price: i64,
    /// `None` means the car has no shareholder.
    pub shareholder_percentage: Option<Decimal>,
    pub company_percentage: Decimal,
    pub shareholder_profit: i64,
    pub company_profit: i64,
}

impl ProfitSplit {
    /// Computes the split from the two persisted fields of a car.
    pub fn compute(price: i64, shareholder_percentage: Option<Decimal>) -> Self {
        let price = clamp_price(price);
        let shareholder_percentage = shareholder_percentage.map(clamp_percentage);
        let pct = shareholder_percentage.unwrap_or(Decimal::ZERO);

        let shareholder = shareholder_profit_and_percentage(price, pct);
        let company = company_profit_and_percentage(price, pct);

        ProfitSplit {
            price,
            shareholder_percentage,
            company_percentage: company.company_percentage,
            shareholder_profit: shareholder.shareholder_profit,
            company_profit: company.company_profit,
        }
    }

    pub fn has_shareholder(&self) -> bool {
        self.shareholder_percentage.is_some()
    }

    pub fn company_share(&self) -> CompanyShare {
        CompanyShare {
            company_profit: self.company_profit,
            company_percentage: self.company_percentage,
        }
    }

    pub fn shareholder_share(&self) -> ShareholderShare {
        ShareholderShare {
            shareholder_profit: self.shareholder_profit,
            shareholder_percentage: self.shareholder_percentage.unwrap_or(Decimal::ZERO),
        }
    }
}

impl Default for ProfitSplit {
    fn default() -> Self {
        ProfitSplit::compute(0, None)
    }
}

/// Form field a user can type into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfitSplitField {
    Price,
    ShareholderPercentage,
    CompanyPercentage,
    ShareholderAmount,
    CompanyAmount,
}
