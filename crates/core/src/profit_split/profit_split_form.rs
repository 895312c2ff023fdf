//! Form state for editing a split from either side.
//!
//! Every action goes through this type and recomputes all dependent
//! fields at once, so the percentage and both amounts cannot drift apart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::profit_split_calculator::{clamp_percentage, clamp_price, percentage_from_amount};
use super::profit_split_input::{parse_amount_input, parse_percentage_input};
use super::profit_split_model::{ProfitSplit, ProfitSplitField};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitSplitForm {
    split: ProfitSplit,
}

impl ProfitSplitForm {
    pub fn new(price: i64, shareholder_percentage: Option<Decimal>) -> Self {
        ProfitSplitForm {
            split: ProfitSplit::compute(price, shareholder_percentage),
        }
    }

    pub fn split(&self) -> &ProfitSplit {
        &self.split
    }

    pub fn into_split(self) -> ProfitSplit {
        self.split
    }

    /// Changes the price, keeping the current percentage.
    pub fn set_price(&mut self, price: i64) {
        self.split = ProfitSplit::compute(price, self.split.shareholder_percentage);
    }

    /// `None` removes the shareholder from the car.
    pub fn set_shareholder_percentage(&mut self, percentage: Option<Decimal>) {
        self.split = ProfitSplit::compute(self.split.price, percentage);
    }

    pub fn set_company_percentage(&mut self, percentage: Decimal) {
        let shareholder = Decimal::ONE_HUNDRED - clamp_percentage(percentage);
        self.set_shareholder_percentage(Some(shareholder));
    }

    /// Keeps the entered amount exactly and back-solves the percentage.
    pub fn set_shareholder_amount(&mut self, amount: i64) {
        let price = self.split.price;
        let amount = amount.clamp(0, price);
        self.set_amounts(price, amount);
    }

    /// Keeps the entered company amount exactly and back-solves the
    /// shareholder percentage from the remainder.
    ///
    /// With no shareholder attached, entering the full price is a no-op:
    /// the company already owns the whole price, and applying it would
    /// attach a 0% shareholder.
    pub fn set_company_amount(&mut self, amount: i64) {
        let price = self.split.price;
        let amount = amount.clamp(0, price);
        if self.split.shareholder_percentage.is_none() && amount == price {
            return;
        }
        self.set_amounts(price, price - amount);
    }

    fn set_amounts(&mut self, price: i64, shareholder_amount: i64) {
        let percentage = percentage_from_amount(shareholder_amount, price);
        self.split = ProfitSplit {
            price,
            shareholder_percentage: Some(percentage),
            company_percentage: Decimal::ONE_HUNDRED - percentage,
            shareholder_profit: shareholder_amount,
            company_profit: price - shareholder_amount,
        };
    }

    /// Applies raw keyboard input to one field.
    ///
    /// A cleared amount or price counts as 0. A cleared percentage removes
    /// the shareholder.
    pub fn apply(&mut self, field: ProfitSplitField, raw: &str) {
        match field {
            ProfitSplitField::Price => {
                self.set_price(clamp_price(parse_amount_input(raw, None).unwrap_or(0)));
            }
            ProfitSplitField::ShareholderPercentage => {
                self.set_shareholder_percentage(parse_percentage_input(raw));
            }
            ProfitSplitField::CompanyPercentage => match parse_percentage_input(raw) {
                Some(pct) => self.set_company_percentage(pct),
                None => self.set_shareholder_percentage(None),
            },
            ProfitSplitField::ShareholderAmount => {
                let amount = parse_amount_input(raw, Some(self.split.price)).unwrap_or(0);
                self.set_shareholder_amount(amount);
            }
            ProfitSplitField::CompanyAmount => {
                let amount = parse_amount_input(raw, Some(self.split.price)).unwrap_or(0);
                self.set_company_amount(amount);
            }
        }
    }
}
