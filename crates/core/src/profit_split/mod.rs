//! Profit split between the dealership and a car's shareholder.
//!
//! Everything here is pure and synchronous. Amounts are integers in the
//! smallest currency unit, percentages are [`rust_decimal::Decimal`].

mod profit_split_calculator;
mod profit_split_form;
mod profit_split_input;
mod profit_split_model;

pub use profit_split_calculator::{
    clamp_percentage, clamp_price, company_profit_and_percentage, display_percentage,
    percentage_from_amount, shareholder_profit_and_percentage,
};
pub use profit_split_form::ProfitSplitForm;
pub use profit_split_input::{parse_amount_input, parse_percentage_input};
pub use profit_split_model::{CompanyShare, ProfitSplit, ProfitSplitField, ShareholderShare};
