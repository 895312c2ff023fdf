//! Conversions between a shareholder percentage and absolute profit amounts.
//!
//! All functions clamp their inputs: prices below zero become zero,
//! percentages are held to `[0, 100]` and amounts to `[0, price]`.
//! The shareholder side is rounded and the company side takes the
//! remainder, so the two amounts always add up to the price.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::profit_split_model::{CompanyShare, ShareholderShare};

pub fn clamp_price(price: i64) -> i64 {
    price.max(0)
}

pub fn clamp_percentage(percentage: Decimal) -> Decimal {
    percentage.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

/// `round(price * percentage / 100)`, half away from zero.
fn share_of(price: i64, percentage: Decimal) -> i64 {
    let raw = Decimal::from(price) * percentage / Decimal::ONE_HUNDRED;
    raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(price)
}

/// Company's share of `price` given the shareholder's percentage.
pub fn company_profit_and_percentage(price: i64, shareholder_percentage: Decimal) -> CompanyShare {
    let price = clamp_price(price);
    let shareholder_percentage = clamp_percentage(shareholder_percentage);

    CompanyShare {
        company_profit: price - share_of(price, shareholder_percentage),
        company_percentage: Decimal::ONE_HUNDRED - shareholder_percentage,
    }
}

/// Shareholder's share of `price` at `shareholder_percentage`.
pub fn shareholder_profit_and_percentage(
    price: i64,
    shareholder_percentage: Decimal,
) -> ShareholderShare {
    let price = clamp_price(price);
    let shareholder_percentage = clamp_percentage(shareholder_percentage);

    ShareholderShare {
        shareholder_profit: share_of(price, shareholder_percentage),
        shareholder_percentage,
    }
}

/// Back-solves the percentage of `price` that `amount` represents.
///
/// Returns 0 when `price` is 0. The result is not rounded; use
/// [`display_percentage`] for labels.
pub fn percentage_from_amount(amount: i64, price: i64) -> Decimal {
    let price = clamp_price(price);
    if price == 0 {
        return Decimal::ZERO;
    }
    let amount = amount.clamp(0, price);
    Decimal::from(amount) / Decimal::from(price) * Decimal::ONE_HUNDRED
}

/// Rounds a percentage to the nearest whole number for display.
pub fn display_percentage(percentage: Decimal) -> Decimal {
    percentage.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_forty_percent_shareholder_on_one_million() {
        let shareholder = shareholder_profit_and_percentage(1_000_000, dec!(40));
        let company = company_profit_and_percentage(1_000_000, dec!(40));

        assert_eq!(shareholder.shareholder_profit, 400_000);
        assert_eq!(company.company_profit, 600_000);
        assert_eq!(company.company_percentage, dec!(60));
    }

    #[test]
    fn test_zero_percent_shareholder_gets_nothing() {
        let shareholder = shareholder_profit_and_percentage(250_000, Decimal::ZERO);
        let company = company_profit_and_percentage(250_000, Decimal::ZERO);

        assert_eq!(shareholder.shareholder_profit, 0);
        assert_eq!(company.company_profit, 250_000);
        assert_eq!(company.company_percentage, dec!(100));
    }

    #[test]
    fn test_odd_price_half_split_reconciles_on_company_side() {
        let shareholder = shareholder_profit_and_percentage(7, dec!(50));
        let company = company_profit_and_percentage(7, dec!(50));

        // 3.5 rounds up for the shareholder; the company takes the rest.
        assert_eq!(shareholder.shareholder_profit, 4);
        assert_eq!(company.company_profit, 3);
    }

    #[test]
    fn test_thirty_three_percent_of_ten() {
        let shareholder = shareholder_profit_and_percentage(10, dec!(33));
        let company = company_profit_and_percentage(10, dec!(33));

        assert_eq!(shareholder.shareholder_profit, 3);
        assert_eq!(company.company_profit, 7);
    }

    #[test]
    fn test_out_of_range_inputs_are_clamped() {
        let over = shareholder_profit_and_percentage(1_000, dec!(150));
        assert_eq!(over.shareholder_percentage, dec!(100));
        assert_eq!(over.shareholder_profit, 1_000);

        let under = company_profit_and_percentage(1_000, dec!(-20));
        assert_eq!(under.company_percentage, dec!(100));
        assert_eq!(under.company_profit, 1_000);

        let negative_price = shareholder_profit_and_percentage(-500, dec!(50));
        assert_eq!(negative_price.shareholder_profit, 0);
    }

    #[test]
    fn test_percentage_from_amount_edges() {
        assert_eq!(percentage_from_amount(0, 5_000), Decimal::ZERO);
        assert_eq!(percentage_from_amount(5_000, 5_000), dec!(100));
        assert_eq!(percentage_from_amount(1_234, 0), Decimal::ZERO);
        assert_eq!(percentage_from_amount(50_000, 200_000), dec!(25));
    }

    #[test]
    fn test_percentage_from_amount_clamps_amount() {
        assert_eq!(percentage_from_amount(9_000, 5_000), dec!(100));
        assert_eq!(percentage_from_amount(-10, 5_000), Decimal::ZERO);
    }

    #[test]
    fn test_back_solved_percentage_reproduces_amount() {
        let pct = percentage_from_amount(1, 3);
        assert_eq!(shareholder_profit_and_percentage(3, pct).shareholder_profit, 1);
        assert_eq!(display_percentage(pct), dec!(33));
    }

    #[test]
    fn test_display_percentage_rounds_half_up() {
        assert_eq!(display_percentage(dec!(12.5)), dec!(13));
        assert_eq!(display_percentage(dec!(12.49)), dec!(12));
    }
}
