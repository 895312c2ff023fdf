//! Property-based tests for the profit split calculator.
//!
//! These tests verify that the split invariants hold across all inputs,
//! using the `proptest` crate for random test case generation.

use dealership_core::profit_split::{
    company_profit_and_percentage, parse_amount_input, parse_percentage_input,
    percentage_from_amount, shareholder_profit_and_percentage, ProfitSplit, ProfitSplitField,
    ProfitSplitForm,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Prices up to a trillion currency units.
fn arb_price() -> impl Strategy<Value = i64> {
    0i64..=1_000_000_000_000
}

/// Percentages in `[0, 100]` with up to two decimals.
fn arb_percentage() -> impl Strategy<Value = Decimal> {
    (0u32..=10_000).prop_map(|basis_points| Decimal::new(basis_points as i64, 2))
}

/// Any percentage, including values far outside `[0, 100]`.
fn arb_wild_percentage() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..=1_000_000).prop_map(|raw| Decimal::new(raw, 2))
}

fn arb_field() -> impl Strategy<Value = ProfitSplitField> {
    prop_oneof![
        Just(ProfitSplitField::Price),
        Just(ProfitSplitField::ShareholderPercentage),
        Just(ProfitSplitField::CompanyPercentage),
        Just(ProfitSplitField::ShareholderAmount),
        Just(ProfitSplitField::CompanyAmount),
    ]
}

fn assert_split_consistent(split: &ProfitSplit) -> Result<(), TestCaseError> {
    prop_assert!(split.price >= 0);
    prop_assert!(split.shareholder_profit >= 0 && split.shareholder_profit <= split.price);
    prop_assert_eq!(split.company_profit + split.shareholder_profit, split.price);
    let shareholder_pct = split.shareholder_percentage.unwrap_or(Decimal::ZERO);
    prop_assert!(shareholder_pct >= Decimal::ZERO && shareholder_pct <= Decimal::ONE_HUNDRED);
    prop_assert_eq!(split.company_percentage + shareholder_pct, Decimal::ONE_HUNDRED);
    Ok(())
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The company percentage is the complement of the shareholder percentage.
    #[test]
    fn prop_company_percentage_is_complement(price in arb_price(), pct in arb_percentage()) {
        let company = company_profit_and_percentage(price, pct);
        prop_assert_eq!(company.company_percentage, Decimal::ONE_HUNDRED - pct);
    }

    /// Both amounts add up to the price exactly; the residue goes to the company.
    #[test]
    fn prop_amounts_reconcile_with_price(price in arb_price(), pct in arb_percentage()) {
        let company = company_profit_and_percentage(price, pct);
        let shareholder = shareholder_profit_and_percentage(price, pct);
        prop_assert_eq!(company.company_profit + shareholder.shareholder_profit, price);
    }

    /// Out-of-range percentages behave like their clamped value.
    #[test]
    fn prop_percentage_is_clamped(price in arb_price(), pct in arb_wild_percentage()) {
        let clamped = pct.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
        prop_assert_eq!(
            shareholder_profit_and_percentage(price, pct),
            shareholder_profit_and_percentage(price, clamped)
        );
        prop_assert_eq!(
            company_profit_and_percentage(price, pct),
            company_profit_and_percentage(price, clamped)
        );
    }

    #[test]
    fn prop_percentage_from_amount_bounds(price in 1i64..=1_000_000_000_000) {
        prop_assert_eq!(percentage_from_amount(0, price), Decimal::ZERO);
        prop_assert_eq!(percentage_from_amount(price, price), Decimal::ONE_HUNDRED);
    }

    #[test]
    fn prop_zero_price_gives_zero_percentage(amount in any::<i64>()) {
        prop_assert_eq!(percentage_from_amount(amount, 0), Decimal::ZERO);
    }

    /// Back-solving a percentage from an amount and applying it again
    /// reproduces the amount within one unit.
    #[test]
    fn prop_amount_round_trip(
        (price, amount) in arb_price().prop_flat_map(|p| (Just(p), 0..=p))
    ) {
        let pct = percentage_from_amount(amount, price);
        let back = shareholder_profit_and_percentage(price, pct).shareholder_profit;
        prop_assert!((back - amount).abs() <= 1, "amount {} came back as {}", amount, back);
    }

    #[test]
    fn prop_parsed_percentage_is_in_range(raw in ".{0,12}") {
        if let Some(pct) = parse_percentage_input(&raw) {
            prop_assert!(pct >= Decimal::ZERO && pct <= Decimal::ONE_HUNDRED);
        } else {
            prop_assert!(raw.trim().is_empty());
        }
    }

    #[test]
    fn prop_parsed_amount_respects_max(raw in "[0-9,. -]{0,20}", max in 0i64..1_000_000) {
        if let Some(amount) = parse_amount_input(&raw, Some(max)) {
            prop_assert!(amount >= 0 && amount <= max);
        }
    }

    /// Any sequence of edits leaves the form consistent.
    #[test]
    fn prop_form_stays_consistent(
        price in arb_price(),
        pct in proptest::option::of(arb_percentage()),
        edits in proptest::collection::vec((arb_field(), "[0-9.,-]{0,14}"), 0..12)
    ) {
        let mut form = ProfitSplitForm::new(price, pct);
        assert_split_consistent(form.split())?;
        for (field, raw) in edits {
            form.apply(field, &raw);
            assert_split_consistent(form.split())?;
        }
    }
}

#[test]
fn scenario_forty_percent_of_one_million() {
    let split = ProfitSplit::compute(1_000_000, Some(Decimal::from(40)));
    assert_eq!(split.shareholder_profit, 400_000);
    assert_eq!(split.company_profit, 600_000);
    assert_eq!(split.company_percentage, Decimal::from(60));
}

#[test]
fn scenario_zero_percent_shareholder() {
    let split = ProfitSplit::compute(250_000, Some(Decimal::ZERO));
    assert_eq!(split.shareholder_profit, 0);
    assert_eq!(split.company_profit, 250_000);
}

#[test]
fn scenario_input_conventions() {
    assert_eq!(parse_amount_input("", None), None);
    assert_eq!(parse_amount_input("abc", None), Some(0));
    assert_eq!(parse_percentage_input("150"), Some(Decimal::ONE_HUNDRED));
    assert_eq!(parse_percentage_input("-10"), Some(Decimal::ZERO));
}
