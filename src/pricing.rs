//! Pricing
//!
//! Minor-unit arithmetic shared by the plan validation and the budget engine.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// A money amount whose currency differs from the plan currency.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected currency {expected}, found {actual}")]
pub struct CurrencyMismatch {
    /// ISO code of the plan currency.
    pub expected: &'static str,

    /// ISO code found on the offending amount.
    pub actual: &'static str,
}

/// Checks that `money` is denominated in `currency`.
///
/// # Errors
///
/// Returns a [`CurrencyMismatch`] naming both ISO codes when they differ.
pub fn ensure_currency(
    money: &Money<'_, Currency>,
    currency: &'static Currency,
) -> Result<(), CurrencyMismatch> {
    let actual = money.currency();

    if actual == currency {
        Ok(())
    } else {
        Err(CurrencyMismatch {
            expected: currency.iso_alpha_code,
            actual: actual.iso_alpha_code,
        })
    }
}

/// Sums the minor units of a list of amounts, saturating on overflow.
pub fn sum_minor<'m, 'a: 'm>(amounts: impl IntoIterator<Item = &'m Money<'a, Currency>>) -> i64 {
    amounts
        .into_iter()
        .fold(0_i64, |acc, amount| acc.saturating_add(amount.to_minor_units()))
}

/// Scales a minor-unit amount by `factor`, rounding half away from zero.
pub fn scale_minor(minor: i64, factor: Decimal) -> i64 {
    (Decimal::from(minor) * factor)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(if factor.is_sign_negative() { i64::MIN } else { i64::MAX })
}

/// Converts whole major units into minor units for the given currency.
pub fn major_to_minor(major: i64, currency: &Currency) -> i64 {
    Money::from_major(major, currency).to_minor_units()
}

/// A per-day rate in major units multiplied by a number of days, in minor units.
pub fn per_day_minor(rate_major: i64, days: usize, currency: &Currency) -> i64 {
    let days = i64::try_from(days).unwrap_or(i64::MAX);

    major_to_minor(rate_major, currency).saturating_mul(days)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, JPY, USD};

    use super::*;

    #[test]
    fn ensure_currency_accepts_matching_currency() {
        let price = Money::from_minor(1000, USD);

        assert_eq!(ensure_currency(&price, USD), Ok(()));
    }

    #[test]
    fn ensure_currency_reports_both_codes() {
        let price = Money::from_minor(1000, GBP);

        assert_eq!(
            ensure_currency(&price, USD),
            Err(CurrencyMismatch {
                expected: "USD",
                actual: "GBP",
            })
        );
    }

    #[test]
    fn sum_minor_adds_all_amounts() {
        let amounts = [
            Money::from_minor(100, USD),
            Money::from_minor(250, USD),
            Money::from_minor(0, USD),
        ];

        assert_eq!(sum_minor(&amounts), 350);
    }

    #[test]
    fn sum_minor_of_nothing_is_zero() {
        let amounts: [Money<'static, Currency>; 0] = [];

        assert_eq!(sum_minor(&amounts), 0);
    }

    #[test]
    fn scale_minor_rounds_half_away_from_zero() {
        assert_eq!(scale_minor(101, Decimal::new(5, 1)), 51);
        assert_eq!(scale_minor(1000, Decimal::new(75, 2)), 750);
        assert_eq!(scale_minor(3, Decimal::ONE), 3);
    }

    #[test]
    fn major_to_minor_accepts_any_currency_borrow() {
        let local = *JPY;

        assert_eq!(major_to_minor(3_000, &local), 3_000);
        assert_eq!(major_to_minor(3_000, USD), 300_000);
    }

    #[test]
    fn per_day_minor_respects_currency_exponent() {
        assert_eq!(per_day_minor(80, 7, USD), 56_000);
        assert_eq!(per_day_minor(80, 7, JPY), 560);
    }
}
