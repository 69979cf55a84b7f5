//! Budget Table
//!
//! Terminal rendering of a [`BudgetStatus`]: one row per category followed by the ceiling,
//! allocation and status summary.

use std::io;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::budget::BudgetStatus;

/// Errors that can occur when writing a budget table.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the output failed.
    #[error("failed to write budget table: {0}")]
    Io(#[from] io::Error),
}

impl BudgetStatus<'_> {
    /// Writes the budget table and summary to `out`.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), RenderError> {
        let mut builder = Builder::default();

        builder.push_record(["Category", "Amount", "Share"]);

        let allocated_minor = self.allocated().to_minor_units();

        for (label, amount) in self.breakdown().categories() {
            builder.push_record([
                label.to_string(),
                format!("{amount}"),
                format!("{:.1}%", share_percent_points(amount, allocated_minor)),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(1..3), Alignment::right());

        writeln!(out, "\n{table}")?;

        writeln!(out, " Budget:     {}", self.budget())?;
        writeln!(out, " Allocated:  {}", self.allocated())?;

        if self.is_overspent() {
            writeln!(out, " Remaining:  {} (overspent)", self.remaining())?;
        } else {
            writeln!(out, " Remaining:  {}", self.remaining())?;
        }

        writeln!(
            out,
            " Used:       {:.1}%",
            percent_points_from_fractional_percentage(self.utilisation())
        )?;
        writeln!(out, " Status:     {} ({} tier)", self.status(), self.tier())?;

        Ok(())
    }
}

/// Share of `amount` in the allocated total, in percent points.
fn share_percent_points(amount: Money<'_, Currency>, allocated_minor: i64) -> Decimal {
    if allocated_minor == 0 {
        return Decimal::ZERO;
    }

    (Decimal::from(amount.to_minor_units()) * Decimal::ONE_HUNDRED / Decimal::from(allocated_minor))
        .round_dp(1)
}

fn percent_points_from_fractional_percentage(percentage: Percentage) -> Decimal {
    // `Percentage` is a fraction (e.g. 0.996), so multiply by 100 to print percent points.
    ((percentage * Decimal::ONE) * Decimal::ONE_HUNDRED).round_dp(1)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::{budget::compute_budget_status, test_support};

    use super::*;

    #[test]
    fn write_to_renders_every_category_and_summary() -> TestResult {
        let plan = test_support::plan(USD)?;
        let status =
            compute_budget_status(&plan, "direct-delta", "hyatt-zilara", Some(Money::from_major(5_000, USD)));

        let mut out = Vec::new();
        status.write_to(&mut out)?;

        let rendered = String::from_utf8(out)?;

        for label in ["Flights", "Accommodation", "Activities", "Food", "Transport"] {
            assert!(rendered.contains(label), "missing {label} row");
        }

        assert!(rendered.contains("Remaining:"));
        assert!(rendered.contains("Used:       99.6%"));
        assert!(rendered.contains("Status:     near (mid tier)"));
        assert!(!rendered.contains("(overspent)"));

        Ok(())
    }

    #[test]
    fn summary_lines_are_plain_text() -> TestResult {
        let plan = test_support::plan(USD)?;
        let status =
            compute_budget_status(&plan, "direct-delta", "hyatt-zilara", Some(Money::from_major(4_000, USD)));

        let mut out = Vec::new();
        status.write_to(&mut out)?;

        let rendered = String::from_utf8(out)?;
        let summary = rendered
            .lines()
            .skip_while(|line| !line.starts_with(" Budget:"))
            .collect::<Vec<_>>();

        assert_eq!(summary.len(), 5);
        assert!(summary.iter().all(|line| !line.contains('\x1b')));
        assert!(rendered.contains("(overspent)"));
        assert!(rendered.contains("Used:       124.5%"));
        assert!(rendered.contains("Status:     over (mid tier)"));

        Ok(())
    }

    #[test]
    fn fractional_percentage_prints_as_percent_points() {
        let used = Percentage::from(Decimal::new(996, 3));

        assert_eq!(percent_points_from_fractional_percentage(used), Decimal::new(996, 1));
    }

    #[test]
    fn share_of_empty_allocation_is_zero() {
        assert_eq!(share_percent_points(Money::from_minor(0, USD), 0), Decimal::ZERO);
    }

    #[test]
    fn share_is_rounded_to_one_decimal() {
        // 1200 of 4980
        assert_eq!(
            share_percent_points(Money::from_major(1_200, USD), 498_000),
            Decimal::new(241, 1)
        );
    }
}
