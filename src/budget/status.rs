//! Budget Status

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::{
    budget::{AllocationStatus, BudgetBreakdown},
    tiers::BudgetTier,
};

/// The budget figures every consumer renders: the tracker, the checkout summary and the
/// booking bar all read the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetStatus<'a> {
    breakdown: BudgetBreakdown<'a>,
    budget: Money<'a, Currency>,
    allocated: Money<'a, Currency>,
    remaining: Money<'a, Currency>,
    status: AllocationStatus,
    tier: BudgetTier,
}

impl<'a> BudgetStatus<'a> {
    /// Derive every top-level figure from a breakdown and a ceiling in minor units.
    pub(crate) fn from_breakdown(
        breakdown: BudgetBreakdown<'a>,
        ceiling_minor: i64,
        tier: BudgetTier,
    ) -> Self {
        let currency = breakdown.currency();
        let allocated_minor = breakdown.total_minor();

        Self {
            breakdown,
            budget: Money::from_minor(ceiling_minor, currency),
            allocated: Money::from_minor(allocated_minor, currency),
            remaining: Money::from_minor(ceiling_minor.saturating_sub(allocated_minor), currency),
            status: AllocationStatus::classify(allocated_minor, ceiling_minor),
            tier,
        }
    }

    /// Per-category subtotals.
    pub fn breakdown(&self) -> &BudgetBreakdown<'a> {
        &self.breakdown
    }

    /// The ceiling the allocation was measured against.
    pub fn budget(&self) -> Money<'a, Currency> {
        self.budget
    }

    /// Total of the breakdown.
    pub fn allocated(&self) -> Money<'a, Currency> {
        self.allocated
    }

    /// Ceiling minus allocated; negative when over the ceiling.
    pub fn remaining(&self) -> Money<'a, Currency> {
        self.remaining
    }

    /// Status band.
    pub fn status(&self) -> AllocationStatus {
        self.status
    }

    /// Tier whose flat rates produced the estimates.
    pub fn tier(&self) -> BudgetTier {
        self.tier
    }

    /// Allocated as a fraction of the ceiling; zero when the ceiling is zero.
    pub fn utilisation(&self) -> Percentage {
        let ceiling = self.budget.to_minor_units();

        if ceiling <= 0 {
            return Percentage::from(Decimal::ZERO);
        }

        Percentage::from(Decimal::from(self.allocated.to_minor_units()) / Decimal::from(ceiling))
    }

    /// Whether the allocation exceeds the ceiling at all, regardless of status band.
    pub fn is_overspent(&self) -> bool {
        self.remaining.to_minor_units() < 0
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;

    use super::*;

    fn breakdown() -> BudgetBreakdown<'static> {
        BudgetBreakdown::from_minor(120_000, 245_000, 56_000, 56_000, 21_000, USD)
    }

    #[test]
    fn figures_reconcile_with_breakdown() {
        let status = BudgetStatus::from_breakdown(breakdown(), 500_000, BudgetTier::Mid);

        assert_eq!(status.allocated(), status.breakdown().total());
        assert_eq!(status.budget(), Money::from_major(5_000, USD));
        assert_eq!(status.remaining(), Money::from_major(20, USD));
        assert_eq!(status.status(), AllocationStatus::Near);
        assert!(!status.is_overspent());
    }

    #[test]
    fn remaining_goes_negative_when_over() {
        let status = BudgetStatus::from_breakdown(breakdown(), 400_000, BudgetTier::Mid);

        assert_eq!(status.remaining(), Money::from_major(-980, USD));
        assert_eq!(status.status(), AllocationStatus::Over);
        assert!(status.is_overspent());
    }

    #[test]
    fn utilisation_is_fraction_of_ceiling() {
        let status = BudgetStatus::from_breakdown(breakdown(), 500_000, BudgetTier::Mid);

        assert_eq!(status.utilisation() * Decimal::ONE, Decimal::new(996, 3));
    }

    #[test]
    fn utilisation_with_zero_ceiling_is_zero() {
        let empty = BudgetBreakdown::from_minor(0, 0, 0, 0, 0, USD);
        let status = BudgetStatus::from_breakdown(empty, 0, BudgetTier::Mid);

        assert_eq!(status.utilisation() * Decimal::ONE, Decimal::ZERO);
        assert_eq!(status.status(), AllocationStatus::Under);
    }
}
