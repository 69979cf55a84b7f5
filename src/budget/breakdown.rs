//! Budget Breakdown

use rusty_money::{Money, iso::Currency};

/// Per-category subtotals of a trip budget.
///
/// The total is not stored; [`BudgetBreakdown::total`] always sums the five subtotals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetBreakdown<'a> {
    flights: Money<'a, Currency>,
    accommodation: Money<'a, Currency>,
    activities: Money<'a, Currency>,
    food: Money<'a, Currency>,
    transport: Money<'a, Currency>,
    currency: &'static Currency,
}

impl<'a> BudgetBreakdown<'a> {
    /// Build a breakdown from minor-unit subtotals.
    pub(crate) fn from_minor(
        flights: i64,
        accommodation: i64,
        activities: i64,
        food: i64,
        transport: i64,
        currency: &'static Currency,
    ) -> Self {
        Self {
            flights: Money::from_minor(flights, currency),
            accommodation: Money::from_minor(accommodation, currency),
            activities: Money::from_minor(activities, currency),
            food: Money::from_minor(food, currency),
            transport: Money::from_minor(transport, currency),
            currency,
        }
    }

    /// Flight cost.
    pub fn flights(&self) -> Money<'a, Currency> {
        self.flights
    }

    /// Accommodation cost.
    pub fn accommodation(&self) -> Money<'a, Currency> {
        self.accommodation
    }

    /// Activities cost.
    pub fn activities(&self) -> Money<'a, Currency> {
        self.activities
    }

    /// Food cost.
    pub fn food(&self) -> Money<'a, Currency> {
        self.food
    }

    /// Local transport cost.
    pub fn transport(&self) -> Money<'a, Currency> {
        self.transport
    }

    /// Sum of the five subtotals, in minor units.
    pub fn total_minor(&self) -> i64 {
        self.categories()
            .iter()
            .fold(0_i64, |acc, (_, amount)| acc.saturating_add(amount.to_minor_units()))
    }

    /// Sum of the five subtotals.
    pub fn total(&self) -> Money<'a, Currency> {
        Money::from_minor(self.total_minor(), self.currency)
    }

    /// Labelled subtotals in display order.
    pub fn categories(&self) -> [(&'static str, Money<'a, Currency>); 5] {
        [
            ("Flights", self.flights),
            ("Accommodation", self.accommodation),
            ("Activities", self.activities),
            ("Food", self.food),
            ("Transport", self.transport),
        ]
    }

    /// Currency of every subtotal.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
