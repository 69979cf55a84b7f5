//! Trip Plan

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    budget::BudgetStatus,
    catalog::{Listing, flights::Flight, hotels::Hotel, recommended_or_first},
    destinations::Destination,
    itinerary::{CompleteItinerary, ItineraryError},
    pricing::ensure_currency,
};

/// Errors related to trip plan construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// A plan needs a non-empty identifier.
    #[error("trip plan id must not be empty")]
    EmptyId,

    /// A catalog entry is priced in a different currency (entry, entry currency, plan currency).
    #[error("{0} is priced in {1}, but the plan uses {2}")]
    CurrencyMismatch(String, &'static str, &'static str),

    /// Wrapped itinerary error.
    #[error(transparent)]
    Itinerary(#[from] ItineraryError),
}

/// Everything one planning (or refinement) run produced.
///
/// Catalogs and itinerary are immutable once the plan exists. The advisory budget is a
/// snapshot taken by the planning step and is never used as the live budget; sessions always
/// recompute from their own selection.
#[derive(Debug, Clone, PartialEq)]
pub struct TripPlan<'a> {
    id: String,
    revision: u32,
    destination: Destination,
    flights: Vec<Flight<'a>>,
    hotels: Vec<Hotel<'a>>,
    itinerary: CompleteItinerary<'a>,
    currency: &'static Currency,
    advisory_budget: Option<BudgetStatus<'a>>,
}

impl<'a> TripPlan<'a> {
    /// Create a plan, checking that every price uses the plan currency.
    ///
    /// # Errors
    ///
    /// - [`PlanError::EmptyId`]: the id is blank.
    /// - [`PlanError::CurrencyMismatch`]: a flight, hotel or activity uses another currency.
    pub fn new(
        id: impl Into<String>,
        destination: Destination,
        flights: Vec<Flight<'a>>,
        hotels: Vec<Hotel<'a>>,
        itinerary: CompleteItinerary<'a>,
        currency: &'static Currency,
    ) -> Result<Self, PlanError> {
        let id = id.into();

        if id.trim().is_empty() {
            return Err(PlanError::EmptyId);
        }

        for flight in &flights {
            check_currency(&format!("flight {}", flight.id), &flight.price, currency)?;
        }

        for hotel in &hotels {
            let label = format!("hotel {}", hotel.id);

            check_currency(&label, &hotel.price_per_night, currency)?;
            check_currency(&label, &hotel.total_price, currency)?;
        }

        for activity in itinerary.activities() {
            check_currency(&format!("activity {}", activity.id), &activity.cost, currency)?;
        }

        Ok(Self {
            id,
            revision: 0,
            destination,
            flights,
            hotels,
            itinerary,
            currency,
            advisory_budget: None,
        })
    }

    /// Attach the planning step's budget snapshot.
    #[must_use]
    pub fn with_advisory_budget(mut self, budget: BudgetStatus<'a>) -> Self {
        self.advisory_budget = Some(budget);
        self
    }

    /// Plan identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of refinements applied since the initial plan.
    pub fn revision(&self) -> u32 {
        self.revision
    }

    /// Destination.
    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Flight catalog.
    pub fn flights(&self) -> &[Flight<'a>] {
        &self.flights
    }

    /// Hotel catalog.
    pub fn hotels(&self) -> &[Hotel<'a>] {
        &self.hotels
    }

    /// Itinerary.
    pub fn itinerary(&self) -> &CompleteItinerary<'a> {
        &self.itinerary
    }

    /// Currency of every price in the plan.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Budget snapshot taken when the plan was produced, if any.
    pub fn advisory_budget(&self) -> Option<&BudgetStatus<'a>> {
        self.advisory_budget.as_ref()
    }

    /// Id of the flight a fresh selection starts from.
    pub fn default_flight_id(&self) -> Option<&str> {
        recommended_or_first(&self.flights).map(Listing::id)
    }

    /// Id of the hotel a fresh selection starts from.
    pub fn default_hotel_id(&self) -> Option<&str> {
        recommended_or_first(&self.hotels).map(Listing::id)
    }

    /// Successor plan sharing this plan's id, one revision later and without a budget snapshot.
    pub(crate) fn next_revision(
        &self,
        destination: Destination,
        hotels: Vec<Hotel<'a>>,
        itinerary: CompleteItinerary<'a>,
    ) -> Self {
        Self {
            id: self.id.clone(),
            revision: self.revision.saturating_add(1),
            destination,
            flights: self.flights.clone(),
            hotels,
            itinerary,
            currency: self.currency,
            advisory_budget: None,
        }
    }
}

fn check_currency(
    label: &str,
    money: &Money<'_, Currency>,
    currency: &'static Currency,
) -> Result<(), PlanError> {
    ensure_currency(money, currency)
        .map_err(|mismatch| PlanError::CurrencyMismatch(label.to_string(), mismatch.actual, mismatch.expected))
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{EUR, USD};
    use testresult::TestResult;

    use crate::test_support::{destination, flight, hotel, itinerary, plan};

    use super::*;

    #[test]
    fn new_accepts_single_currency_plan() -> TestResult {
        let plan = plan(USD)?;

        assert_eq!(plan.id(), "cancun-plan");
        assert_eq!(plan.revision(), 0);
        assert_eq!(plan.currency(), USD);
        assert!(plan.advisory_budget().is_none());

        Ok(())
    }

    #[test]
    fn new_rejects_blank_id() -> TestResult {
        let result = TripPlan::new(
            "  ",
            destination("cancun"),
            vec![],
            vec![],
            itinerary(USD, 1, 0)?,
            USD,
        );

        assert_eq!(result, Err(PlanError::EmptyId));

        Ok(())
    }

    #[test]
    fn new_rejects_mixed_currencies() -> TestResult {
        let result = TripPlan::new(
            "plan",
            destination("cancun"),
            vec![flight("delta", 1_200, EUR, false)],
            vec![hotel("hyatt", 2_450, USD, false)],
            itinerary(USD, 7, 0)?,
            USD,
        );

        assert_eq!(
            result,
            Err(PlanError::CurrencyMismatch("flight delta".to_string(), "EUR", "USD"))
        );

        Ok(())
    }

    #[test]
    fn new_rejects_activity_in_other_currency() -> TestResult {
        let result = TripPlan::new(
            "plan",
            destination("cancun"),
            vec![],
            vec![],
            itinerary(EUR, 2, 40)?,
            USD,
        );

        assert!(matches!(result, Err(PlanError::CurrencyMismatch(label, "EUR", "USD")) if label.starts_with("activity")));

        Ok(())
    }

    #[test]
    fn defaults_prefer_recommended_listings() -> TestResult {
        let plan = TripPlan::new(
            "plan",
            destination("cancun"),
            vec![flight("spirit", 850, USD, false), flight("delta", 1_200, USD, true)],
            vec![hotel("hyatt", 2_450, USD, false), hotel("secrets", 1_960, USD, false)],
            itinerary(USD, 7, 0)?,
            USD,
        )?;

        assert_eq!(plan.default_flight_id(), Some("delta"));
        assert_eq!(plan.default_hotel_id(), Some("hyatt"));

        Ok(())
    }

    #[test]
    fn defaults_on_empty_catalogs_are_none() -> TestResult {
        let plan = TripPlan::new("plan", destination("cancun"), vec![], vec![], itinerary(USD, 1, 0)?, USD)?;

        assert!(plan.default_flight_id().is_none());
        assert!(plan.default_hotel_id().is_none());

        Ok(())
    }
}
