//! Planning Session
//!
//! Live selection state for one planning run. Every change to the flight, the hotel or the
//! budget ceiling recomputes the [`BudgetStatus`] before the call returns, so there is never a
//! moment where the selection and the displayed budget disagree.

use rusty_money::{Money, iso::Currency};
use tracing::{debug, info};

use crate::{
    budget::{BudgetStatus, compute_budget_status},
    catalog::{flights::Flight, hotels::Hotel, resolve},
    plan::TripPlan,
};

/// The traveller's current choices.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    /// Selected flight id
    pub flight_id: String,

    /// Selected hotel id
    pub hotel_id: String,

    /// Stated budget ceiling, if any
    pub ceiling: Option<Money<'a, Currency>>,
}

impl<'a> Selection<'a> {
    /// Starting selection for a plan: its recommended flight and hotel, else the first ones.
    pub fn for_plan(plan: &TripPlan<'a>, ceiling: Option<Money<'a, Currency>>) -> Self {
        Self {
            flight_id: plan.default_flight_id().unwrap_or_default().to_string(),
            hotel_id: plan.default_hotel_id().unwrap_or_default().to_string(),
            ceiling,
        }
    }
}

/// A plan together with the selection made against it and the budget derived from both.
#[derive(Debug, Clone)]
pub struct PlanningSession<'a> {
    plan: TripPlan<'a>,
    selection: Selection<'a>,
    budget: BudgetStatus<'a>,
}

impl<'a> PlanningSession<'a> {
    /// Start a session on a freshly planned trip.
    pub fn new(plan: TripPlan<'a>, ceiling: Option<Money<'a, Currency>>) -> Self {
        let selection = Selection::for_plan(&plan, ceiling);
        let budget = recompute(&plan, &selection);

        info!(
            plan_id = plan.id(),
            flight = %selection.flight_id,
            hotel = %selection.hotel_id,
            "planning session started"
        );

        Self {
            plan,
            selection,
            budget,
        }
    }

    /// Select a different flight.
    pub fn on_flight_change(&mut self, flight_id: impl Into<String>) -> &BudgetStatus<'a> {
        self.selection.flight_id = flight_id.into();
        self.refresh()
    }

    /// Select a different hotel.
    pub fn on_hotel_change(&mut self, hotel_id: impl Into<String>) -> &BudgetStatus<'a> {
        self.selection.hotel_id = hotel_id.into();
        self.refresh()
    }

    /// Change (or clear) the budget ceiling.
    pub fn set_budget_ceiling(&mut self, ceiling: Option<Money<'a, Currency>>) -> &BudgetStatus<'a> {
        self.selection.ceiling = ceiling;
        self.refresh()
    }

    /// Swap in a new plan, typically the result of a refinement.
    ///
    /// The selection restarts from the new plan's recommendations and the budget is computed
    /// from that selection with the current ceiling; the plan's own budget snapshot is ignored.
    pub fn replace_plan(&mut self, plan: TripPlan<'a>) -> &BudgetStatus<'a> {
        self.selection = Selection::for_plan(&plan, self.selection.ceiling);
        self.plan = plan;

        info!(
            plan_id = self.plan.id(),
            revision = self.plan.revision(),
            flight = %self.selection.flight_id,
            hotel = %self.selection.hotel_id,
            "plan replaced"
        );

        self.refresh()
    }

    /// Current plan.
    pub fn plan(&self) -> &TripPlan<'a> {
        &self.plan
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection<'a> {
        &self.selection
    }

    /// Budget for the current selection.
    pub fn budget(&self) -> &BudgetStatus<'a> {
        &self.budget
    }

    /// The flight the budget was computed with, after id fallback.
    pub fn selected_flight(&self) -> Option<&Flight<'a>> {
        resolve(self.plan.flights(), &self.selection.flight_id)
    }

    /// The hotel the budget was computed with, after id fallback.
    pub fn selected_hotel(&self) -> Option<&Hotel<'a>> {
        resolve(self.plan.hotels(), &self.selection.hotel_id)
    }

    fn refresh(&mut self) -> &BudgetStatus<'a> {
        self.budget = recompute(&self.plan, &self.selection);
        &self.budget
    }
}

fn recompute<'a>(plan: &TripPlan<'a>, selection: &Selection<'a>) -> BudgetStatus<'a> {
    let budget = compute_budget_status(
        plan,
        &selection.flight_id,
        &selection.hotel_id,
        selection.ceiling,
    );

    debug!(
        flight = %selection.flight_id,
        hotel = %selection.hotel_id,
        status = %budget.status(),
        "budget recomputed"
    );

    budget
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::{budget::AllocationStatus, test_support};

    use super::*;

    fn usd(major: i64) -> Money<'static, Currency> {
        Money::from_major(major, USD)
    }

    #[test]
    fn new_session_starts_from_recommended_flight() -> TestResult {
        let session = PlanningSession::new(test_support::plan(USD)?, Some(usd(5_000)));

        assert_eq!(session.selection().flight_id, "direct-delta");
        assert_eq!(session.selection().hotel_id, "hyatt-zilara");
        assert_eq!(session.budget().allocated(), usd(4_980));

        Ok(())
    }

    #[test]
    fn hotel_change_recomputes_immediately() -> TestResult {
        let mut session = PlanningSession::new(test_support::plan(USD)?, Some(usd(5_000)));

        let budget = *session.on_hotel_change("secrets-moxche");

        assert_eq!(budget.breakdown().accommodation(), usd(1_960));
        assert_eq!(budget.allocated(), usd(4_490));
        assert_eq!(session.budget(), &budget);
        assert_eq!(session.selected_hotel().map(|hotel| hotel.id.as_str()), Some("secrets-moxche"));

        Ok(())
    }

    #[test]
    fn flight_change_recomputes_immediately() -> TestResult {
        let mut session = PlanningSession::new(test_support::plan(USD)?, Some(usd(5_000)));

        let status = session.on_flight_change("premium-american").status();

        // 2100 + 2450 + 560 + 560 + 210 against 5000
        assert_eq!(status, AllocationStatus::Over);
        assert_eq!(session.budget().breakdown().flights(), usd(2_100));
        assert_eq!(session.budget().allocated(), usd(5_880));

        Ok(())
    }

    #[test]
    fn ceiling_change_reclassifies_tier() -> TestResult {
        let mut session = PlanningSession::new(test_support::plan(USD)?, Some(usd(5_000)));

        let budget = *session.set_budget_ceiling(Some(usd(10_000)));

        assert_eq!(budget.allocated(), usd(5_680));
        assert_eq!(budget.status(), AllocationStatus::Under);

        let cleared = *session.set_budget_ceiling(None);

        assert_eq!(cleared.budget(), cleared.allocated());

        Ok(())
    }

    #[test]
    fn unknown_selection_reports_fallback_listing() -> TestResult {
        let mut session = PlanningSession::new(test_support::plan(USD)?, None);

        session.on_hotel_change("closed-hotel");

        assert_eq!(session.selection().hotel_id, "closed-hotel");
        assert_eq!(session.selected_hotel().map(|hotel| hotel.id.as_str()), Some("hyatt-zilara"));

        Ok(())
    }

    #[test]
    fn replace_plan_ignores_advisory_budget_and_keeps_ceiling() -> TestResult {
        let plan = test_support::plan(USD)?;
        let mut session = PlanningSession::new(plan.clone(), Some(usd(5_000)));

        session.on_hotel_change("ritz-carlton");

        let stale = compute_budget_status(&plan, "budget-spirit", "secrets-moxche", Some(usd(99_000)));
        let budget = *session.replace_plan(plan.with_advisory_budget(stale));

        assert_eq!(session.selection().hotel_id, "hyatt-zilara");
        assert_eq!(session.selection().ceiling, Some(usd(5_000)));
        assert_eq!(budget.allocated(), usd(4_980));
        assert_ne!(budget, stale);

        Ok(())
    }
}
