//! Budget Engine
//!
//! Derives a [`BudgetStatus`] from a plan, the selected flight and hotel, and an optional
//! ceiling. The engine is total: unknown ids fall back to the first catalog entry, an empty
//! itinerary falls back to flat per-day estimates, and a missing ceiling is replaced by the
//! computed total. Each category rule is exposed on its own so it can be reproduced in
//! isolation.

use rusty_money::{Money, iso::Currency};
use tracing::{debug, warn};

use crate::{
    budget::{BudgetBreakdown, BudgetStatus},
    catalog::resolve,
    itinerary::CompleteItinerary,
    plan::TripPlan,
    pricing::{per_day_minor, scale_minor},
    tiers::{BudgetTier, classify_budget_tier},
};

/// Tier used when the traveller has not stated a ceiling.
pub const DEFAULT_TIER: BudgetTier = BudgetTier::Mid;

/// Computes the budget for the given selection.
///
/// A ceiling is ignored (and the computed total used instead) when it is zero, negative, or
/// in a different currency than the plan.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(
        plan_id = plan.id(),
        revision = plan.revision(),
        flight = selected_flight_id,
        hotel = selected_hotel_id
    )
)]
pub fn compute_budget_status<'a>(
    plan: &TripPlan<'a>,
    selected_flight_id: &str,
    selected_hotel_id: &str,
    ceiling: Option<Money<'a, Currency>>,
) -> BudgetStatus<'a> {
    let currency = plan.currency();
    let ceiling = ceiling.filter(|ceiling| is_usable_ceiling(ceiling, currency));
    let tier = ceiling.as_ref().map_or(DEFAULT_TIER, classify_budget_tier);
    let itinerary = plan.itinerary();

    let breakdown = BudgetBreakdown::from_minor(
        flight_cost_minor(plan, selected_flight_id),
        accommodation_cost_minor(plan, selected_hotel_id),
        activities_cost_minor(itinerary, tier, currency),
        food_cost_minor(itinerary, tier, currency),
        transport_cost_minor(itinerary, tier, currency),
        currency,
    );

    let ceiling_minor = ceiling.map_or_else(
        || breakdown.total_minor(),
        |ceiling| ceiling.to_minor_units(),
    );

    let status = BudgetStatus::from_breakdown(breakdown, ceiling_minor, tier);

    debug!(
        %tier,
        allocated = %status.allocated(),
        budget = %status.budget(),
        status = %status.status(),
        "computed budget status"
    );

    status
}

/// Price of the selected flight, or of the first flight when the id is unknown.
pub fn flight_cost_minor(plan: &TripPlan<'_>, selected_flight_id: &str) -> i64 {
    resolve(plan.flights(), selected_flight_id).map_or(0, |flight| flight.price.to_minor_units())
}

/// Total stay price of the selected hotel, or of the first hotel when the id is unknown.
pub fn accommodation_cost_minor(plan: &TripPlan<'_>, selected_hotel_id: &str) -> i64 {
    resolve(plan.hotels(), selected_hotel_id).map_or(0, |hotel| hotel.total_price.to_minor_units())
}

/// Itinerary activity costs scaled for the tier, or the tier's daily estimate when the
/// itinerary carries no costs.
pub fn activities_cost_minor(
    itinerary: &CompleteItinerary<'_>,
    tier: BudgetTier,
    currency: &'static Currency,
) -> i64 {
    let allowance = tier.allowance();
    let scaled = scale_minor(itinerary.activities_cost_minor(), allowance.activity_scale);

    if scaled == 0 {
        per_day_minor(allowance.daily_activities, itinerary.day_count(), currency)
    } else {
        scaled
    }
}

/// Daily food allowance for the tier across every itinerary day.
pub fn food_cost_minor(
    itinerary: &CompleteItinerary<'_>,
    tier: BudgetTier,
    currency: &'static Currency,
) -> i64 {
    per_day_minor(tier.allowance().daily_food, itinerary.day_count(), currency)
}

/// Daily local transport allowance for the tier across every itinerary day.
pub fn transport_cost_minor(
    itinerary: &CompleteItinerary<'_>,
    tier: BudgetTier,
    currency: &'static Currency,
) -> i64 {
    per_day_minor(tier.allowance().daily_transport, itinerary.day_count(), currency)
}

fn is_usable_ceiling(ceiling: &Money<'_, Currency>, currency: &'static Currency) -> bool {
    if ceiling.currency() != currency {
        warn!(
            ceiling_currency = ceiling.currency().iso_alpha_code,
            plan_currency = currency.iso_alpha_code,
            "ignoring budget ceiling in a different currency"
        );

        return false;
    }

    ceiling.to_minor_units() > 0
}
