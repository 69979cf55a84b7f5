//! Tripwise prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    budget::{
        AllocationStatus, BudgetBreakdown, BudgetStatus, compute_budget_status,
        engine::DEFAULT_TIER, render::RenderError,
    },
    catalog::{
        Listing,
        flights::{CabinClass, Flight},
        hotels::Hotel,
        recommended_or_first, resolve,
    },
    destinations::{Alternative, Coordinates, Destination},
    fixtures::{Fixture, FixtureError},
    itinerary::{Activity, ActivityCategory, CompleteItinerary, DayItinerary, ItineraryError, Pacing},
    narrative::{VariantHistory, compose_summary, select_variant},
    plan::{PlanError, TripPlan},
    preferences::{PreferencesError, ValidatedPreferences, VacationPreferences},
    refinement::Refinement,
    session::{PlanningSession, Selection},
    tiers::{BudgetTier, TierAllowance, classify_budget_tier},
};
