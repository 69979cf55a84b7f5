//! Refinement
//!
//! A refinement produces the next revision of a plan. It never patches budget figures: the
//! result carries no budget snapshot, and a session given the refined plan recomputes.

use std::cmp::Reverse;

use tracing::debug;

use crate::{
    catalog::hotels::Hotel,
    destinations::Destination,
    itinerary::Pacing,
    plan::{PlanError, TripPlan},
};

/// Pacing after asking for a busier trip.
pub const MORE_ACTIVITIES_PACING: (u8, u8) = (60, 40);

/// Pacing after asking for a calmer trip.
pub const LESS_ACTIVITIES_PACING: (u8, u8) = (20, 80);

/// A change the traveller asked for after seeing a plan.
#[derive(Debug, Clone, PartialEq)]
pub enum Refinement {
    /// Recommend the cheapest stay.
    Cheaper,

    /// Recommend the most expensive stay.
    Upgrade,

    /// Plan for a different destination.
    ChangeDestination(Box<Destination>),

    /// Spend more of each day on activities.
    MoreActivities,

    /// Spend more of each day relaxing.
    LessActivities,
}

impl TripPlan<'_> {
    /// Apply a refinement, producing the next revision of this plan.
    ///
    /// # Errors
    ///
    /// - [`PlanError::Itinerary`]: the refined pacing is invalid.
    pub fn refine(&self, refinement: Refinement) -> Result<Self, PlanError> {
        let mut destination = self.destination().clone();
        let mut hotels = self.hotels().to_vec();
        let mut itinerary = self.itinerary().clone();

        match refinement {
            Refinement::Cheaper => {
                let cheapest = hotels
                    .iter()
                    .min_by_key(|hotel| hotel.total_price.to_minor_units())
                    .map(|hotel| hotel.id.clone());

                recommend_only(&mut hotels, cheapest.as_deref());
            }
            Refinement::Upgrade => {
                // Earliest listing wins a tie, as with the cheapest.
                let priciest = hotels
                    .iter()
                    .min_by_key(|hotel| Reverse(hotel.total_price.to_minor_units()))
                    .map(|hotel| hotel.id.clone());

                recommend_only(&mut hotels, priciest.as_deref());
            }
            Refinement::ChangeDestination(next) => destination = *next,
            Refinement::MoreActivities => {
                let (activities, relaxation) = MORE_ACTIVITIES_PACING;

                itinerary = itinerary.with_pacing(Pacing::new(activities, relaxation)?);
            }
            Refinement::LessActivities => {
                let (activities, relaxation) = LESS_ACTIVITIES_PACING;

                itinerary = itinerary.with_pacing(Pacing::new(activities, relaxation)?);
            }
        }

        let refined = self.next_revision(destination, hotels, itinerary);

        debug!(
            plan_id = refined.id(),
            revision = refined.revision(),
            destination = %refined.destination().id,
            "refined plan"
        );

        Ok(refined)
    }
}

fn recommend_only(hotels: &mut [Hotel<'_>], id: Option<&str>) {
    let Some(id) = id else {
        return;
    };

    for hotel in hotels {
        hotel.recommended = hotel.id == id;
    }
}
