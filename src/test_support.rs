//! Shared builders for unit tests.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use smallvec::{SmallVec, smallvec};

use crate::{
    catalog::{
        flights::{CabinClass, Flight},
        hotels::Hotel,
    },
    destinations::Destination,
    itinerary::{Activity, ActivityCategory, CompleteItinerary, DayItinerary, ItineraryError, Pacing},
    plan::{PlanError, TripPlan},
};

pub(crate) fn destination(id: &str) -> Destination {
    Destination {
        id: id.to_string(),
        name: id.to_string(),
        country: "Mexico".to_string(),
        match_score: 96,
        description: String::new(),
        climate: "Tropical".to_string(),
        best_month: "June".to_string(),
        reasons: SmallVec::new(),
        coordinates: None,
        alternatives: Vec::new(),
    }
}

pub(crate) fn flight(
    id: &str,
    price: i64,
    currency: &'static Currency,
    recommended: bool,
) -> Flight<'static> {
    Flight {
        id: id.to_string(),
        airline: id.to_string(),
        departure_city: "New York (JFK)".to_string(),
        arrival_city: "Cancún (CUN)".to_string(),
        departure_time: "8:00 AM".to_string(),
        arrival_time: "12:15 PM".to_string(),
        duration: "4h 15m".to_string(),
        price: Money::from_major(price, currency),
        stops: 0,
        class: CabinClass::Economy,
        recommended,
        tradeoffs: None,
    }
}

pub(crate) fn hotel(
    id: &str,
    total: i64,
    currency: &'static Currency,
    recommended: bool,
) -> Hotel<'static> {
    Hotel {
        id: id.to_string(),
        name: id.to_string(),
        stars: 5,
        price_per_night: Money::from_major(total / 7, currency),
        total_price: Money::from_major(total, currency),
        amenities: smallvec!["Pool".to_string()],
        rating: Decimal::new(48, 1),
        review_count: 1_000,
        location: "Hotel Zone".to_string(),
        kind: "Resort".to_string(),
        recommended,
    }
}

/// An itinerary of `days` days with one activity per day costing `daily_cost` major units.
pub(crate) fn itinerary(
    currency: &'static Currency,
    days: u16,
    daily_cost: i64,
) -> Result<CompleteItinerary<'static>, ItineraryError> {
    let days = (1..=days)
        .map(|day| {
            DayItinerary::new(
                day,
                format!("June {}", 14 + day),
                smallvec![Activity {
                    id: format!("activity-{day}"),
                    time: "9:00 AM".to_string(),
                    name: format!("Activity {day}"),
                    description: String::new(),
                    cost: Money::from_major(daily_cost, currency),
                    duration: "2 hours".to_string(),
                    category: ActivityCategory::Culture,
                    coordinates: None,
                }],
            )
        })
        .collect();

    Ok(CompleteItinerary::new(days, Pacing::new(40, 60)?))
}

/// Seven-day plan: flights 1200 (recommended) / 850 / 2100, hotels 2450 / 3150 / 1960 / 2240,
/// zero-cost activities.
pub(crate) fn plan(currency: &'static Currency) -> Result<TripPlan<'static>, PlanError> {
    TripPlan::new(
        "cancun-plan",
        destination("cancun"),
        vec![
            flight("direct-delta", 1_200, currency, true),
            flight("budget-spirit", 850, currency, false),
            flight("premium-american", 2_100, currency, false),
        ],
        vec![
            hotel("hyatt-zilara", 2_450, currency, false),
            hotel("ritz-carlton", 3_150, currency, false),
            hotel("secrets-moxche", 1_960, currency, false),
            hotel("live-aqua", 2_240, currency, false),
        ],
        itinerary(currency, 7, 0)?,
        currency,
    )
}
