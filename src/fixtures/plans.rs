//! Plan Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;
use smallvec::SmallVec;

use crate::{
    catalog::{
        flights::{CabinClass, Flight},
        hotels::Hotel,
    },
    destinations::Coordinates,
    fixtures::FixtureError,
    itinerary::{Activity, ActivityCategory, CompleteItinerary, DayItinerary, Pacing},
};

/// A trip plan in YAML
#[derive(Debug, Deserialize)]
pub struct PlanFixture {
    /// Plan id
    pub id: String,

    /// Plan currency code (e.g., "USD")
    pub currency: String,

    /// Key of the destination in the loaded destinations
    pub destination: String,

    /// Flight catalog
    #[serde(default)]
    pub flights: Vec<FlightFixture>,

    /// Hotel catalog
    #[serde(default)]
    pub hotels: Vec<HotelFixture>,

    /// Day-by-day itinerary
    pub itinerary: ItineraryFixture,
}

/// Flight Fixture
#[derive(Debug, Deserialize)]
pub struct FlightFixture {
    /// Catalog id
    pub id: String,

    /// Airline
    pub airline: String,

    /// Departure city and airport
    pub departure_city: String,

    /// Arrival city and airport
    pub arrival_city: String,

    /// Local departure time
    pub departure_time: String,

    /// Local arrival time
    pub arrival_time: String,

    /// Displayed duration
    pub duration: String,

    /// Price (e.g., "1200 USD")
    pub price: String,

    /// Number of stops
    #[serde(default)]
    pub stops: u8,

    /// Cabin class
    pub class: CabinClass,

    /// Recommended by the planner
    #[serde(default)]
    pub recommended: bool,

    /// Trade-off note
    #[serde(default)]
    pub tradeoffs: Option<String>,
}

/// Hotel Fixture
#[derive(Debug, Deserialize)]
pub struct HotelFixture {
    /// Catalog id
    pub id: String,

    /// Hotel name
    pub name: String,

    /// Star rating
    pub stars: u8,

    /// Nightly rate (e.g., "350 USD")
    pub price_per_night: String,

    /// Price for the stay (e.g., "2450 USD")
    pub total_price: String,

    /// Amenities
    #[serde(default)]
    pub amenities: Vec<String>,

    /// Guest rating
    pub rating: Decimal,

    /// Review count
    #[serde(default)]
    pub review_count: u32,

    /// Area
    pub location: String,

    /// Property type
    #[serde(rename = "type")]
    pub kind: String,

    /// Recommended by the planner
    #[serde(default)]
    pub recommended: bool,
}

/// Itinerary Fixture
#[derive(Debug, Deserialize)]
pub struct ItineraryFixture {
    /// Pacing split, defaults to an even split
    #[serde(default)]
    pub pacing: Option<PacingFixture>,

    /// Days in calendar order
    pub days: Vec<DayFixture>,
}

/// Pacing Fixture
#[derive(Debug, Deserialize)]
pub struct PacingFixture {
    /// Share of each day spent on activities
    pub activities: u8,

    /// Share of each day spent relaxing
    pub relaxation: u8,
}

/// Day Fixture
#[derive(Debug, Deserialize)]
pub struct DayFixture {
    /// Day number
    pub day: u16,

    /// Displayed date
    pub date: String,

    /// Activities
    #[serde(default)]
    pub activities: Vec<ActivityFixture>,
}

/// Activity Fixture
#[derive(Debug, Deserialize)]
pub struct ActivityFixture {
    /// Activity id
    pub id: String,

    /// Start time
    pub time: String,

    /// Activity name
    pub name: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Cost (e.g., "120 USD")
    pub cost: String,

    /// Displayed duration
    pub duration: String,

    /// Category
    pub category: ActivityCategory,

    /// Map position
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

impl FlightFixture {
    /// Build the flight, priced in `currency`.
    ///
    /// # Errors
    ///
    /// Returns an error if the price is malformed or uses another currency.
    pub fn into_flight(self, currency: &'static Currency) -> Result<Flight<'static>, FixtureError> {
        Ok(Flight {
            price: parse_money(&self.price, currency)?,
            id: self.id,
            airline: self.airline,
            departure_city: self.departure_city,
            arrival_city: self.arrival_city,
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
            duration: self.duration,
            stops: self.stops,
            class: self.class,
            recommended: self.recommended,
            tradeoffs: self.tradeoffs,
        })
    }
}

impl HotelFixture {
    /// Build the hotel, priced in `currency`.
    ///
    /// # Errors
    ///
    /// Returns an error if a price is malformed or uses another currency.
    pub fn into_hotel(self, currency: &'static Currency) -> Result<Hotel<'static>, FixtureError> {
        Ok(Hotel {
            price_per_night: parse_money(&self.price_per_night, currency)?,
            total_price: parse_money(&self.total_price, currency)?,
            id: self.id,
            name: self.name,
            stars: self.stars,
            amenities: self.amenities.into_iter().collect(),
            rating: self.rating,
            review_count: self.review_count,
            location: self.location,
            kind: self.kind,
            recommended: self.recommended,
        })
    }
}

impl ItineraryFixture {
    /// Build the itinerary, priced in `currency`.
    ///
    /// # Errors
    ///
    /// Returns an error if a cost is malformed or the pacing does not add up.
    pub fn into_itinerary(
        self,
        currency: &'static Currency,
    ) -> Result<CompleteItinerary<'static>, FixtureError> {
        let pacing = match self.pacing {
            Some(pacing) => Pacing::new(pacing.activities, pacing.relaxation)?,
            None => Pacing::default(),
        };

        let days = self
            .days
            .into_iter()
            .map(|day| {
                let activities = day
                    .activities
                    .into_iter()
                    .map(|activity| activity.into_activity(currency))
                    .collect::<Result<SmallVec<_>, FixtureError>>()?;

                Ok(DayItinerary::new(day.day, day.date, activities))
            })
            .collect::<Result<Vec<_>, FixtureError>>()?;

        Ok(CompleteItinerary::new(days, pacing))
    }
}

impl ActivityFixture {
    fn into_activity(self, currency: &'static Currency) -> Result<Activity<'static>, FixtureError> {
        Ok(Activity {
            cost: parse_money(&self.cost, currency)?,
            id: self.id,
            time: self.time,
            name: self.name,
            description: self.description,
            duration: self.duration,
            category: self.category,
            coordinates: self.coordinates,
        })
    }
}

/// Parse price string (e.g., "2.99 GBP") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be represented in the currency's minor units, or if the
/// currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let currency = parse_currency(code)?;

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::from(10_i64.pow(currency.exponent)))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}

/// Parse an ISO currency code supported by fixtures
///
/// # Errors
///
/// Returns an error if the currency code is not recognized.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(FixtureError::UnknownCurrency(other.to_string())),
    }
}

/// Parse a non-negative price that must be in the plan currency.
fn parse_money(s: &str, currency: &'static Currency) -> Result<Money<'static, Currency>, FixtureError> {
    let (minor_units, found) = parse_price(s)?;

    if minor_units < 0 {
        return Err(FixtureError::NegativePrice(s.to_string()));
    }

    if found != currency {
        return Err(FixtureError::CurrencyMismatch(
            currency.iso_alpha_code.to_string(),
            found.iso_alpha_code.to_string(),
        ));
    }

    Ok(Money::from_minor(minor_units, currency))
}
