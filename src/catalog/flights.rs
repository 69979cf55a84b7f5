//! Flights

use std::fmt;

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::catalog::Listing;

/// Cabin class of a flight offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CabinClass {
    /// Economy cabin
    Economy,

    /// Premium economy cabin
    Premium,

    /// Business cabin
    Business,

    /// First class cabin
    First,
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CabinClass::Economy => "economy",
            CabinClass::Premium => "premium",
            CabinClass::Business => "business",
            CabinClass::First => "first",
        };

        f.write_str(label)
    }
}

/// A flight offer in a trip plan's catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight<'a> {
    /// Catalog identifier
    pub id: String,

    /// Operating airline
    pub airline: String,

    /// Departure city and airport
    pub departure_city: String,

    /// Arrival city and airport
    pub arrival_city: String,

    /// Local departure time
    pub departure_time: String,

    /// Local arrival time
    pub arrival_time: String,

    /// Total journey duration, as displayed
    pub duration: String,

    /// Flat price for the whole booking
    pub price: Money<'a, Currency>,

    /// Number of stops
    pub stops: u8,

    /// Cabin class
    pub class: CabinClass,

    /// Flagged as the planner's recommendation
    pub recommended: bool,

    /// Short description of the trade-offs against the other offers
    pub tradeoffs: Option<String>,
}

impl Flight<'_> {
    /// Whether the flight flies without stops.
    pub fn is_direct(&self) -> bool {
        self.stops == 0
    }
}

impl Listing for Flight<'_> {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_recommended(&self) -> bool {
        self.recommended
    }
}
