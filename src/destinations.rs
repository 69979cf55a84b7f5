//! Destinations

use rust_decimal::Decimal;
use serde::Deserialize;
use smallvec::SmallVec;

/// Latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees
    pub lat: Decimal,

    /// Longitude in degrees
    pub lng: Decimal,
}

/// A nearby alternative the planner considered instead of the chosen destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Alternative {
    /// Alternative destination name
    pub name: String,

    /// Estimated price difference against the chosen destination, in whole units
    pub price_diff: i64,

    /// Match score out of 100
    pub match_score: u8,
}

/// The destination a trip plan was built around.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    /// Identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Country
    pub country: String,

    /// Match score out of 100
    pub match_score: u8,

    /// Short pitch
    pub description: String,

    /// Climate summary
    pub climate: String,

    /// Best month(s) to travel
    pub best_month: String,

    /// Why the destination was picked
    pub reasons: SmallVec<[String; 5]>,

    /// Map position
    pub coordinates: Option<Coordinates>,

    /// Alternatives the traveller could switch to
    pub alternatives: Vec<Alternative>,
}
