//! Fixtures

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    destinations::Destination,
    fixtures::{destinations::DestinationsFixture, plans::PlanFixture},
    itinerary::ItineraryError,
    plan::{PlanError, TripPlan},
};

pub mod destinations;
pub mod plans;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Price below zero
    #[error("Negative price: {0}")]
    NegativePrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Price in a different currency than the plan
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Destination not found
    #[error("Destination not found: {0}")]
    DestinationNotFound(String),

    /// Invalid plan
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// Invalid itinerary
    #[error(transparent)]
    Itinerary(#[from] ItineraryError),
}

/// Fixture
///
/// Plans reference their destination by key, so destinations are loaded first.
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Destination key -> destination
    destinations: FxHashMap<String, Destination>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            destinations: FxHashMap::default(),
        }
    }

    /// Load destinations from a YAML fixture file
    ///
    /// Destinations already loaded under the same key are replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_destinations(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self
            .base_path
            .join("destinations")
            .join(format!("{name}.yml"));

        let contents = fs::read_to_string(&file_path)?;
        let fixture: DestinationsFixture = serde_norway::from_str(&contents)?;

        for (key, destination_fixture) in fixture.destinations {
            let destination = destination_fixture.into_destination(key.clone());

            self.destinations.insert(key, destination);
        }

        Ok(self)
    }

    /// Load a trip plan from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if its destination has not
    /// been loaded, or if any price is malformed or in another currency.
    pub fn load_plan(&self, name: &str) -> Result<TripPlan<'static>, FixtureError> {
        let file_path = self.base_path.join("plans").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: PlanFixture = serde_norway::from_str(&contents)?;

        let currency = plans::parse_currency(&fixture.currency)?;
        let destination = self.destination(&fixture.destination)?.clone();

        let flights = fixture
            .flights
            .into_iter()
            .map(|flight| flight.into_flight(currency))
            .collect::<Result<Vec<_>, _>>()?;

        let hotels = fixture
            .hotels
            .into_iter()
            .map(|hotel| hotel.into_hotel(currency))
            .collect::<Result<Vec<_>, _>>()?;

        let itinerary = fixture.itinerary.into_itinerary(currency)?;

        Ok(TripPlan::new(
            fixture.id,
            destination,
            flights,
            hotels,
            itinerary,
            currency,
        )?)
    }

    /// Get a destination by its key
    ///
    /// # Errors
    ///
    /// Returns an error if the destination is not found.
    pub fn destination(&self, key: &str) -> Result<&Destination, FixtureError> {
        self.destinations
            .get(key)
            .ok_or_else(|| FixtureError::DestinationNotFound(key.to_string()))
    }

    /// Get all destinations, highest match score first
    pub fn destinations(&self) -> Vec<&Destination> {
        let mut destinations: Vec<&Destination> = self.destinations.values().collect();

        destinations.sort_by(|a, b| b.match_score.cmp(&a.match_score).then_with(|| a.id.cmp(&b.id)));

        destinations
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
