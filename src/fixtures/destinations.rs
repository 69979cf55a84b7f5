//! Destination Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::destinations::{Alternative, Coordinates, Destination};

/// Wrapper for destinations in YAML
#[derive(Debug, Deserialize)]
pub struct DestinationsFixture {
    /// Map of destination id -> destination fixture
    pub destinations: FxHashMap<String, DestinationFixture>,
}

/// Destination Fixture
#[derive(Debug, Deserialize)]
pub struct DestinationFixture {
    /// Display name
    pub name: String,

    /// Country
    pub country: String,

    /// Match score out of 100
    pub match_score: u8,

    /// Short pitch
    #[serde(default)]
    pub description: String,

    /// Climate summary
    #[serde(default)]
    pub climate: String,

    /// Best month(s) to travel
    #[serde(default)]
    pub best_month: String,

    /// Why the destination was picked
    #[serde(default)]
    pub reasons: Vec<String>,

    /// Map position
    #[serde(default)]
    pub coordinates: Option<Coordinates>,

    /// Alternatives
    #[serde(default)]
    pub alternatives: Vec<AlternativeFixture>,
}

/// Alternative Fixture
#[derive(Debug, Deserialize)]
pub struct AlternativeFixture {
    /// Alternative destination name
    pub name: String,

    /// Price difference in whole units (e.g., -150)
    pub price_diff: i64,

    /// Match score out of 100
    pub match_score: u8,
}

impl DestinationFixture {
    /// Build the destination stored under `id`.
    pub fn into_destination(self, id: String) -> Destination {
        Destination {
            id,
            name: self.name,
            country: self.country,
            match_score: self.match_score,
            description: self.description,
            climate: self.climate,
            best_month: self.best_month,
            reasons: self.reasons.into_iter().collect(),
            coordinates: self.coordinates,
            alternatives: self
                .alternatives
                .into_iter()
                .map(|alternative| Alternative {
                    name: alternative.name,
                    price_diff: alternative.price_diff,
                    match_score: alternative.match_score,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn destination_fixture_parses_optional_fields() -> TestResult {
        let yaml = r"
destinations:
  tulum:
    name: Tulum
    country: Mexico
    match_score: 88
    coordinates: { lat: 20.2114, lng: -87.4654 }
    alternatives:
      - { name: Cancún, price_diff: -200, match_score: 96 }
";

        let fixture: DestinationsFixture = serde_norway::from_str(yaml)?;
        let destination = fixture
            .destinations
            .into_iter()
            .next()
            .map(|(id, fixture)| fixture.into_destination(id))
            .ok_or("no destination parsed")?;

        assert_eq!(destination.id, "tulum");
        assert!(destination.reasons.is_empty());
        assert_eq!(
            destination.coordinates.map(|coordinates| coordinates.lat),
            Some(Decimal::new(202_114, 4))
        );
        assert_eq!(destination.alternatives.first().map(|alt| alt.price_diff), Some(-200));

        Ok(())
    }
}
