//! Itinerary
//!
//! Day-by-day activities of a trip plan. Day totals are always derived from the activities
//! they contain, so a day's cost can never drift from its contents.

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;
use smallvec::SmallVec;
use thiserror::Error;

use crate::{destinations::Coordinates, pricing::sum_minor};

/// Errors related to itinerary construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItineraryError {
    /// Pacing percentages must add up to 100 (activities, relaxation).
    #[error("pacing must sum to 100, got {0} activities + {1} relaxation")]
    PacingMismatch(u8, u8),
}

/// Activity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    /// Downtime, spa, beach
    Relaxation,

    /// Outdoor and active excursions
    Adventure,

    /// Sights, tours, classes
    Culture,

    /// Meals out
    Dining,

    /// Check-in, check-out and transfers
    Transport,
}

impl ActivityCategory {
    /// Whether activities of this category are shown as places on a map.
    ///
    /// Dining and transport entries are logistics rather than destinations in their own right.
    pub const fn is_location(self) -> bool {
        !matches!(self, ActivityCategory::Dining | ActivityCategory::Transport)
    }
}

/// A single scheduled activity.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity<'a> {
    /// Identifier
    pub id: String,

    /// Start time, as displayed
    pub time: String,

    /// Activity name
    pub name: String,

    /// Description
    pub description: String,

    /// Cost, zero for free activities
    pub cost: Money<'a, Currency>,

    /// Duration, as displayed
    pub duration: String,

    /// Category
    pub category: ActivityCategory,

    /// Map position
    pub coordinates: Option<Coordinates>,
}

/// Activities for one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayItinerary<'a> {
    day: u16,
    date: String,
    activities: SmallVec<[Activity<'a>; 4]>,
}

impl<'a> DayItinerary<'a> {
    /// Create a day from its activities, in schedule order.
    pub fn new(
        day: u16,
        date: impl Into<String>,
        activities: SmallVec<[Activity<'a>; 4]>,
    ) -> Self {
        Self {
            day,
            date: date.into(),
            activities,
        }
    }

    /// 1-based day number.
    pub fn day(&self) -> u16 {
        self.day
    }

    /// Date label.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Activities in schedule order.
    pub fn activities(&self) -> &[Activity<'a>] {
        &self.activities
    }

    /// Sum of the day's activity costs, in minor units.
    pub fn total_cost_minor(&self) -> i64 {
        sum_minor(self.activities.iter().map(|activity| &activity.cost))
    }

    /// Sum of the day's activity costs.
    pub fn total_cost(&self, currency: &'static Currency) -> Money<'a, Currency> {
        Money::from_minor(self.total_cost_minor(), currency)
    }
}

/// Split between busy and free time, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    activities: u8,
    relaxation: u8,
}

impl Pacing {
    /// Create a pacing split.
    ///
    /// # Errors
    ///
    /// Returns [`ItineraryError::PacingMismatch`] when the two shares do not add up to 100.
    pub fn new(activities: u8, relaxation: u8) -> Result<Self, ItineraryError> {
        if u16::from(activities) + u16::from(relaxation) == 100 {
            Ok(Self {
                activities,
                relaxation,
            })
        } else {
            Err(ItineraryError::PacingMismatch(activities, relaxation))
        }
    }

    /// Share of the trip spent on planned activities.
    pub fn activities(self) -> u8 {
        self.activities
    }

    /// Share of the trip left free.
    pub fn relaxation(self) -> u8 {
        self.relaxation
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            activities: 50,
            relaxation: 50,
        }
    }
}

/// The full day-by-day itinerary of a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteItinerary<'a> {
    days: Vec<DayItinerary<'a>>,
    pacing: Pacing,
}

impl<'a> CompleteItinerary<'a> {
    /// Create an itinerary from its days, in calendar order.
    pub fn new(days: Vec<DayItinerary<'a>>, pacing: Pacing) -> Self {
        Self { days, pacing }
    }

    /// Days in calendar order.
    pub fn days(&self) -> &[DayItinerary<'a>] {
        &self.days
    }

    /// Number of days covered.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Pacing split.
    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Copy of this itinerary with a different pacing split.
    #[must_use]
    pub fn with_pacing(&self, pacing: Pacing) -> Self {
        Self {
            days: self.days.clone(),
            pacing,
        }
    }

    /// Every activity across all days, in order.
    pub fn activities(&self) -> impl Iterator<Item = &Activity<'a>> {
        self.days.iter().flat_map(|day| day.activities.iter())
    }

    /// Sum of every activity cost across all days, in minor units.
    pub fn activities_cost_minor(&self) -> i64 {
        self.days
            .iter()
            .fold(0_i64, |acc, day| acc.saturating_add(day.total_cost_minor()))
    }

    /// Activities that mark a place on the map, with their coordinates.
    pub fn activity_locations(&self) -> impl Iterator<Item = (&Activity<'a>, Coordinates)> {
        self.activities().filter_map(|activity| {
            if activity.category.is_location() {
                activity.coordinates.map(|coordinates| (activity, coordinates))
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::iso::USD;
    use smallvec::smallvec;
    use testresult::TestResult;

    use super::*;

    fn activity(id: &str, cost: i64, category: ActivityCategory) -> Activity<'static> {
        Activity {
            id: id.to_string(),
            time: "9:00 AM".to_string(),
            name: id.to_string(),
            description: String::new(),
            cost: Money::from_major(cost, USD),
            duration: "1 hour".to_string(),
            category,
            coordinates: Some(Coordinates {
                lat: Decimal::new(211, 1),
                lng: Decimal::new(-868, 1),
            }),
        }
    }

    #[test]
    fn day_total_is_sum_of_activity_costs() {
        let day = DayItinerary::new(
            1,
            "June 15",
            smallvec![
                activity("checkin", 0, ActivityCategory::Transport),
                activity("dinner", 120, ActivityCategory::Dining),
                activity("tour", 90, ActivityCategory::Culture),
            ],
        );

        assert_eq!(day.total_cost_minor(), 21_000);
        assert_eq!(day.total_cost(USD), Money::from_major(210, USD));
    }

    #[test]
    fn itinerary_activities_cost_spans_all_days() -> TestResult {
        let itinerary = CompleteItinerary::new(
            vec![
                DayItinerary::new(
                    1,
                    "June 15",
                    smallvec![activity("a", 100, ActivityCategory::Adventure)],
                ),
                DayItinerary::new(
                    2,
                    "June 16",
                    smallvec![activity("b", 50, ActivityCategory::Transport)],
                ),
            ],
            Pacing::new(40, 60)?,
        );

        assert_eq!(itinerary.day_count(), 2);
        assert_eq!(itinerary.activities_cost_minor(), 15_000);

        Ok(())
    }

    #[test]
    fn activity_locations_skip_dining_and_transport() {
        let itinerary = CompleteItinerary::new(
            vec![DayItinerary::new(
                1,
                "June 15",
                smallvec![
                    activity("checkin", 0, ActivityCategory::Transport),
                    activity("dinner", 120, ActivityCategory::Dining),
                    activity("ruins", 90, ActivityCategory::Culture),
                    activity("spa", 200, ActivityCategory::Relaxation),
                ],
            )],
            Pacing::default(),
        );

        let ids: Vec<&str> = itinerary
            .activity_locations()
            .map(|(activity, _)| activity.id.as_str())
            .collect();

        assert_eq!(ids, ["ruins", "spa"]);
    }

    #[test]
    fn pacing_must_sum_to_one_hundred() {
        assert!(Pacing::new(60, 40).is_ok());
        assert_eq!(Pacing::new(60, 60), Err(ItineraryError::PacingMismatch(60, 60)));
    }

    #[test]
    fn with_pacing_keeps_days() -> TestResult {
        let itinerary = CompleteItinerary::new(
            vec![DayItinerary::new(1, "June 15", SmallVec::new())],
            Pacing::default(),
        );

        let busier = itinerary.with_pacing(Pacing::new(60, 40)?);

        assert_eq!(busier.days(), itinerary.days());
        assert_eq!(busier.pacing().activities(), 60);
        assert_eq!(busier.pacing().relaxation(), 40);

        Ok(())
    }
}
