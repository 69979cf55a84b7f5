//! Vacation Preferences
//!
//! What the traveller asked for, checked before any planning happens.

use std::ops::RangeInclusive;

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;
use thiserror::Error;

/// Accepted description length in characters, after trimming.
pub const DESCRIPTION_CHARS: RangeInclusive<usize> = 10..=500;

/// Accepted budget in whole currency units.
pub const BUDGET_RANGE: RangeInclusive<i64> = 500..=100_000;

/// Accepted trip length in days.
pub const DURATION_DAYS: RangeInclusive<u16> = 1..=30;

/// Accepted party size.
pub const TRAVELLERS: RangeInclusive<u8> = 1..=10;

/// Errors related to preferences validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreferencesError {
    /// Description shorter than the minimum (characters given).
    #[error("please describe the trip in at least 10 characters (got {0})")]
    DescriptionTooShort(usize),

    /// Description longer than the maximum (characters given).
    #[error("trip description is too long: {0} characters, maximum is 500")]
    DescriptionTooLong(usize),

    /// Budget outside the accepted range.
    #[error("budget must be between 500 and 100000, got {0}")]
    BudgetOutOfRange(i64),

    /// Duration outside the accepted range.
    #[error("duration must be between 1 and 30 days, got {0}")]
    DurationOutOfRange(u16),

    /// Party size outside the accepted range.
    #[error("between 1 and 10 travellers are supported, got {0}")]
    TravellersOutOfRange(u8),
}

/// Raw preferences as entered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VacationPreferences {
    /// Free text description of the ideal trip
    pub description: String,

    /// Total budget in whole currency units
    pub budget: i64,

    /// Trip length in days
    pub duration: u16,

    /// Party size
    pub travellers: u8,

    /// Where the trip starts
    #[serde(default)]
    pub departure_city: Option<String>,

    /// Preferred travel month
    #[serde(default)]
    pub month: Option<String>,

    /// Interests, in the order given
    #[serde(default)]
    pub interests: Vec<String>,
}

impl VacationPreferences {
    /// Check every field, producing preferences the planner can rely on.
    ///
    /// Blank optional fields are dropped.
    ///
    /// # Errors
    ///
    /// Returns the [`PreferencesError`] for the first field out of range, in declaration order.
    pub fn validate(self) -> Result<ValidatedPreferences, PreferencesError> {
        let description = self.description.trim().to_string();
        let description_chars = description.chars().count();

        if description_chars < *DESCRIPTION_CHARS.start() {
            return Err(PreferencesError::DescriptionTooShort(description_chars));
        }

        if description_chars > *DESCRIPTION_CHARS.end() {
            return Err(PreferencesError::DescriptionTooLong(description_chars));
        }

        if !BUDGET_RANGE.contains(&self.budget) {
            return Err(PreferencesError::BudgetOutOfRange(self.budget));
        }

        if !DURATION_DAYS.contains(&self.duration) {
            return Err(PreferencesError::DurationOutOfRange(self.duration));
        }

        if !TRAVELLERS.contains(&self.travellers) {
            return Err(PreferencesError::TravellersOutOfRange(self.travellers));
        }

        Ok(ValidatedPreferences {
            description,
            budget: self.budget,
            duration: self.duration,
            travellers: self.travellers,
            departure_city: non_blank(self.departure_city),
            month: non_blank(self.month),
            interests: self
                .interests
                .into_iter()
                .filter_map(|interest| non_blank(Some(interest)))
                .collect(),
        })
    }
}

/// Preferences that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPreferences {
    description: String,
    budget: i64,
    duration: u16,
    travellers: u8,
    departure_city: Option<String>,
    month: Option<String>,
    interests: Vec<String>,
}

impl ValidatedPreferences {
    /// Trimmed description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Budget in whole currency units.
    pub fn budget(&self) -> i64 {
        self.budget
    }

    /// Budget as a ceiling in the given currency.
    pub fn ceiling<'c>(&self, currency: &'c Currency) -> Money<'c, Currency> {
        Money::from_major(self.budget, currency)
    }

    /// Trip length in days.
    pub fn duration(&self) -> u16 {
        self.duration
    }

    /// Party size.
    pub fn travellers(&self) -> u8 {
        self.travellers
    }

    /// Departure city, if given.
    pub fn departure_city(&self) -> Option<&str> {
        self.departure_city.as_deref()
    }

    /// Preferred month, if given.
    pub fn month(&self) -> Option<&str> {
        self.month.as_deref()
    }

    /// Interests.
    pub fn interests(&self) -> &[String] {
        &self.interests
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
