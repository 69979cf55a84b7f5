//! Plan Narrative
//!
//! A short written summary of a plan, assembled from template pools. Each pool remembers the
//! variant it produced last in a [`VariantHistory`] owned by the caller, so consecutive
//! summaries within a session read differently while seeded runs stay reproducible.

use rand::Rng;
use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;

use crate::{
    destinations::Destination,
    preferences::ValidatedPreferences,
    tiers::{BudgetTier, classify_budget_tier},
};

/// Trips up to this many days read as short.
pub const SHORT_TRIP_MAX_DAYS: u16 = 4;

/// Trips up to this many days read as medium length.
pub const MEDIUM_TRIP_MAX_DAYS: u16 = 9;

/// Last chosen index per template key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantHistory {
    last: FxHashMap<String, usize>,
}

impl VariantHistory {
    /// Empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index chosen last for `key`, if any.
    pub fn last(&self, key: &str) -> Option<usize> {
        self.last.get(key).copied()
    }

    fn record(&mut self, key: &str, index: usize) {
        self.last.insert(key.to_string(), index);
    }
}

/// Pick a variant from `pool` for `key`, avoiding the previous pick when there is a choice.
///
/// Returns `None` for an empty pool.
pub fn select_variant<'p, R: Rng + ?Sized>(
    pool: &[&'p str],
    key: &str,
    history: &mut VariantHistory,
    rng: &mut R,
) -> Option<&'p str> {
    if pool.is_empty() {
        return None;
    }

    let previous = history.last(key).filter(|&index| pool.len() > 1 && index < pool.len());

    let index = match previous {
        Some(previous) => {
            let index = rng.gen_range(0..pool.len() - 1);

            if index >= previous { index + 1 } else { index }
        }
        None => rng.gen_range(0..pool.len()),
    };

    history.record(key, index);

    pool.get(index).copied()
}

/// Compose the plan summary for the traveller.
///
/// The stated budget is read as a ceiling in the plan `currency`.
pub fn compose_summary<R: Rng + ?Sized>(
    preferences: &ValidatedPreferences,
    destination: &Destination,
    currency: &Currency,
    history: &mut VariantHistory,
    rng: &mut R,
) -> String {
    let tier = classify_budget_tier(&preferences.ceiling(currency));
    let days = preferences.duration();
    let length = trip_length(days);

    let mut parts: Vec<String> = Vec::with_capacity(5);

    if let Some(intro) = select_variant(intro_pool(tier), &format!("intro-{tier}"), history, rng) {
        parts.push(intro.replace("{destination}", &destination.name));
    }

    if let Some(insight) = select_variant(duration_pool(length), &format!("duration-{length}"), history, rng) {
        parts.push(insight.replace("{days}", &days.to_string()));
    }

    let reasons: Vec<&str> = destination.reasons.iter().map(String::as_str).collect();

    if let Some(reason) = select_variant(&reasons, &format!("destination-{}", destination.id), history, rng) {
        parts.push(format!("{reason}."));
    }

    if let Some(month) = preferences.month() {
        let note = select_variant(month_pool(month), &format!("month-{month}"), history, rng);

        parts.push(note.map_or_else(
            || format!("{month} is a good time to visit {}.", destination.name),
            str::to_string,
        ));
    }

    if let Some(closing) = select_variant(closing_pool(tier), &format!("closing-{tier}"), history, rng) {
        parts.push(closing.to_string());
    }

    parts.join(" ")
}

fn trip_length(days: u16) -> &'static str {
    if days <= SHORT_TRIP_MAX_DAYS {
        "short"
    } else if days <= MEDIUM_TRIP_MAX_DAYS {
        "medium"
    } else {
        "long"
    }
}

fn intro_pool(tier: BudgetTier) -> &'static [&'static str] {
    match tier {
        BudgetTier::Economy => &[
            "Here is a great value plan for {destination}.",
            "This plan gets you to {destination} without overspending.",
            "A cost-conscious trip to {destination} is ready.",
        ],
        BudgetTier::Mid => &[
            "Here is a well balanced plan for {destination}.",
            "Your trip to {destination} is mapped out.",
            "This plan brings comfort and value together in {destination}.",
        ],
        BudgetTier::Luxury => &[
            "Here is an exclusive plan for {destination}.",
            "Your luxury escape to {destination} is ready.",
            "This plan treats {destination} in style.",
        ],
    }
}

fn duration_pool(length: &str) -> &'static [&'static str] {
    match length {
        "short" => &[
            "The {days} days focus on the highlights.",
            "Every one of the {days} days counts, so the schedule stays tight.",
        ],
        "medium" => &[
            "Over {days} days there is room for both exploring and resting.",
            "The {days} day schedule covers the destination comfortably.",
        ],
        _ => &[
            "With {days} days you can settle in and go deeper.",
            "A {days} day stay leaves time for slower, immersive days.",
        ],
    }
}

fn month_pool(month: &str) -> &'static [&'static str] {
    match month.to_ascii_lowercase().as_str() {
        "march" => &[
            "March is shoulder season, with thinner crowds.",
            "Travelling in March beats the peak season rush.",
        ],
        "june" => &[
            "June brings settled weather.",
            "Long June days give you more daylight to explore.",
        ],
        "july" => &[
            "July is peak season, so everything is open.",
            "July often lines up with local festivals.",
        ],
        "august" => &[
            "August is warm enough for plenty of time outdoors.",
            "Late summer conditions suit an active trip.",
        ],
        "september" => &[
            "September keeps the warm weather with fewer visitors.",
            "Shoulder season in September is good value.",
        ],
        "december" => &[
            "December adds a festive feel.",
            "Year end travel lets you catch seasonal celebrations.",
        ],
        _ => &[],
    }
}

fn closing_pool(tier: BudgetTier) -> &'static [&'static str] {
    match tier {
        BudgetTier::Economy => &[
            "You get a lot of trip for the money.",
            "The plan stretches your budget as far as it goes.",
        ],
        BudgetTier::Mid => &[
            "Quality stays and experiences at a fair price.",
            "Comfortable stays meet authentic local experiences.",
        ],
        BudgetTier::Luxury => &[
            "Every detail is chosen for premium service.",
            "Expect a trip to remember.",
        ],
    }
}
