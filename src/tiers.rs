//! Budget Tiers
//!
//! A coarse classification of the traveller's budget ceiling. Every flat-rate estimate in the
//! budget engine (activities, food, local transport) and the plan narrative reads its tier
//! from [`classify_budget_tier`] and its rates from [`BudgetTier::allowance`].

use std::fmt;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::pricing::major_to_minor;

/// Ceilings at or above this many major units are classified as [`BudgetTier::Mid`].
pub const MID_TIER_FLOOR: i64 = 3_000;

/// Ceilings at or above this many major units are classified as [`BudgetTier::Luxury`].
pub const LUXURY_TIER_FLOOR: i64 = 8_000;

/// Budget tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BudgetTier {
    /// Below [`MID_TIER_FLOOR`]
    Economy,

    /// From [`MID_TIER_FLOOR`] up to, but excluding, [`LUXURY_TIER_FLOOR`]
    Mid,

    /// [`LUXURY_TIER_FLOOR`] and above
    Luxury,
}

/// Per-tier flat rates, in major units of the plan currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierAllowance {
    /// Multiplier applied to the itinerary's own activity costs
    pub activity_scale: Decimal,

    /// Daily activity estimate used when the itinerary carries no activity costs
    pub daily_activities: i64,

    /// Daily food allowance
    pub daily_food: i64,

    /// Daily local transport allowance
    pub daily_transport: i64,
}

impl BudgetTier {
    /// Flat rates for this tier.
    pub const fn allowance(self) -> TierAllowance {
        match self {
            BudgetTier::Luxury => TierAllowance {
                activity_scale: Decimal::ONE,
                daily_activities: 120,
                daily_food: 120,
                daily_transport: 50,
            },
            BudgetTier::Mid => TierAllowance {
                activity_scale: Decimal::from_parts(75, 0, 0, false, 2),
                daily_activities: 80,
                daily_food: 80,
                daily_transport: 30,
            },
            BudgetTier::Economy => TierAllowance {
                activity_scale: Decimal::from_parts(5, 0, 0, false, 1),
                daily_activities: 50,
                daily_food: 50,
                daily_transport: 20,
            },
        }
    }

    /// Lowercase label, as used in template keys.
    pub const fn as_str(self) -> &'static str {
        match self {
            BudgetTier::Economy => "economy",
            BudgetTier::Mid => "mid",
            BudgetTier::Luxury => "luxury",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a budget ceiling, comparing in the ceiling's own currency.
pub fn classify_budget_tier(ceiling: &Money<'_, Currency>) -> BudgetTier {
    let currency = ceiling.currency();
    let ceiling_minor = ceiling.to_minor_units();

    if ceiling_minor >= major_to_minor(LUXURY_TIER_FLOOR, currency) {
        BudgetTier::Luxury
    } else if ceiling_minor >= major_to_minor(MID_TIER_FLOOR, currency) {
        BudgetTier::Mid
    } else {
        BudgetTier::Economy
    }
}
