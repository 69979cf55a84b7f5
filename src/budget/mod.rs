//! Budget
//!
//! The budget engine turns a plan, a flight/hotel selection and an optional ceiling into a
//! [`BudgetStatus`]. A status is only ever produced whole by [`compute_budget_status`]; there
//! is no way to patch one field at a time.

use std::fmt;

pub mod breakdown;
pub mod engine;
pub mod render;
pub mod status;

pub use breakdown::BudgetBreakdown;
pub use engine::compute_budget_status;
pub use status::BudgetStatus;

/// Utilisation (in percent of the ceiling) at which a budget is reported as [`AllocationStatus::Near`].
pub const NEAR_THRESHOLD_PERCENT: i128 = 90;

/// Utilisation (in percent of the ceiling) at which a budget is reported as [`AllocationStatus::Over`].
pub const OVER_THRESHOLD_PERCENT: i128 = 115;

/// How the allocated total compares to the ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AllocationStatus {
    /// Below 90% of the ceiling
    Under,

    /// From 90% up to, but excluding, 115% of the ceiling
    Near,

    /// 115% of the ceiling and above
    Over,
}

impl AllocationStatus {
    /// Classifies `allocated` against `ceiling`, both in minor units.
    ///
    /// Thresholds are compared with integer arithmetic so that exactly 90% and exactly 115%
    /// land in the higher band. A zero or negative ceiling has no meaningful utilisation and
    /// classifies as [`AllocationStatus::Under`].
    pub fn classify(allocated: i64, ceiling: i64) -> Self {
        if ceiling <= 0 {
            return AllocationStatus::Under;
        }

        let scaled = i128::from(allocated) * 100;
        let ceiling = i128::from(ceiling);

        if scaled >= ceiling * OVER_THRESHOLD_PERCENT {
            AllocationStatus::Over
        } else if scaled >= ceiling * NEAR_THRESHOLD_PERCENT {
            AllocationStatus::Near
        } else {
            AllocationStatus::Under
        }
    }

    /// Lowercase label.
    pub const fn as_str(self) -> &'static str {
        match self {
            AllocationStatus::Under => "under",
            AllocationStatus::Near => "near",
            AllocationStatus::Over => "over",
        }
    }
}

impl fmt::Display for AllocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
