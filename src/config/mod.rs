//! Planner configuration

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::observability::LoggingConfig;

pub mod observability;

/// A refinement that can be requested from the command line.
///
/// Changing destination takes a destination key, see [`PlannerConfig::destination`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RefineArg {
    /// Recommend the cheapest hotel
    Cheaper,

    /// Recommend the most expensive hotel
    Upgrade,

    /// Busier days
    MoreActivities,

    /// Calmer days
    LessActivities,
}

/// Tripwise planner configuration
#[derive(Debug, Parser)]
#[command(name = "tripwise", about = "Trip budget planner", long_about = None)]
pub struct PlannerConfig {
    /// Directory holding `plans/` and `destinations/` fixtures
    #[arg(long, env = "TRIPWISE_FIXTURES", default_value = "./fixtures")]
    pub fixtures: PathBuf,

    /// Plan fixture name
    #[arg(short, long, env = "TRIPWISE_PLAN", default_value = "cancun")]
    pub plan: String,

    /// Destinations fixture name
    #[arg(long, env = "TRIPWISE_DESTINATIONS", default_value = "cancun")]
    pub destinations: String,

    /// Budget ceiling in whole units of the plan currency
    #[arg(short, long, env = "TRIPWISE_BUDGET")]
    pub budget: Option<i64>,

    /// Flight to select instead of the recommended one
    #[arg(long)]
    pub flight: Option<String>,

    /// Hotel to select instead of the recommended one
    #[arg(long)]
    pub hotel: Option<String>,

    /// Refinements to apply, in order
    #[arg(short, long, value_enum)]
    pub refine: Vec<RefineArg>,

    /// Switch the plan to another destination key
    #[arg(long)]
    pub destination: Option<String>,

    /// Trip description used for the summary
    #[arg(long, default_value = "A relaxing week by the sea with great food")]
    pub description: String,

    /// Party size used for the summary
    #[arg(long, default_value_t = 2)]
    pub travellers: u8,

    /// Preferred travel month used for the summary
    #[arg(long)]
    pub month: Option<String>,

    /// Seed for the summary wording
    #[arg(long, env = "TRIPWISE_SEED")]
    pub seed: Option<u64>,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl PlannerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
