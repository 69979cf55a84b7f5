//! Tripwise CLI

use std::{
    io::{self, Write},
    process::ExitCode,
};

use rand::{SeedableRng, rngs::StdRng};
use rusty_money::Money;
use thiserror::Error;
use tracing::{error, info, warn};

use tripwise::{
    budget::render::RenderError,
    config::{PlannerConfig, RefineArg},
    fixtures::{Fixture, FixtureError},
    narrative::{VariantHistory, compose_summary},
    observability::{ObservabilityError, init_subscriber},
    plan::PlanError,
    preferences::VacationPreferences,
    refinement::Refinement,
    session::PlanningSession,
};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Observability(#[from] ObservabilityError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let config = match PlannerConfig::load() {
        Ok(config) => config,
        Err(error) => error.exit(),
    };

    if let Err(error) = init_subscriber(&config.logging).map_err(CliError::from) {
        report(&error);

        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "planning failed");
            report(&error);

            ExitCode::FAILURE
        }
    }
}

fn report(error: &CliError) {
    #[expect(
        clippy::print_stderr,
        reason = "errors must reach the terminal even when logging is filtered out"
    )]
    {
        eprintln!("Error: {error}");
    }
}

fn run(config: &PlannerConfig) -> Result<(), CliError> {
    let mut fixture = Fixture::with_base_path(&config.fixtures);
    fixture.load_destinations(&config.destinations)?;

    let plan = fixture.load_plan(&config.plan)?;
    let ceiling = config
        .budget
        .map(|budget| Money::from_major(budget, plan.currency()));

    info!(plan_id = plan.id(), fixtures = %config.fixtures.display(), "loaded plan");

    let mut session = PlanningSession::new(plan, ceiling);

    for refinement in refinements(config, &fixture)? {
        let refined = session.plan().refine(refinement)?;

        session.replace_plan(refined);
    }

    if let Some(flight) = &config.flight {
        session.on_flight_change(flight.as_str());
    }

    if let Some(hotel) = &config.hotel {
        session.on_hotel_change(hotel.as_str());
    }

    let mut out = io::stdout().lock();

    write_selection(&mut out, &session)?;
    session.budget().write_to(&mut out)?;

    if let Some(summary) = summary(config, &session) {
        writeln!(out, "\n{summary}")?;
    }

    Ok(())
}

fn refinements(config: &PlannerConfig, fixture: &Fixture) -> Result<Vec<Refinement>, CliError> {
    let mut refinements = Vec::with_capacity(config.refine.len() + 1);

    if let Some(key) = &config.destination {
        refinements.push(Refinement::ChangeDestination(Box::new(fixture.destination(key)?.clone())));
    }

    refinements.extend(config.refine.iter().map(|refine| match refine {
        RefineArg::Cheaper => Refinement::Cheaper,
        RefineArg::Upgrade => Refinement::Upgrade,
        RefineArg::MoreActivities => Refinement::MoreActivities,
        RefineArg::LessActivities => Refinement::LessActivities,
    }));

    Ok(refinements)
}

fn write_selection(out: &mut impl Write, session: &PlanningSession<'_>) -> io::Result<()> {
    let plan = session.plan();
    let destination = plan.destination();

    writeln!(
        out,
        "{}, {} (plan {} rev {})",
        destination.name,
        destination.country,
        plan.id(),
        plan.revision()
    )?;

    if let Some(flight) = session.selected_flight() {
        writeln!(
            out,
            " Flight: {} {} -> {} ({}, {})",
            flight.airline, flight.departure_city, flight.arrival_city, flight.duration, flight.class
        )?;
    }

    if let Some(hotel) = session.selected_hotel() {
        writeln!(out, " Hotel:  {} ({}★, {})", hotel.name, hotel.stars, hotel.location)?;
    }

    let pacing = plan.itinerary().pacing();

    writeln!(
        out,
        " Days:   {} ({}% activities / {}% relaxation)",
        plan.itinerary().day_count(),
        pacing.activities(),
        pacing.relaxation()
    )
}

/// Summary text, written only when the traveller stated a budget that passes validation.
fn summary(config: &PlannerConfig, session: &PlanningSession<'_>) -> Option<String> {
    let budget = config.budget?;
    let plan = session.plan();

    let preferences = VacationPreferences {
        description: config.description.clone(),
        budget,
        duration: u16::try_from(plan.itinerary().day_count()).unwrap_or(u16::MAX),
        travellers: config.travellers,
        departure_city: session
            .selected_flight()
            .map(|flight| flight.departure_city.clone()),
        month: config.month.clone(),
        interests: Vec::new(),
    };

    let preferences = match preferences.validate() {
        Ok(preferences) => preferences,
        Err(error) => {
            warn!(%error, "skipping summary");

            return None;
        }
    };

    let mut rng = config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    Some(compose_summary(
        &preferences,
        plan.destination(),
        plan.currency(),
        &mut VariantHistory::new(),
        &mut rng,
    ))
}
