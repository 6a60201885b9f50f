pub mod routes;
pub mod fields;
pub mod problems;
pub mod progress;
pub mod profiles;
pub mod config;
pub mod error;
pub mod logging;
pub mod state;
pub mod metrics;
mod cli;


use clap::Parser;

use crate::cli::{Cli, Command};
use crate::fields::model::FieldId;
use crate::routes::RequestContext;

/// CLI entry point: load the stores, run one command, print JSON to stdout.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize structured logging first
    logging::init_logging();
    tracing::info!("ojrec starting");

    let mut settings = config::settings::get_settings().clone();
    cli.apply_overrides(&mut settings);

    let rt = tokio::runtime::Runtime::new()?;
    let state = rt.block_on(state::app::AppState::load(settings))?;

    let ctx = match cli.user {
        Some(user_id) => RequestContext::user(user_id),
        None => RequestContext::anonymous(),
    };
    let mut rng = rand::thread_rng();

    let output = match cli.command {
        Command::Recommend => serde_json::to_value(routes::recommend_problems(&state, &ctx, &mut rng)?)?,
        Command::List { field, offset, limit } => {
            let field = field.map(FieldId::from);
            serde_json::to_value(routes::list_problems(&state, &ctx, field.as_ref(), offset, limit)?)?
        }
        Command::Problem { id } => serde_json::to_value(routes::get_problem(&state, &ctx, &id)?)?,
        Command::Contest { contest_id } => {
            serde_json::to_value(routes::list_contest_problems(&state, &ctx, contest_id))?
        }
        Command::PickOne => serde_json::to_value(routes::pick_one(&state, &mut rng)?)?,
        Command::Bonus => serde_json::to_value(routes::bonus_problems(&state)?)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    tracing::debug!(metrics = ?state.metrics.snapshot(), "Command finished");
    Ok(())
}
