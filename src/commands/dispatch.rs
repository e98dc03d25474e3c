//! Command dispatch logic for grus

use std::time::Instant;

use serde::Serialize;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::commands::render;
use grus_core::error::{GrusError, Result};
use grus_core::{query, Catalog};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let Some(command) = &cli.command else {
        return Err(GrusError::UsageError(
            "missing command (see --help)".to_string(),
        ));
    };
    let Some(data) = &cli.data else {
        return Err(GrusError::UsageError(
            "--data <FILE> is required".to_string(),
        ));
    };

    let catalog = Catalog::load(data)?;
    tracing::debug!(elapsed = ?start.elapsed(), "catalog_loaded");

    match command {
        Commands::Summary => emit(cli, &catalog.summary(), render::summary),
        Commands::Reach { from, to } => {
            emit(cli, &query::reach_route(&catalog, from, to)?, render::route)
        }
        Commands::Hops { from, to } => emit(
            cli,
            &query::min_hop_route(&catalog, from, to)?,
            render::route,
        ),
        Commands::Shortest { from, to, metric } => emit(
            cli,
            &query::shortest_route(&catalog, *metric, from, to)?,
            render::shortest,
        ),
        Commands::Corridor { source, metric } => emit(
            cli,
            &query::corridor(&catalog, *metric, source)?,
            render::corridor,
        ),
        Commands::Order => emit(cli, &query::migration_order(&catalog)?, render::order),
        Commands::Chain => emit(cli, &query::longest_chain(&catalog)?, render::chain),
        Commands::Components => emit(
            cli,
            &query::component_census(&catalog)?,
            render::components,
        ),
    }
}

/// Prints a report in the selected format. Human rendering goes through
/// the per-report formatter; JSON is the serialized report itself.
fn emit<T: Serialize>(cli: &Cli, report: &T, human: impl Fn(&T) -> String) -> Result<()> {
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Human => println!("{}", human(report)),
    }
    Ok(())
}
