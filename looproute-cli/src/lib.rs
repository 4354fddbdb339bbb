//! Command-line interface for planning closed driving tours.
#![forbid(unsafe_code)]

mod error;

pub use error::CliError;

use std::fmt::Write as _;

use clap::{Parser, ValueEnum};
use log::info;

use looproute_core::{MapRenderer, Tour, TourSolver};
use looproute_data::{MapsClient, MapsClientConfig};
use looproute_solver::{BruteForceSolver, DelegatedSolver, assemble, resolve_stops};

/// Run the looproute CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let report = plan(&cli)?;
    print!("{report}");
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "looproute",
    about = "Plan the shortest closed driving tour over a set of stops",
    version
)]
struct Cli {
    /// Address the tour starts and ends at.
    #[arg(value_name = "start-address")]
    start: String,
    /// Stop address to visit; repeat the flag for each stop.
    #[arg(short = 's', long = "stop", value_name = "address", required = true)]
    stops: Vec<String>,
    /// Mapping-service API key.
    #[arg(long, env = "LOOPROUTE_API_KEY", hide_env_values = true)]
    api_key: String,
    /// Override the mapping-service base URL.
    #[arg(long, value_name = "url")]
    base_url: Option<String>,
    /// Ordering strategy.
    #[arg(long, value_enum, default_value_t = SolverChoice::Delegated)]
    solver: SolverChoice,
    /// Skip the static-map visualisation.
    #[arg(long)]
    no_map: bool,
    /// Emit the tour as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SolverChoice {
    /// Exhaustive permutation search over pairwise driving distances.
    BruteForce,
    /// Let the mapping service choose the visiting order.
    Delegated,
}

/// Plan the tour described by `cli` and render it as text or JSON.
fn plan(cli: &Cli) -> Result<String, CliError> {
    let mut config = MapsClientConfig::new(cli.api_key.clone());
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.clone());
    }
    let client = MapsClient::with_config(config)?;

    let (start, stops) = resolve_stops(&client, &cli.start, &cli.stops)?;
    info!("resolved {} of {} stop addresses", stops.len(), cli.stops.len());

    let solution = match cli.solver {
        SolverChoice::BruteForce => BruteForceSolver::new(&client).solve(&start, &stops)?,
        SolverChoice::Delegated => DelegatedSolver::new(&client).solve(&start, &stops)?,
    };
    let mut tour = assemble(&start, &solution);

    if !cli.no_map && !tour.waypoints.is_empty() {
        let rendered = client
            .render_static_map(&tour.waypoints)
            .map_err(CliError::RenderMap)?;
        if let Some(url) = rendered {
            tour = tour.with_map_url(url);
        }
    }

    if cli.json {
        serde_json::to_string_pretty(&tour).map_err(CliError::EncodeTour)
    } else {
        Ok(format_tour(&tour))
    }
}

/// Render a tour as the plain-text itinerary.
///
/// The head waypoint carries no inbound leg; any later waypoint without a
/// measured leg was reached over a leg the service could not route.
fn format_tour(tour: &Tour) -> String {
    if tour.waypoints.is_empty() {
        return String::from("No tour: fewer than two of the entered addresses resolved.\n");
    }
    let mut out = String::new();
    for (i, waypoint) in tour.waypoints.iter().enumerate() {
        let leg = match (i, &waypoint.leg_distance) {
            (0, _) => None,
            (_, Some(distance)) => Some(distance.as_str()),
            (_, None) => Some("no route"),
        };
        match leg {
            Some(distance) => {
                let _ = writeln!(out, "{i:>2}. {} ({distance})", waypoint.address);
            }
            None => {
                let _ = writeln!(out, "{i:>2}. {}", waypoint.address);
            }
        }
    }
    let _ = writeln!(out, "Total driving distance: {:.2} mi", tour.total_miles);
    if let Some(url) = &tour.map_url {
        let _ = writeln!(out, "Map: {url}");
    }
    out
}
