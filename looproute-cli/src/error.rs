//! Error types emitted by the looproute CLI.

use thiserror::Error;

use looproute_core::{ServiceError, SolveError};
use looproute_data::ClientBuildError;
use looproute_solver::ResolveError;

/// Errors emitted by the looproute CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Constructing the mapping-service client failed.
    #[error("failed to build mapping client: {0}")]
    BuildClient(#[from] ClientBuildError),
    /// Geocoding the entered addresses failed.
    #[error("failed to resolve addresses: {0}")]
    Resolve(#[from] ResolveError),
    /// The solver rejected the request or a distance query failed.
    #[error("solver failed: {0}")]
    Solve(#[from] SolveError),
    /// Fetching the static-map visualisation failed.
    #[error("failed to render tour map: {0}")]
    RenderMap(#[source] ServiceError),
    /// Serialising the tour as JSON failed.
    #[error("failed to encode tour as JSON: {0}")]
    EncodeTour(#[source] serde_json::Error),
}
