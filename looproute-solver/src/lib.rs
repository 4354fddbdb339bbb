//! Tour solvers and assembly for looproute.
//!
//! Two [`TourSolver`](looproute_core::TourSolver) implementations cover the
//! spectrum of mapping-service capabilities:
//!
//! - [`BruteForceSolver`] enumerates every stop permutation and sums
//!   per-pair distances from a [`DistanceOracle`](looproute_core::DistanceOracle).
//!   Exact, deterministic, and factorial — capped at [`MAX_STOPS`] stops.
//! - [`DelegatedSolver`] hands the ordering problem to the provider's
//!   waypoint-reordering feature in one call and reconciles the answer into
//!   the same [`TourSolution`](looproute_core::TourSolution) shape. Preferred
//!   when available: constant external cost and no stop ceiling.
//!
//! [`assemble`] converts a solution into the final closed-loop [`Tour`]
//! (start, stops in order, start again), and [`resolve_stops`] is the
//! geocoding pipeline that guarantees solvers only ever see resolved stops.
//!
//! [`Tour`]: looproute_core::Tour

#![forbid(unsafe_code)]

mod assemble;
mod brute_force;
mod delegated;
mod permute;
mod pipeline;

pub use assemble::assemble;
pub use brute_force::{BruteForceConfig, BruteForceSolver, MAX_STOPS, MissingLegPolicy};
pub use delegated::DelegatedSolver;
pub use pipeline::{ResolveError, resolve_stops};
