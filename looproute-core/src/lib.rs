//! Core domain types and boundary traits for the looproute tour planner.
//!
//! The crate defines the data model for a closed driving tour — resolved
//! [`Stop`]s, measured legs, and the assembled [`Tour`] — together with the
//! seams the planner needs from an external mapping service: geocoding
//! ([`Geocoder`]), pairwise driving distances ([`DistanceOracle`]),
//! provider-side waypoint reordering ([`WaypointOptimizer`]), and static map
//! rendering ([`MapRenderer`]).
//!
//! Boundaries:
//! - No HTTP or other I/O lives here; providers implement the traits in a
//!   separate crate.
//! - "Not found" and "no route" are `Ok(None)` outcomes, never errors.
//!   Transport and quota failures surface as [`ServiceError`].

#![forbid(unsafe_code)]

mod geocode;
mod oracle;
mod render;
mod service;
mod solver;
mod stop;
mod tour;
pub mod units;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use geocode::Geocoder;
pub use oracle::{DistanceOracle, LegMeasure, RoutedLeg, WaypointOptimizer};
pub use render::MapRenderer;
pub use service::ServiceError;
pub use solver::{SolveError, TourSolution, TourSolver};
pub use stop::Stop;
pub use tour::{Tour, Waypoint};
