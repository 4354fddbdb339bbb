//! Facade crate for the looproute tour planner.
//!
//! This crate re-exports the core domain types, the solvers, and the HTTP
//! mapping-service client so applications can depend on a single crate.

#![forbid(unsafe_code)]

pub use looproute_core::{
    DistanceOracle, Geocoder, LegMeasure, MapRenderer, RoutedLeg, ServiceError, SolveError, Stop,
    Tour, TourSolution, TourSolver, Waypoint, WaypointOptimizer,
};

pub use looproute_solver::{
    BruteForceConfig, BruteForceSolver, DelegatedSolver, MissingLegPolicy, ResolveError, assemble,
    resolve_stops,
};

pub use looproute_data::{ClientBuildError, MapsClient, MapsClientConfig};
