//! The tour-solver seam.

use thiserror::Error;

use crate::{LegMeasure, ServiceError, Stop};

/// The visiting order chosen by a solver, with its measured legs.
///
/// `legs[i]` is the leg arriving at `stops[i]`; the final entry closes the
/// loop back to the start, so a non-empty solution holds `stops.len() + 1`
/// legs. A `None` leg records a pair the oracle could not route that the
/// search kept anyway (skip-leg policy).
#[derive(Debug, Clone, PartialEq)]
pub struct TourSolution {
    /// Stops in the chosen visiting order.
    pub stops: Vec<Stop>,
    /// Measured legs, closing leg last.
    pub legs: Vec<Option<LegMeasure>>,
    /// Sum of the measured leg distances, in metres.
    pub total_meters: f64,
}

impl TourSolution {
    /// The empty solution: no stops, no legs, zero distance.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            stops: Vec::new(),
            legs: Vec::new(),
            total_meters: 0.0,
        }
    }

    /// Whether the solution visits no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// Errors returned by [`TourSolver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The stop set exceeds the solver's hard ceiling.
    ///
    /// The permutation search is factorial in the stop count; the ceiling is
    /// a deliberate complexity bound, and over-limit requests are rejected
    /// rather than silently truncated.
    #[error("{count} stops exceed the search limit of {max}")]
    TooManyStops {
        /// Number of stops requested.
        count: usize,
        /// Maximum the solver accepts.
        max: usize,
    },
    /// An external call failed while solving.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Find the minimum-distance closed tour over a set of resolved stops.
///
/// Implementations must be deterministic for a fixed input order and oracle:
/// ties resolve to the first minimum in enumeration order. Fewer than two
/// stops short-circuit to the empty solution without querying anything.
pub trait TourSolver: Send + Sync {
    /// Choose a visiting order for `stops`, starting and ending at `start`.
    fn solve(&self, start: &Stop, stops: &[Stop]) -> Result<TourSolution, SolveError>;
}
