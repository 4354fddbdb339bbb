//! Solver that delegates ordering to the mapping provider.

use log::debug;
use looproute_core::{
    ServiceError, SolveError, Stop, TourSolution, TourSolver, WaypointOptimizer,
};

/// Tour solver backed by the provider's waypoint-reordering feature.
///
/// One external call replaces the whole permutation search, so this solver
/// has no stop ceiling and is preferred whenever the provider supports
/// order optimization. Its only job is to request the optimized closed loop
/// and unpack the returned legs; it performs no search of its own.
pub struct DelegatedSolver<P: WaypointOptimizer> {
    optimizer: P,
}

impl<P: WaypointOptimizer> DelegatedSolver<P> {
    /// Construct a solver over the given optimizer.
    pub const fn new(optimizer: P) -> Self {
        Self { optimizer }
    }
}

impl<P: WaypointOptimizer + Send + Sync> TourSolver for DelegatedSolver<P> {
    fn solve(&self, start: &Stop, stops: &[Stop]) -> Result<TourSolution, SolveError> {
        if stops.len() < 2 {
            debug!("{} stops: nothing to order", stops.len());
            return Ok(TourSolution::empty());
        }

        let addresses: Vec<String> = stops.iter().map(|s| s.address.clone()).collect();
        let Some(legs) = self.optimizer.optimized_route(&start.address, &addresses)? else {
            debug!("provider found no route over {} stops", stops.len());
            return Ok(TourSolution::empty());
        };

        // A closed loop over k stops must come back as k + 1 legs.
        if legs.len() != stops.len() + 1 {
            return Err(ServiceError::Parse {
                message: format!(
                    "expected {} legs in optimized route, got {}",
                    stops.len() + 1,
                    legs.len()
                ),
            }
            .into());
        }

        let total_meters = legs.iter().map(|leg| leg.measure.meters).sum();
        let ordered: Vec<Stop> = legs[..legs.len() - 1]
            .iter()
            .map(|leg| Stop::new(leg.end_address.clone(), leg.end_location))
            .collect();
        let measures = legs.into_iter().map(|leg| Some(leg.measure)).collect();

        Ok(TourSolution {
            stops: ordered,
            legs: measures,
            total_meters,
        })
    }
}
