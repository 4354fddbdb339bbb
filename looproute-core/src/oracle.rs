//! Driving-distance queries against an external routing service.
//!
//! Two query shapes exist: [`DistanceOracle`] answers one directed pair at a
//! time and feeds the brute-force search, while [`WaypointOptimizer`] hands
//! the whole ordering problem to the service and returns the legs of its
//! chosen closed loop.

use geo::Coord;

use crate::ServiceError;

/// One measured driving leg.
///
/// The `text` is the service's human-readable rendering (e.g. `"4.3 mi"`)
/// and is reported verbatim rather than recomputed from `meters`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegMeasure {
    /// Driving distance in metres.
    pub meters: f64,
    /// Human-readable distance as reported by the service.
    pub text: String,
}

impl LegMeasure {
    /// Construct a measured leg.
    pub fn new(meters: f64, text: impl Into<String>) -> Self {
        Self {
            meters,
            text: text.into(),
        }
    }
}

/// Answer directed point-to-point driving-distance queries.
///
/// `Ok(None)` means the service found no drivable route between the pair;
/// it is an expected outcome, not an error.
pub trait DistanceOracle {
    /// Measure the driving leg from `from` to `to`.
    fn leg_distance(
        &self,
        from: Coord<f64>,
        to: Coord<f64>,
    ) -> Result<Option<LegMeasure>, ServiceError>;
}

impl<T: DistanceOracle + ?Sized> DistanceOracle for &T {
    fn leg_distance(
        &self,
        from: Coord<f64>,
        to: Coord<f64>,
    ) -> Result<Option<LegMeasure>, ServiceError> {
        (**self).leg_distance(from, to)
    }
}

/// One leg of a provider-optimized route.
///
/// Carries the destination the leg arrives at, so a sequence of these fully
/// describes the visiting order the provider chose.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedLeg {
    /// Where the leg ends.
    pub end_location: Coord<f64>,
    /// Formatted address of the leg's end, as reported by the service.
    pub end_address: String,
    /// Measured distance of the leg.
    pub measure: LegMeasure,
}

/// Delegate stop ordering to the routing service.
///
/// The request asks for a closed loop (origin = destination = `origin`) over
/// `stops` with the provider's "optimize waypoint order" flag set. A
/// successful answer holds `stops.len() + 1` legs: one per stop in the
/// provider's visiting order, then the closing leg back to the origin.
/// `Ok(None)` means the provider found no route at all.
pub trait WaypointOptimizer {
    /// Request a provider-optimized closed loop over `stops`.
    fn optimized_route(
        &self,
        origin: &str,
        stops: &[String],
    ) -> Result<Option<Vec<RoutedLeg>>, ServiceError>;
}

impl<T: WaypointOptimizer + ?Sized> WaypointOptimizer for &T {
    fn optimized_route(
        &self,
        origin: &str,
        stops: &[String],
    ) -> Result<Option<Vec<RoutedLeg>>, ServiceError> {
        (**self).optimized_route(origin, stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leg_measure_reports_text_verbatim() {
        let leg = LegMeasure::new(6921.0, "4.3 mi");
        assert_eq!(leg.meters, 6921.0);
        assert_eq!(leg.text, "4.3 mi");
    }
}
