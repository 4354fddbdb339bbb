//! Test-only doubles for the mapping-service seams.
//!
//! These stubs return pre-configured answers without any network traffic,
//! letting solver and assembler tests pin down exact distances and call
//! counts.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use geo::Coord;

use crate::{
    DistanceOracle, Geocoder, LegMeasure, RoutedLeg, ServiceError, WaypointOptimizer,
};

/// Hashable key for a coordinate, quantised to micro-degrees.
///
/// Test fixtures use coordinates well above micro-degree resolution, so the
/// quantisation is lossless for them.
fn key(coord: Coord<f64>) -> (i64, i64) {
    ((coord.x * 1e6).round() as i64, (coord.y * 1e6).round() as i64)
}

/// [`DistanceOracle`] backed by an explicit distance table.
///
/// Pairs are directed. Asking for a pair the table does not know is a test
/// bug and returns a loud `ServiceError` rather than a silent `None`.
///
/// # Example
///
/// ```
/// use geo::Coord;
/// use looproute_core::DistanceOracle;
/// use looproute_core::test_support::MatrixOracle;
///
/// let a = Coord { x: 0.0, y: 0.0 };
/// let b = Coord { x: 1.0, y: 0.0 };
/// let mut oracle = MatrixOracle::new();
/// oracle.insert(a, b, 1000.0, "0.6 mi");
///
/// let leg = oracle.leg_distance(a, b)?.unwrap();
/// assert_eq!(leg.meters, 1000.0);
/// assert_eq!(oracle.calls(), 1);
/// # Ok::<(), looproute_core::ServiceError>(())
/// ```
#[derive(Debug, Default)]
pub struct MatrixOracle {
    legs: HashMap<((i64, i64), (i64, i64)), Option<LegMeasure>>,
    calls: AtomicUsize,
}

impl MatrixOracle {
    /// Create an oracle with an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a measured leg for the directed pair `from -> to`.
    pub fn insert(&mut self, from: Coord<f64>, to: Coord<f64>, meters: f64, text: &str) {
        self.legs
            .insert((key(from), key(to)), Some(LegMeasure::new(meters, text)));
    }

    /// Record that no route exists for the directed pair `from -> to`.
    pub fn insert_no_route(&mut self, from: Coord<f64>, to: Coord<f64>) {
        self.legs.insert((key(from), key(to)), None);
    }

    /// Number of `leg_distance` calls answered so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DistanceOracle for MatrixOracle {
    fn leg_distance(
        &self,
        from: Coord<f64>,
        to: Coord<f64>,
    ) -> Result<Option<LegMeasure>, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.legs.get(&(key(from), key(to))) {
            Some(entry) => Ok(entry.clone()),
            None => Err(ServiceError::Service {
                code: "UNKNOWN_PAIR".into(),
                message: format!("no stubbed distance for {from:?} -> {to:?}"),
            }),
        }
    }
}

/// [`DistanceOracle`] that fails every query with a fixed error.
#[derive(Debug, Clone)]
pub struct FailingOracle {
    error: ServiceError,
}

impl FailingOracle {
    /// Create an oracle returning `error` for every query.
    #[must_use]
    pub fn new(error: ServiceError) -> Self {
        Self { error }
    }
}

impl DistanceOracle for FailingOracle {
    fn leg_distance(
        &self,
        _from: Coord<f64>,
        _to: Coord<f64>,
    ) -> Result<Option<LegMeasure>, ServiceError> {
        Err(self.error.clone())
    }
}

/// [`Geocoder`] backed by an address table; unknown addresses resolve to
/// `None`.
#[derive(Debug, Default)]
pub struct TableGeocoder {
    entries: HashMap<String, Coord<f64>>,
}

impl TableGeocoder {
    /// Create a geocoder with an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resolvable address.
    pub fn insert(&mut self, address: &str, location: Coord<f64>) {
        self.entries.insert(address.to_owned(), location);
    }
}

impl Geocoder for TableGeocoder {
    fn resolve(&self, address: &str) -> Result<Option<Coord<f64>>, ServiceError> {
        Ok(self.entries.get(address).copied())
    }
}

/// Canned answer for a [`ScriptedOptimizer`].
#[derive(Debug, Clone)]
enum OptimizerScript {
    Legs(Vec<RoutedLeg>),
    NoResult,
    Error(ServiceError),
}

/// [`WaypointOptimizer`] returning one pre-configured answer for every call.
#[derive(Debug, Clone)]
pub struct ScriptedOptimizer {
    script: OptimizerScript,
}

impl ScriptedOptimizer {
    /// Answer every call with the given legs.
    #[must_use]
    pub fn with_legs(legs: Vec<RoutedLeg>) -> Self {
        Self {
            script: OptimizerScript::Legs(legs),
        }
    }

    /// Answer every call with "no result".
    #[must_use]
    pub fn with_no_result() -> Self {
        Self {
            script: OptimizerScript::NoResult,
        }
    }

    /// Fail every call with the given error.
    #[must_use]
    pub fn with_error(error: ServiceError) -> Self {
        Self {
            script: OptimizerScript::Error(error),
        }
    }
}

impl WaypointOptimizer for ScriptedOptimizer {
    fn optimized_route(
        &self,
        _origin: &str,
        _stops: &[String],
    ) -> Result<Option<Vec<RoutedLeg>>, ServiceError> {
        match &self.script {
            OptimizerScript::Legs(legs) => Ok(Some(legs.clone())),
            OptimizerScript::NoResult => Ok(None),
            OptimizerScript::Error(error) => Err(error.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_oracle_distinguishes_direction() {
        let a = Coord { x: 0.0, y: 0.0 };
        let b = Coord { x: 1.0, y: 0.0 };
        let mut oracle = MatrixOracle::new();
        oracle.insert(a, b, 100.0, "100 m");
        oracle.insert(b, a, 200.0, "200 m");

        assert_eq!(oracle.leg_distance(a, b).unwrap().unwrap().meters, 100.0);
        assert_eq!(oracle.leg_distance(b, a).unwrap().unwrap().meters, 200.0);
        assert_eq!(oracle.calls(), 2);
    }

    #[test]
    fn matrix_oracle_rejects_unstubbed_pairs() {
        let oracle = MatrixOracle::new();
        let err = oracle
            .leg_distance(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 0.0 })
            .unwrap_err();
        assert!(matches!(err, ServiceError::Service { ref code, .. } if code == "UNKNOWN_PAIR"));
    }

    #[test]
    fn matrix_oracle_reports_no_route_as_none() {
        let a = Coord { x: 0.0, y: 0.0 };
        let b = Coord { x: 1.0, y: 0.0 };
        let mut oracle = MatrixOracle::new();
        oracle.insert_no_route(a, b);
        assert!(oracle.leg_distance(a, b).unwrap().is_none());
    }

    #[test]
    fn table_geocoder_resolves_known_addresses_only() {
        let mut geocoder = TableGeocoder::new();
        geocoder.insert("home", Coord { x: -105.0, y: 39.9 });
        assert!(geocoder.resolve("home").unwrap().is_some());
        assert!(geocoder.resolve("elsewhere").unwrap().is_none());
    }
}
