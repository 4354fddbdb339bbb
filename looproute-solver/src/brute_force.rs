//! Exhaustive permutation search over pairwise oracle distances.

use std::collections::HashMap;

use geo::Coord;
use log::debug;
use looproute_core::{
    DistanceOracle, LegMeasure, ServiceError, SolveError, Stop, TourSolution, TourSolver,
};

use crate::permute;

/// Hard ceiling on the brute-force stop count.
///
/// The search enumerates every permutation, so cost is factorial in the stop
/// count. Seven stops mean 5040 orderings; the ceiling keeps a solve inside
/// interactive latency and is enforced, not advisory.
pub const MAX_STOPS: usize = 7;

/// How the search treats a leg the oracle cannot route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingLegPolicy {
    /// An ordering with an unroutable leg can never win.
    ///
    /// This is the default: counting an unroutable leg as zero would let a
    /// partially unreachable ordering beat a genuinely drivable one.
    #[default]
    Disqualify,
    /// An unroutable leg contributes zero distance and the search continues.
    ///
    /// Matches the historical behaviour of address-list route planners;
    /// kept selectable because the resulting tour still visits every stop
    /// even when one leg has no drivable path.
    SkipLeg,
}

/// Configuration for [`BruteForceSolver`].
#[derive(Debug, Clone)]
pub struct BruteForceConfig {
    /// Maximum number of stops accepted before rejecting the request.
    pub max_stops: usize,
    /// Treatment of unroutable legs during the search.
    pub missing_leg_policy: MissingLegPolicy,
}

impl Default for BruteForceConfig {
    fn default() -> Self {
        Self {
            max_stops: MAX_STOPS,
            missing_leg_policy: MissingLegPolicy::default(),
        }
    }
}

/// Exact tour solver: enumerate every visiting order, keep the shortest.
///
/// Orderings are enumerated lexicographically over the input stop order, and
/// the comparison is a strict minimum, so ties deterministically resolve to
/// the earliest ordering. Pairwise distances are memoized for the duration
/// of one solve; the oracle sees each directed pair at most once.
pub struct BruteForceSolver<O: DistanceOracle> {
    oracle: O,
    config: BruteForceConfig,
}

impl<O: DistanceOracle> BruteForceSolver<O> {
    /// Construct a solver with the default configuration.
    pub fn new(oracle: O) -> Self {
        Self::with_config(oracle, BruteForceConfig::default())
    }

    /// Construct a solver with explicit configuration.
    pub const fn with_config(oracle: O, config: BruteForceConfig) -> Self {
        Self { oracle, config }
    }

    /// Measure one directed leg, consulting the per-solve memo table first.
    fn measured_leg(
        &self,
        memo: &mut HashMap<(usize, usize), Option<LegMeasure>>,
        points: &[Coord<f64>],
        from: usize,
        to: usize,
    ) -> Result<Option<LegMeasure>, ServiceError> {
        if let Some(cached) = memo.get(&(from, to)) {
            return Ok(cached.clone());
        }
        let leg = self.oracle.leg_distance(points[from], points[to])?;
        memo.insert((from, to), leg.clone());
        Ok(leg)
    }
}

struct Candidate {
    order: Vec<usize>,
    legs: Vec<Option<LegMeasure>>,
    total_meters: f64,
}

impl<O: DistanceOracle + Send + Sync> TourSolver for BruteForceSolver<O> {
    fn solve(&self, start: &Stop, stops: &[Stop]) -> Result<TourSolution, SolveError> {
        if stops.len() > self.config.max_stops {
            return Err(SolveError::TooManyStops {
                count: stops.len(),
                max: self.config.max_stops,
            });
        }
        if stops.len() < 2 {
            debug!("{} stops: nothing to order", stops.len());
            return Ok(TourSolution::empty());
        }

        // points[0] is the start; stop i sits at index i + 1.
        let points: Vec<Coord<f64>> = std::iter::once(start.location)
            .chain(stops.iter().map(|s| s.location))
            .collect();
        let mut memo: HashMap<(usize, usize), Option<LegMeasure>> = HashMap::new();
        let mut best: Option<Candidate> = None;

        for order in permute::lexicographic(stops.len()) {
            let mut legs = Vec::with_capacity(order.len() + 1);
            let mut total_meters = 0.0;
            let mut complete = true;
            let mut from = 0usize;
            for to in order.iter().map(|&i| i + 1).chain(std::iter::once(0)) {
                match self.measured_leg(&mut memo, &points, from, to)? {
                    Some(leg) => {
                        total_meters += leg.meters;
                        legs.push(Some(leg));
                    }
                    None if self.config.missing_leg_policy == MissingLegPolicy::Disqualify => {
                        complete = false;
                        break;
                    }
                    None => legs.push(None),
                }
                from = to;
            }
            if !complete {
                debug!("order {order:?} disqualified: unroutable leg");
                continue;
            }
            debug!("order {order:?} totals {total_meters:.0} m");
            if best
                .as_ref()
                .map_or(true, |b| total_meters < b.total_meters)
            {
                best = Some(Candidate {
                    order,
                    legs,
                    total_meters,
                });
            }
        }

        Ok(match best {
            Some(candidate) => TourSolution {
                stops: candidate
                    .order
                    .iter()
                    .map(|&i| stops[i].clone())
                    .collect(),
                legs: candidate.legs,
                total_meters: candidate.total_meters,
            },
            // Every ordering had an unroutable leg.
            None => TourSolution::empty(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use looproute_core::test_support::{FailingOracle, MatrixOracle};
    use rstest::{fixture, rstest};

    const A: Coord<f64> = Coord { x: 0.0, y: 0.0 };
    const B: Coord<f64> = Coord { x: 1.0, y: 0.0 };
    const C: Coord<f64> = Coord { x: 2.0, y: 0.0 };

    fn start() -> Stop {
        Stop::new("A", A)
    }

    fn stops() -> Vec<Stop> {
        vec![Stop::new("B", B), Stop::new("C", C)]
    }

    /// Distance table from the planner's reference scenario: both visiting
    /// orders total 4500 m, so the tie must resolve to [B, C].
    #[fixture]
    fn scenario_oracle() -> MatrixOracle {
        let mut oracle = MatrixOracle::new();
        oracle.insert(A, B, 1000.0, "0.6 mi");
        oracle.insert(A, C, 3000.0, "1.9 mi");
        oracle.insert(B, C, 500.0, "0.3 mi");
        oracle.insert(C, B, 500.0, "0.3 mi");
        oracle.insert(B, A, 1000.0, "0.6 mi");
        oracle.insert(C, A, 3000.0, "1.9 mi");
        oracle
    }

    #[rstest]
    fn ties_resolve_to_first_enumerated_order(scenario_oracle: MatrixOracle) {
        let solver = BruteForceSolver::new(scenario_oracle);
        let solution = solver.solve(&start(), &stops()).unwrap();

        let order: Vec<&str> = solution.stops.iter().map(|s| s.address.as_str()).collect();
        assert_eq!(order, vec!["B", "C"]);
        assert_eq!(solution.total_meters, 4500.0);
        assert_eq!(solution.legs.len(), 3);
    }

    #[rstest]
    fn repeated_solves_choose_the_same_order(scenario_oracle: MatrixOracle) {
        let solver = BruteForceSolver::new(scenario_oracle);
        let first = solver.solve(&start(), &stops()).unwrap();
        let second = solver.solve(&start(), &stops()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn memoizes_pairwise_queries() {
        let mut oracle = MatrixOracle::new();
        let d = Coord { x: 3.0, y: 0.0 };
        let all = [A, B, C, d];
        for &from in &all {
            for &to in &all {
                if from != to {
                    oracle.insert(from, to, 1000.0, "0.6 mi");
                }
            }
        }
        let solver = BruteForceSolver::new(oracle);
        let three_stops = vec![Stop::new("B", B), Stop::new("C", C), Stop::new("D", d)];
        solver.solve(&start(), &three_stops).unwrap();

        // 3 start->stop, 6 stop->stop, 3 stop->start directed pairs; the
        // 6 permutations would otherwise need 24 queries.
        assert_eq!(solver.oracle.calls(), 12);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn short_stop_sets_skip_the_search_entirely(#[case] n: usize) {
        let oracle = MatrixOracle::new();
        let solver = BruteForceSolver::new(oracle);
        let solution = solver.solve(&start(), &stops()[..n]).unwrap();

        assert!(solution.is_empty());
        assert_eq!(solution.total_meters, 0.0);
        assert_eq!(solver.oracle.calls(), 0);
    }

    #[test]
    fn rejects_more_stops_than_the_ceiling() {
        let solver = BruteForceSolver::new(MatrixOracle::new());
        let too_many: Vec<Stop> = (0..8)
            .map(|i| Stop::new(format!("stop {i}"), Coord { x: i as f64, y: 1.0 }))
            .collect();
        let err = solver.solve(&start(), &too_many).unwrap_err();
        assert_eq!(
            err,
            SolveError::TooManyStops {
                count: 8,
                max: MAX_STOPS
            }
        );
    }

    #[fixture]
    fn one_way_gap_oracle() -> MatrixOracle {
        // B->C has no drivable route; every other pair does.
        let mut oracle = MatrixOracle::new();
        oracle.insert(A, B, 1000.0, "0.6 mi");
        oracle.insert(A, C, 3000.0, "1.9 mi");
        oracle.insert_no_route(B, C);
        oracle.insert(C, B, 500.0, "0.3 mi");
        oracle.insert(B, A, 1000.0, "0.6 mi");
        oracle.insert(C, A, 3000.0, "1.9 mi");
        oracle
    }

    #[rstest]
    fn skip_leg_keeps_the_order_and_excludes_the_gap(one_way_gap_oracle: MatrixOracle) {
        let solver = BruteForceSolver::with_config(
            one_way_gap_oracle,
            BruteForceConfig {
                missing_leg_policy: MissingLegPolicy::SkipLeg,
                ..BruteForceConfig::default()
            },
        );
        let solution = solver.solve(&start(), &stops()).unwrap();

        // [B, C] = 1000 + 0 + 3000 beats [C, B] = 3000 + 500 + 1000.
        let order: Vec<&str> = solution.stops.iter().map(|s| s.address.as_str()).collect();
        assert_eq!(order, vec!["B", "C"]);
        assert_eq!(solution.total_meters, 4000.0);
        assert_eq!(solution.legs[1], None);
    }

    #[rstest]
    fn disqualify_rules_out_orders_with_unroutable_legs(one_way_gap_oracle: MatrixOracle) {
        let solver = BruteForceSolver::new(one_way_gap_oracle);
        let solution = solver.solve(&start(), &stops()).unwrap();

        let order: Vec<&str> = solution.stops.iter().map(|s| s.address.as_str()).collect();
        assert_eq!(order, vec!["C", "B"]);
        assert_eq!(solution.total_meters, 4500.0);
        assert!(solution.legs.iter().all(Option::is_some));
    }

    #[test]
    fn fully_unroutable_inputs_yield_the_empty_solution() {
        let mut oracle = MatrixOracle::new();
        for &from in &[A, B, C] {
            for &to in &[A, B, C] {
                if from != to {
                    oracle.insert_no_route(from, to);
                }
            }
        }
        let solver = BruteForceSolver::new(oracle);
        let solution = solver.solve(&start(), &stops()).unwrap();
        assert!(solution.is_empty());
    }

    #[test]
    fn oracle_failures_abort_the_solve() {
        let error = ServiceError::Http {
            endpoint: "https://example.com/api".into(),
            status: 403,
            message: "quota".into(),
        };
        let solver = BruteForceSolver::new(FailingOracle::new(error.clone()));
        let err = solver.solve(&start(), &stops()).unwrap_err();
        assert_eq!(err, SolveError::Service(error));
    }

    mod optimality {
        use super::*;
        use proptest::prelude::*;

        /// Build a stubbed oracle and stop list from a dense distance matrix.
        /// Row/column 0 is the start.
        fn fixture(matrix: &[Vec<u32>]) -> (MatrixOracle, Stop, Vec<Stop>) {
            let n = matrix.len();
            let points: Vec<Coord<f64>> =
                (0..n).map(|i| Coord { x: i as f64, y: 0.0 }).collect();
            let mut oracle = MatrixOracle::new();
            for (i, row) in matrix.iter().enumerate() {
                for (j, &meters) in row.iter().enumerate() {
                    if i != j {
                        oracle.insert(points[i], points[j], f64::from(meters), "leg");
                    }
                }
            }
            let start = Stop::new("start", points[0]);
            let stops = (1..n)
                .map(|i| Stop::new(format!("stop {i}"), points[i]))
                .collect();
            (oracle, start, stops)
        }

        /// Total for one visiting order, computed independently of the solver.
        fn order_total(matrix: &[Vec<u32>], order: &[usize]) -> f64 {
            let mut total = 0.0;
            let mut from = 0usize;
            for to in order.iter().map(|&i| i + 1).chain(std::iter::once(0)) {
                total += f64::from(matrix[from][to]);
                from = to;
            }
            total
        }

        fn dense_matrix() -> impl Strategy<Value = Vec<Vec<u32>>> {
            // 3..=6 points: a start plus 2 to 5 stops.
            (3usize..=6).prop_flat_map(|n| {
                prop::collection::vec(prop::collection::vec(1u32..100_000, n), n)
            })
        }

        proptest! {
            #[test]
            fn chosen_order_is_no_longer_than_any_other(matrix in dense_matrix()) {
                let (oracle, start, stops) = fixture(&matrix);
                let solver = BruteForceSolver::new(oracle);
                let solution = solver.solve(&start, &stops).unwrap();

                for order in crate::permute::lexicographic(stops.len()) {
                    prop_assert!(
                        solution.total_meters <= order_total(&matrix, &order) + 1e-6
                    );
                }
            }
        }
    }
}
