//! Convert a solver's chosen order into the final closed-loop tour.

use looproute_core::units::meters_to_miles;
use looproute_core::{Stop, Tour, TourSolution, Waypoint};

/// Assemble the closed-loop [`Tour`] for a solved visiting order.
///
/// The tour opens at `start` with no inbound leg, visits each stop in the
/// solution's order carrying the oracle's distance text for the leg that
/// reached it, and closes with the start again carrying the closing leg's
/// text. The metre total converts to miles at this boundary only.
///
/// The function is pure: the same solution always assembles to the same
/// tour, and the empty solution assembles to the empty tour.
#[must_use]
pub fn assemble(start: &Stop, solution: &TourSolution) -> Tour {
    if solution.is_empty() {
        return Tour::empty();
    }
    debug_assert_eq!(solution.legs.len(), solution.stops.len() + 1);

    let mut waypoints = Vec::with_capacity(solution.stops.len() + 2);
    waypoints.push(Waypoint {
        location: start.location,
        address: start.address.clone(),
        leg_distance: None,
    });
    for (stop, leg) in solution.stops.iter().zip(&solution.legs) {
        waypoints.push(Waypoint {
            location: stop.location,
            address: stop.address.clone(),
            leg_distance: leg.as_ref().map(|measure| measure.text.clone()),
        });
    }
    let closing = solution
        .legs
        .get(solution.stops.len())
        .and_then(|leg| leg.as_ref().map(|measure| measure.text.clone()));
    waypoints.push(Waypoint {
        location: start.location,
        address: start.address.clone(),
        leg_distance: closing,
    });

    Tour::new(waypoints, meters_to_miles(solution.total_meters))
}
