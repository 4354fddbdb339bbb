//! The assembled closed-loop tour.

use geo::Coord;

/// One point of the assembled tour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    /// Position of the waypoint (`x = longitude`, `y = latitude`).
    pub location: Coord<f64>,
    /// Address of the waypoint.
    pub address: String,
    /// Human-readable distance of the leg that reached this waypoint.
    ///
    /// `None` for the tour head, or for a leg the oracle could not route
    /// when the search ran under the skip-leg policy.
    pub leg_distance: Option<String>,
}

/// A closed driving tour: start, each stop in visiting order, start again.
///
/// The canonical shape duplicates the start at the tail, so a tour over `k`
/// stops holds `k + 2` waypoints. The empty tour has no waypoints and a zero
/// total.
///
/// # Examples
/// ```
/// use looproute_core::Tour;
///
/// let tour = Tour::empty();
/// assert!(tour.waypoints.is_empty());
/// assert_eq!(tour.total_miles, 0.0);
/// assert!(tour.map_url.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// Waypoints in visiting order, start first and last.
    pub waypoints: Vec<Waypoint>,
    /// Total driving distance in miles, rounded to two decimal places.
    pub total_miles: f64,
    /// Optional static-map visualisation URL.
    pub map_url: Option<String>,
}

impl Tour {
    /// Construct a tour from waypoints and a mile total.
    pub fn new(waypoints: Vec<Waypoint>, total_miles: f64) -> Self {
        Self {
            waypoints,
            total_miles,
            map_url: None,
        }
    }

    /// Construct the empty tour.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0.0)
    }

    /// Attach a visualisation URL.
    #[must_use]
    pub fn with_map_url(mut self, url: impl Into<String>) -> Self {
        self.map_url = Some(url.into());
        self
    }

    /// Number of stops visited, excluding the start.
    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.waypoints.len().saturating_sub(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoint(address: &str) -> Waypoint {
        Waypoint {
            location: Coord { x: 0.0, y: 0.0 },
            address: address.into(),
            leg_distance: None,
        }
    }

    #[test]
    fn stop_count_excludes_start_and_closing_duplicate() {
        let tour = Tour::new(
            vec![waypoint("start"), waypoint("a"), waypoint("b"), waypoint("start")],
            5.0,
        );
        assert_eq!(tour.stop_count(), 2);
    }

    #[test]
    fn empty_tour_has_no_stops() {
        assert_eq!(Tour::empty().stop_count(), 0);
    }

    #[test]
    fn with_map_url_sets_url() {
        let tour = Tour::empty().with_map_url("https://example.com/map.png");
        assert_eq!(tour.map_url.as_deref(), Some("https://example.com/map.png"));
    }
}
