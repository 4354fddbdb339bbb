//! Static map visualisation of an assembled tour.

use crate::{ServiceError, Waypoint};

/// Produce a static-map image URL for a waypoint sequence.
///
/// Implementations may call back into the routing service to fetch detailed
/// path geometry. `Ok(None)` is returned for an empty waypoint list — there
/// is nothing to draw.
pub trait MapRenderer {
    /// Build a visualisation URL for `waypoints`.
    fn render_static_map(&self, waypoints: &[Waypoint]) -> Result<Option<String>, ServiceError>;
}
