//! Static-map URL construction for an assembled tour.
//!
//! The renderer fetches the full route's directions once, concatenates the
//! decoded step polylines, and subsamples the result so the path parameter
//! stays inside the static-map API's URL length ceiling.

use geo::Coord;
use log::debug;
use polyline::decode_polyline;

use looproute_core::{MapRenderer, ServiceError, Waypoint};

use super::api::{DirectionsResponse, StatusReport};
use super::client::{DIRECTIONS_PATH, MapsClient, format_coord, service_error};

const STATIC_MAP_PATH: &str = "/maps/api/staticmap";

/// Ceiling on path points embedded in the URL.
pub(crate) const MAX_PATH_POINTS: usize = 50;

/// Precision of the API's encoded polylines.
const POLYLINE_PRECISION: u32 = 5;

impl MapRenderer for MapsClient {
    fn render_static_map(&self, waypoints: &[Waypoint]) -> Result<Option<String>, ServiceError> {
        if waypoints.is_empty() {
            return Ok(None);
        }
        let geometry = self.route_geometry(waypoints)?;
        let path = subsample(&geometry);
        let url = self.build_static_map_url(waypoints, &path)?;
        Ok(Some(url))
    }
}

impl MapsClient {
    /// Fetch the detailed path geometry for the whole waypoint sequence.
    ///
    /// Returns an empty geometry when the service has no drivable route;
    /// the map then renders markers without a path.
    fn route_geometry(&self, waypoints: &[Waypoint]) -> Result<Vec<Coord<f64>>, ServiceError> {
        let origin = format_coord(waypoints[0].location);
        let destination = format_coord(waypoints[waypoints.len() - 1].location);
        let middle = waypoints
            .get(1..waypoints.len().saturating_sub(1))
            .unwrap_or(&[]);
        let via: String = middle
            .iter()
            .map(|waypoint| format_coord(waypoint.location))
            .collect::<Vec<_>>()
            .join("|");

        let mut params = vec![
            ("origin", origin.as_str()),
            ("destination", destination.as_str()),
            ("mode", "driving"),
        ];
        if !via.is_empty() {
            params.push(("waypoints", via.as_str()));
        }
        let url = self.build_url(DIRECTIONS_PATH, &params)?;
        let response: DirectionsResponse = self.block_on(self.get_json_with_retry(&url))?;

        if response.is_empty() {
            debug!("no drivable path geometry for {} waypoints", waypoints.len());
            return Ok(Vec::new());
        }
        if !response.is_ok() {
            return Err(service_error(&response));
        }
        decode_geometry(&response)
    }

    /// Assemble the final static-map URL: markers per waypoint, one
    /// subsampled path, fixed image options.
    fn build_static_map_url(
        &self,
        waypoints: &[Waypoint],
        path: &[Coord<f64>],
    ) -> Result<String, ServiceError> {
        let last = waypoints.len().saturating_sub(1);
        let mut markers = Vec::with_capacity(waypoints.len());
        for (i, waypoint) in waypoints.iter().enumerate() {
            let position = format_coord(waypoint.location);
            if i == 0 {
                markers.push(format!("color:blue|label:S|{position}"));
            } else if i == last && waypoint.location == waypoints[0].location {
                // The closing duplicate of the start already has the S marker.
            } else {
                markers.push(format!("color:red|label:{i}|{position}"));
            }
        }

        let path_param = (!path.is_empty()).then(|| {
            let points: Vec<String> = path.iter().map(|point| format_coord(*point)).collect();
            format!("color:blue|weight:3|{}", points.join("|"))
        });

        let mut params: Vec<(&str, &str)> = vec![
            ("size", "800x600"),
            ("maptype", "roadmap"),
            ("format", "png"),
            ("visual_refresh", "true"),
        ];
        for marker in &markers {
            params.push(("markers", marker.as_str()));
        }
        if let Some(param) = &path_param {
            params.push(("path", param.as_str()));
        }
        Ok(self.build_url(STATIC_MAP_PATH, &params)?.into())
    }
}

/// Decode and concatenate every step polyline of the first route.
pub(crate) fn decode_geometry(
    response: &DirectionsResponse,
) -> Result<Vec<Coord<f64>>, ServiceError> {
    let mut points = Vec::new();
    let Some(route) = response.routes.first() else {
        return Ok(points);
    };
    for leg in &route.legs {
        for step in &leg.steps {
            if let Some(encoded) = &step.polyline {
                let line = decode_polyline(&encoded.points, POLYLINE_PRECISION).map_err(|err| {
                    ServiceError::Parse {
                        message: format!("invalid step polyline: {err}"),
                    }
                })?;
                points.extend(line.0);
            }
        }
    }
    Ok(points)
}

/// Thin `points` to at most [`MAX_PATH_POINTS`] by taking every n-th point.
pub(crate) fn subsample(points: &[Coord<f64>]) -> Vec<Coord<f64>> {
    let stride = points.len().div_ceil(MAX_PATH_POINTS).max(1);
    points.iter().step_by(stride).copied().collect()
}
