//! Wire types for the Google-style geocoding and directions payloads.
//!
//! Every response carries a `status` string; `"OK"` means usable results,
//! `"ZERO_RESULTS"`/`"NOT_FOUND"` mean the service understood the request
//! but has no answer, and anything else is an application-level failure.

use geo::Coord;
use serde::Deserialize;

/// Successful status code.
pub(crate) const STATUS_OK: &str = "OK";
/// The service has no result for a well-formed request.
pub(crate) const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";
/// A referenced location could not be geocoded by the directions service.
pub(crate) const STATUS_NOT_FOUND: &str = "NOT_FOUND";

/// Shared view over the `status`/`error_message` pair of every payload.
pub(crate) trait StatusReport {
    fn status_code(&self) -> &str;
    fn error_message(&self) -> Option<&str>;

    /// Whether the payload carries usable results.
    fn is_ok(&self) -> bool {
        self.status_code() == STATUS_OK
    }

    /// Whether the service answered "no such result".
    fn is_empty(&self) -> bool {
        matches!(self.status_code(), STATUS_ZERO_RESULTS | STATUS_NOT_FOUND)
    }
}

/// A latitude/longitude pair as the API spells it.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Convert to the crate-wide coordinate convention (`x = lng`, `y = lat`).
    pub(crate) fn to_coord(self) -> Coord<f64> {
        Coord {
            x: self.lng,
            y: self.lat,
        }
    }
}

/// Geocoding response.
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    pub location: LatLng,
}

impl StatusReport for GeocodeResponse {
    fn status_code(&self) -> &str {
        &self.status
    }

    fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

/// Directions response, shared by the single-pair and optimized-loop calls.
#[derive(Debug, Deserialize)]
pub(crate) struct DirectionsResponse {
    pub status: String,
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DirectionsRoute {
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
    /// Visiting order the provider chose when `optimize:true` was requested.
    /// Informational; the legs already arrive in that order.
    #[serde(default)]
    pub waypoint_order: Vec<usize>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RouteLeg {
    pub distance: TextValue,
    pub end_address: String,
    pub end_location: LatLng,
    #[serde(default)]
    pub steps: Vec<RouteStep>,
}

/// A measurement with the provider's human-readable rendering.
#[derive(Debug, Deserialize)]
pub(crate) struct TextValue {
    pub text: String,
    /// Metres.
    pub value: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RouteStep {
    #[serde(default)]
    pub polyline: Option<EncodedPolyline>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EncodedPolyline {
    pub points: String,
}

impl StatusReport for DirectionsResponse {
    fn status_code(&self) -> &str {
        &self.status
    }

    fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialise_geocode_success() {
        let json = r#"{
            "status": "OK",
            "results": [
                {"geometry": {"location": {"lat": 39.9, "lng": -105.05}}}
            ]
        }"#;

        let response: GeocodeResponse = serde_json::from_str(json).unwrap();

        assert!(response.is_ok());
        let coord = response.results[0].geometry.location.to_coord();
        assert_eq!(coord.x, -105.05);
        assert_eq!(coord.y, 39.9);
    }

    #[test]
    fn deserialise_geocode_zero_results() {
        let json = r#"{"status": "ZERO_RESULTS", "results": []}"#;
        let response: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_ok());
        assert!(response.is_empty());
    }

    #[test]
    fn deserialise_geocode_denied() {
        let json = r#"{
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        }"#;
        let response: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_ok());
        assert!(!response.is_empty());
        assert_eq!(
            response.error_message(),
            Some("The provided API key is invalid.")
        );
    }

    #[test]
    fn deserialise_directions_with_optimized_order() {
        let json = r#"{
            "status": "OK",
            "routes": [{
                "waypoint_order": [1, 0],
                "legs": [
                    {
                        "distance": {"text": "1.9 mi", "value": 3000},
                        "end_address": "C",
                        "end_location": {"lat": 0.0, "lng": 2.0},
                        "steps": [{"polyline": {"points": "_p~iF~ps|U"}}]
                    },
                    {
                        "distance": {"text": "0.3 mi", "value": 500},
                        "end_address": "B",
                        "end_location": {"lat": 0.0, "lng": 1.0}
                    },
                    {
                        "distance": {"text": "0.6 mi", "value": 1000},
                        "end_address": "A",
                        "end_location": {"lat": 0.0, "lng": 0.0}
                    }
                ]
            }]
        }"#;

        let response: DirectionsResponse = serde_json::from_str(json).unwrap();

        assert!(response.is_ok());
        let route = &response.routes[0];
        assert_eq!(route.waypoint_order, vec![1, 0]);
        assert_eq!(route.legs.len(), 3);
        assert_eq!(route.legs[0].distance.value, 3000.0);
        assert_eq!(route.legs[0].distance.text, "1.9 mi");
        assert_eq!(route.legs[0].steps.len(), 1);
        assert!(route.legs[1].steps.is_empty());
    }

    #[test]
    fn not_found_counts_as_empty() {
        let json = r#"{"status": "NOT_FOUND", "routes": []}"#;
        let response: DirectionsResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_empty());
    }
}
