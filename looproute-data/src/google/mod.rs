//! Client for a Google-Maps-compatible mapping API.
//!
//! [`MapsClient`] implements every core seam against three REST endpoints:
//!
//! - `geocode/json` for [`Geocoder`](looproute_core::Geocoder);
//! - `directions/json` for [`DistanceOracle`](looproute_core::DistanceOracle)
//!   (one directed pair per request) and
//!   [`WaypointOptimizer`](looproute_core::WaypointOptimizer) (one request
//!   with `optimize:true` waypoints);
//! - `staticmap` for [`MapRenderer`](looproute_core::MapRenderer), which
//!   additionally fetches the full route's step polylines and subsamples
//!   them to respect the static-map URL length ceiling.
//!
//! # Example
//!
//! ```no_run
//! use looproute_core::Geocoder;
//! use looproute_data::{MapsClient, MapsClientConfig};
//! use std::time::Duration;
//!
//! let config = MapsClientConfig::new("api-key")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_max_retries(3);
//! let client = MapsClient::with_config(config)?;
//! let coord = client.resolve("1600 Amphitheatre Pkwy, Mountain View, CA")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod api;
mod client;
mod staticmap;

pub use client::{
    ClientBuildError, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, MapsClient, MapsClientConfig,
};
