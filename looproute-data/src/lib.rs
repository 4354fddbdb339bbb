//! HTTP providers for the looproute mapping-service seams.
//!
//! Responsibilities:
//! - Implement the core boundary traits against a Google-Maps-compatible
//!   REST API: geocoding, driving directions, provider-side waypoint
//!   optimization, and static-map URL construction.
//! - Encapsulate the wire formats, timeouts, and bounded retry.
//!
//! Boundaries:
//! - No tour semantics live here (those are `looproute-core` and
//!   `looproute-solver`); this crate only moves bytes and converts them.
//! - The trait seams stay synchronous; async HTTP is bridged internally on
//!   an owned Tokio runtime.

#![forbid(unsafe_code)]

mod google;

pub use google::{
    ClientBuildError, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, MapsClient, MapsClientConfig,
};
