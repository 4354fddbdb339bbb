//! Synchronous mapping-service client over async HTTP.
//!
//! [`MapsClient`] owns a current-thread Tokio runtime and blocks on its own
//! requests, keeping the core trait seams callable from synchronous code.
//! When invoked from inside a multi-threaded Tokio runtime it borrows that
//! runtime's handle via `block_in_place` instead, avoiding nested-runtime
//! panics.

use std::time::Duration;

use geo::Coord;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::{Position, Url};

use looproute_core::{
    DistanceOracle, Geocoder, LegMeasure, RoutedLeg, ServiceError, WaypointOptimizer,
};

use super::api::{DirectionsResponse, GeocodeResponse, StatusReport};

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

/// Default user agent for API requests.
pub const DEFAULT_USER_AGENT: &str = "looproute/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retries after a retryable failure.
const DEFAULT_MAX_RETRIES: u32 = 2;

/// First retry delay; doubles on each subsequent attempt.
const RETRY_BASE_DELAY: Duration = Duration::from_millis(250);

pub(crate) const GEOCODE_PATH: &str = "/maps/api/geocode/json";
pub(crate) const DIRECTIONS_PATH: &str = "/maps/api/directions/json";

/// Error type for [`MapsClient`] construction failures.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Configuration for [`MapsClient`].
#[derive(Debug, Clone)]
pub struct MapsClientConfig {
    /// Base URL of the API host.
    pub base_url: String,
    /// API key appended to every request.
    pub api_key: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
    /// Retries allowed after a retryable failure (0 disables retry).
    pub max_retries: u32,
}

impl MapsClientConfig {
    /// Create a configuration for the default host with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Set the API host, e.g. a proxy or a recording stub.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the retry budget.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

/// HTTP client for the mapping API, implementing every core seam.
pub struct MapsClient {
    client: Client,
    config: MapsClientConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for MapsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapsClient")
            .field("client", &self.client)
            .field("base_url", &self.config.base_url)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl MapsClient {
    /// Create a client for the default host.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClientBuildError> {
        Self::with_config(MapsClientConfig::new(api_key))
    }

    /// Create a client with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: MapsClientConfig) -> Result<Self, ClientBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ClientBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ClientBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Build a request URL for `path`, appending `params` and the API key.
    pub(crate) fn build_url(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Url, ServiceError> {
        let base = self.config.base_url.trim_end_matches('/');
        let mut url =
            Url::parse(&format!("{base}{path}")).map_err(|err| ServiceError::Parse {
                message: format!("invalid request URL: {err}"),
            })?;
        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("key", &self.config.api_key);
        Ok(url)
    }

    /// Run a future to completion on whichever runtime is appropriate.
    pub(crate) fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            // No runtime, or a current_thread runtime: use our own.
            _ => self.runtime.block_on(future),
        }
    }

    /// GET `url` and decode the JSON payload, retrying retryable failures
    /// with exponential backoff up to the configured budget.
    pub(crate) async fn get_json_with_retry<T>(&self, url: &Url) -> Result<T, ServiceError>
    where
        T: DeserializeOwned + StatusReport,
    {
        let mut attempt = 0u32;
        loop {
            match self.get_json::<T>(url).await {
                Ok(value) => return Ok(value),
                Err(err) if should_retry(&err) && attempt < self.config.max_retries => {
                    attempt += 1;
                    let delay = RETRY_BASE_DELAY * 2u32.pow(attempt - 1);
                    debug!(
                        "retrying {} in {delay:?} (attempt {attempt}): {err}",
                        redact(url)
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn get_json<T>(&self, url: &Url) -> Result<T, ServiceError>
    where
        T: DeserializeOwned + StatusReport,
    {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, url))?;
        let payload: T = response.json().await.map_err(|err| ServiceError::Parse {
            message: err.to_string(),
        })?;

        // Throttling surfaces inside an HTTP 200 payload; raise it here so
        // the retry loop can see it.
        if is_retryable_status(payload.status_code()) {
            return Err(service_error(&payload));
        }
        Ok(payload)
    }

    /// Convert a reqwest error to a `ServiceError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &Url) -> ServiceError {
        let endpoint = redact(url);
        if error.is_timeout() {
            return ServiceError::Timeout {
                endpoint,
                timeout_secs: self.config.timeout.as_secs(),
            };
        }
        if let Some(status) = error.status() {
            return ServiceError::Http {
                endpoint,
                status: status.as_u16(),
                message: error.to_string(),
            };
        }
        ServiceError::Network {
            endpoint,
            message: error.to_string(),
        }
    }
}

/// Strip the query string (and with it the API key) for logs and errors.
pub(crate) fn redact(url: &Url) -> String {
    url[..Position::BeforeQuery].to_owned()
}

/// Format a coordinate as the API's `lat,lng` pair.
pub(crate) fn format_coord(coord: Coord<f64>) -> String {
    format!("{},{}", coord.y, coord.x)
}

/// Whether a failed call is worth repeating.
///
/// Extends [`ServiceError::is_retryable`] with the provider's own transient
/// status codes, which arrive inside successful HTTP responses.
fn should_retry(error: &ServiceError) -> bool {
    match error {
        ServiceError::Service { code, .. } => is_retryable_status(code),
        _ => error.is_retryable(),
    }
}

fn is_retryable_status(code: &str) -> bool {
    matches!(code, "OVER_QUERY_LIMIT" | "UNKNOWN_ERROR")
}

pub(crate) fn service_error<T: StatusReport>(payload: &T) -> ServiceError {
    ServiceError::Service {
        code: payload.status_code().to_owned(),
        message: payload.error_message().unwrap_or_default().to_owned(),
    }
}

/// Unpack a geocoding payload into an optional coordinate.
fn convert_geocode(response: GeocodeResponse) -> Result<Option<Coord<f64>>, ServiceError> {
    if response.is_empty() {
        return Ok(None);
    }
    if !response.is_ok() {
        return Err(service_error(&response));
    }
    response
        .results
        .first()
        .map(|result| Some(result.geometry.location.to_coord()))
        .ok_or_else(|| ServiceError::Parse {
            message: "geocode response reported OK with no results".to_owned(),
        })
}

/// Unpack a single-pair directions payload into an optional leg measure.
fn convert_leg(response: DirectionsResponse) -> Result<Option<LegMeasure>, ServiceError> {
    if response.is_empty() {
        return Ok(None);
    }
    if !response.is_ok() {
        return Err(service_error(&response));
    }
    let route = response.routes.first().ok_or_else(|| ServiceError::Parse {
        message: "directions response reported OK with no routes".to_owned(),
    })?;
    let first = route.legs.first().ok_or_else(|| ServiceError::Parse {
        message: "directions route has no legs".to_owned(),
    })?;
    let meters = route.legs.iter().map(|leg| leg.distance.value).sum();
    Ok(Some(LegMeasure::new(meters, first.distance.text.clone())))
}

/// Unpack an optimized-loop directions payload into provider-ordered legs.
fn convert_optimized(
    response: DirectionsResponse,
) -> Result<Option<Vec<RoutedLeg>>, ServiceError> {
    if response.is_empty() {
        return Ok(None);
    }
    if !response.is_ok() {
        return Err(service_error(&response));
    }
    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| ServiceError::Parse {
            message: "directions response reported OK with no routes".to_owned(),
        })?;
    if route.legs.is_empty() {
        return Err(ServiceError::Parse {
            message: "optimized route has no legs".to_owned(),
        });
    }
    let legs = route
        .legs
        .into_iter()
        .map(|leg| RoutedLeg {
            end_location: leg.end_location.to_coord(),
            end_address: leg.end_address,
            measure: LegMeasure::new(leg.distance.value, leg.distance.text),
        })
        .collect();
    Ok(Some(legs))
}

impl Geocoder for MapsClient {
    fn resolve(&self, address: &str) -> Result<Option<Coord<f64>>, ServiceError> {
        let url = self.build_url(GEOCODE_PATH, &[("address", address)])?;
        let response: GeocodeResponse = self.block_on(self.get_json_with_retry(&url))?;
        convert_geocode(response)
    }
}

impl DistanceOracle for MapsClient {
    fn leg_distance(
        &self,
        from: Coord<f64>,
        to: Coord<f64>,
    ) -> Result<Option<LegMeasure>, ServiceError> {
        let origin = format_coord(from);
        let destination = format_coord(to);
        let url = self.build_url(
            DIRECTIONS_PATH,
            &[
                ("origin", origin.as_str()),
                ("destination", destination.as_str()),
                ("mode", "driving"),
            ],
        )?;
        let response: DirectionsResponse = self.block_on(self.get_json_with_retry(&url))?;
        convert_leg(response)
    }
}

impl WaypointOptimizer for MapsClient {
    fn optimized_route(
        &self,
        origin: &str,
        stops: &[String],
    ) -> Result<Option<Vec<RoutedLeg>>, ServiceError> {
        let waypoints = format!("optimize:true|{}", stops.join("|"));
        let url = self.build_url(
            DIRECTIONS_PATH,
            &[
                ("origin", origin),
                ("destination", origin),
                ("waypoints", waypoints.as_str()),
                ("mode", "driving"),
            ],
        )?;
        let response: DirectionsResponse = self.block_on(self.get_json_with_retry(&url))?;
        convert_optimized(response)
    }
}
