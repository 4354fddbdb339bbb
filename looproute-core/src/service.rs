use thiserror::Error;

/// Failure reported by an external mapping-service call.
///
/// These cover transport, auth, and quota problems. A "not found" geocode or
/// a "no route" answer is not an error; the boundary traits model those as
/// `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The request did not complete within the configured timeout.
    #[error("request to {endpoint} timed out after {timeout_secs}s")]
    Timeout {
        /// Endpoint with any query string stripped.
        endpoint: String,
        /// Timeout that elapsed, in seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("request to {endpoint} failed with HTTP {status}: {message}")]
    Http {
        /// Endpoint with any query string stripped.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Transport-level error description.
        message: String,
    },
    /// The request failed before an HTTP response arrived.
    #[error("request to {endpoint} failed: {message}")]
    Network {
        /// Endpoint with any query string stripped.
        endpoint: String,
        /// Transport-level error description.
        message: String,
    },
    /// The service answered but reported an application-level failure.
    #[error("service reported {code}: {message}")]
    Service {
        /// Provider status code, e.g. `REQUEST_DENIED`.
        code: String,
        /// Provider-supplied detail, possibly empty.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse service response: {message}")]
    Parse {
        /// Decoder error description.
        message: String,
    },
}

impl ServiceError {
    /// Whether retrying the same request may succeed.
    ///
    /// Timeouts, connection failures, and throttling-class HTTP statuses
    /// (429 and 5xx) are transient. Application-level rejections and
    /// malformed responses are not; retrying them only burns quota.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Network { .. } => true,
            Self::Http { status, .. } => *status == 429 || (500..600).contains(status),
            Self::Service { .. } | Self::Parse { .. } => false,
        }
    }
}
