use thiserror::Error;

/// Errors from [`crate::DirectionsProvider::fetch_routes`] and
/// [`crate::RouteComputer::compute_routes`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The directions provider could not be reached.
    ///
    /// Covers connection failures and timeouts. The request is not retried;
    /// retry policy belongs to the caller.
    #[error("directions provider unavailable at {url}: {message}")]
    ProviderUnavailable {
        /// Request URL, without credentials.
        url: String,
        /// Transport error detail.
        message: String,
    },
    /// The provider answered with a failure status.
    #[error("directions provider returned status {status}: {message}")]
    ProviderError {
        /// HTTP status code reported by the provider.
        status: u16,
        /// Provider-supplied error message.
        message: String,
    },
    /// The provider answered successfully but offered no route.
    #[error("no route found between the requested points")]
    NoRouteFound,
    /// The provider response could not be interpreted.
    #[error("malformed directions response: {message}")]
    MalformedResponse {
        /// Description of the decoding failure.
        message: String,
    },
}

impl RouteError {
    /// Whether the failure means the destination is unreachable rather than
    /// the provider being broken.
    #[must_use]
    pub const fn is_unreachable(&self) -> bool {
        matches!(self, Self::NoRouteFound)
    }
}
