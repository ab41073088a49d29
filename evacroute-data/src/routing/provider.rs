//! HTTP-backed [`DirectionsProvider`] using the Mapbox Directions API.
//!
//! This module provides [`HttpDirectionsProvider`], which issues one
//! `GET {base_url}/directions/v5/{profile}/{start};{end}` request per call
//! and converts the answer into provider-neutral [`RawRoute`] values.
//!
//! The access token travels only as a query parameter on the outgoing
//! request. URLs reported in errors and log records never carry it.
//!
//! # Example
//!
//! ```no_run
//! use evacroute_core::{Coordinate, RouteComputer, RouteOptions};
//! use evacroute_data::routing::{HttpDirectionsProvider, HttpDirectionsProviderConfig};
//! use std::time::Duration;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpDirectionsProviderConfig::from_env()?.with_timeout(Duration::from_secs(10));
//! let computer = RouteComputer::new(HttpDirectionsProvider::with_config(config)?);
//!
//! let start = Coordinate::new(-122.42, 37.77)?;
//! let end = Coordinate::new(-122.41, 37.78)?;
//! let routes = computer.compute_routes(start, end, &RouteOptions::default()).await?;
//! println!("{} min", routes[0].duration_minutes());
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use evacroute_core::{DirectionsProvider, DirectionsRequest, RawRoute, RouteError};
use log::debug;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use super::mapbox::{DirectionsResponse, ErrorBody};

/// Default Directions API host.
pub const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";

/// Default routing profile.
pub const DEFAULT_PROFILE: &str = "mapbox/driving-traffic";

/// Default user agent for directions requests.
pub const DEFAULT_USER_AGENT: &str = "evacroute/0.1";

/// Environment variable holding the access token.
pub const ACCESS_TOKEN_ENV: &str = "MAPBOX_ACCESS_TOKEN";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "EVACROUTE_DIRECTIONS_BASE_URL";

/// Environment variable overriding [`DEFAULT_PROFILE`].
pub const PROFILE_ENV: &str = "EVACROUTE_DIRECTIONS_PROFILE";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Overlay geometry annotations requested alongside each route.
const ANNOTATIONS: &str = "duration,distance,speed";

/// Errors raised while configuring or building an [`HttpDirectionsProvider`].
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// The base URL could not be used as a request prefix.
    #[error("invalid directions base URL {url:?}: {message}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        message: String,
    },
    /// No access token was configured.
    #[error("missing directions access token; set {ACCESS_TOKEN_ENV}")]
    MissingAccessToken,
}

/// Configuration for [`HttpDirectionsProvider`].
///
/// `Debug` output redacts the access token.
#[derive(Clone)]
pub struct HttpDirectionsProviderConfig {
    /// Service host, e.g. `"https://api.mapbox.com"`.
    pub base_url: String,
    /// Routing profile path, e.g. `"mapbox/walking"`.
    pub profile: String,
    /// Access token appended to each request.
    pub access_token: String,
    /// Connect and request timeout.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl fmt::Debug for HttpDirectionsProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpDirectionsProviderConfig")
            .field("base_url", &self.base_url)
            .field("profile", &self.profile)
            .field("access_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl HttpDirectionsProviderConfig {
    /// Create a configuration with default host, profile and timeout.
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            profile: DEFAULT_PROFILE.to_owned(),
            access_token: access_token.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Read the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderBuildError::MissingAccessToken`] when
    /// [`ACCESS_TOKEN_ENV`] is unset or blank.
    pub fn from_env() -> Result<Self, ProviderBuildError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Uses the same keys as [`Self::from_env`]. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderBuildError::MissingAccessToken`] when no token is
    /// found.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ProviderBuildError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|found| !found.trim().is_empty());
        let token = value(ACCESS_TOKEN_ENV).ok_or(ProviderBuildError::MissingAccessToken)?;
        let mut config = Self::new(token);
        if let Some(base_url) = value(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        if let Some(profile) = value(PROFILE_ENV) {
            config.profile = profile;
        }
        Ok(config)
    }

    /// Set the service host.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the routing profile.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Directions provider backed by a Mapbox-compatible HTTP service.
///
/// Each call issues exactly one request; failures are reported, never
/// retried.
pub struct HttpDirectionsProvider {
    client: Client,
    config: HttpDirectionsProviderConfig,
    base_url: Url,
}

impl fmt::Debug for HttpDirectionsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpDirectionsProvider")
            .field("client", &self.client)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HttpDirectionsProvider {
    /// Create a provider with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is blank or the HTTP client fails to
    /// build.
    pub fn new(access_token: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpDirectionsProviderConfig::new(access_token))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is blank, the base URL cannot carry a
    /// path, or the HTTP client fails to build.
    pub fn with_config(config: HttpDirectionsProviderConfig) -> Result<Self, ProviderBuildError> {
        if config.access_token.trim().is_empty() {
            return Err(ProviderBuildError::MissingAccessToken);
        }
        let base_url = parse_base_url(&config.base_url)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// Create a provider configured from the process environment.
    ///
    /// # Errors
    ///
    /// See [`HttpDirectionsProviderConfig::from_env`] and
    /// [`Self::with_config`].
    pub fn from_env() -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpDirectionsProviderConfig::from_env()?)
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &HttpDirectionsProviderConfig {
        &self.config
    }

    /// Build the request URL for `request`, without the access token.
    ///
    /// The path has the form
    /// `{base_url}/directions/v5/{profile}/{lon,lat};{lon,lat}`.
    fn build_directions_url(&self, request: &DirectionsRequest) -> Url {
        let mut url = self.base_url.clone();
        let path = format!(
            "{}/directions/v5/{}/{};{}",
            url.path().trim_end_matches('/'),
            self.config.profile.trim_matches('/'),
            request.start,
            request.end
        );
        url.set_path(&path);
        let options = request.options;
        url.query_pairs_mut()
            .clear()
            .append_pair("alternatives", bool_param(options.alternatives))
            .append_pair("steps", bool_param(options.include_steps))
            .append_pair("geometries", "geojson")
            .append_pair("overview", options.overview.as_str())
            .append_pair("annotations", ANNOTATIONS);
        url
    }

    /// Convert a transport-level reqwest error to a `RouteError`.
    fn convert_reqwest_error(&self, error: reqwest::Error, url: &Url) -> RouteError {
        let message = if error.is_timeout() {
            format!("request timed out after {:?}", self.config.timeout)
        } else {
            error.without_url().to_string()
        };
        RouteError::ProviderUnavailable {
            url: url.to_string(),
            message,
        }
    }
}

#[async_trait]
impl DirectionsProvider for HttpDirectionsProvider {
    async fn fetch_routes(&self, request: &DirectionsRequest) -> Result<Vec<RawRoute>, RouteError> {
        let url = self.build_directions_url(request);
        debug!("requesting directions from {url}");

        let response = self
            .client
            .get(url.clone())
            .query(&[("access_token", self.config.access_token.as_str())])
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(err, &url))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| self.convert_reqwest_error(err, &url))?;
        debug!("directions service answered {status} ({} bytes)", body.len());

        convert_response(status, &body)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ProviderBuildError> {
    let invalid = |message: String| ProviderBuildError::InvalidBaseUrl {
        url: raw.to_owned(),
        message,
    };
    let url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot carry a path".to_owned()));
    }
    Ok(url)
}

const fn bool_param(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Interpret a Directions API answer.
///
/// Unreachable endpoints yield an empty list; deciding what that means is
/// left to the caller.
fn convert_response(status: StatusCode, body: &str) -> Result<Vec<RawRoute>, RouteError> {
    if !status.is_success() {
        return Err(RouteError::ProviderError {
            status: status.as_u16(),
            message: error_message(body),
        });
    }

    let response: DirectionsResponse =
        serde_json::from_str(body).map_err(|err| RouteError::MalformedResponse {
            message: err.to_string(),
        })?;

    if response.is_no_route() {
        return Ok(Vec::new());
    }
    if !response.is_ok() {
        let message = response
            .message
            .map_or_else(|| response.code.clone(), |text| format!("{}: {text}", response.code));
        return Err(RouteError::ProviderError {
            status: status.as_u16(),
            message,
        });
    }

    response
        .routes
        .into_iter()
        .map(super::mapbox::DirectionsRoute::into_raw_route)
        .collect()
}

/// Prefer the service's JSON `message`; fall back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .unwrap_or_else(|| body.trim().to_owned())
}
