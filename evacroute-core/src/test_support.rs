//! Deterministic test doubles for directions providers and drop observers.
//!
//! [`StubDirectionsProvider`] answers from a table keyed by destination and
//! records every request; [`RecordingDropObserver`] keeps every drop report.
//! Neither touches the network.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::{
    Coordinate, DirectionsProvider, DirectionsRequest, DropObserver, DroppedDestination, RawRoute,
    RouteError,
};

#[derive(Debug, Clone)]
enum StubResponse {
    Routes(Vec<RawRoute>),
    Error(RouteError),
}

/// Stub [`DirectionsProvider`] returning pre-configured answers per
/// destination.
///
/// Destinations without a configured answer fail with
/// [`RouteError::NoRouteFound`].
#[derive(Debug, Default)]
pub struct StubDirectionsProvider {
    responses: Vec<(Coordinate, StubResponse)>,
    requests: Mutex<Vec<DirectionsRequest>>,
}

impl StubDirectionsProvider {
    /// Create a provider with no configured answers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests ending at `end` with `routes`.
    #[must_use]
    pub fn with_routes(mut self, end: Coordinate, routes: Vec<RawRoute>) -> Self {
        self.responses.push((end, StubResponse::Routes(routes)));
        self
    }

    /// Answer requests ending at `end` with `error`.
    #[must_use]
    pub fn with_error(mut self, end: Coordinate, error: RouteError) -> Self {
        self.responses.push((end, StubResponse::Error(error)));
        self
    }

    /// Requests received so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<DirectionsRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests received so far.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn response_for(&self, end: Coordinate) -> Option<&StubResponse> {
        self.responses
            .iter()
            .rev()
            .find(|(destination, _)| *destination == end)
            .map(|(_, response)| response)
    }
}

#[async_trait]
impl DirectionsProvider for StubDirectionsProvider {
    async fn fetch_routes(&self, request: &DirectionsRequest) -> Result<Vec<RawRoute>, RouteError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*request);

        match self.response_for(request.end) {
            Some(StubResponse::Routes(routes)) => Ok(routes.clone()),
            Some(StubResponse::Error(error)) => Err(error.clone()),
            None => Err(RouteError::NoRouteFound),
        }
    }
}

/// [`DropObserver`] that keeps every report for later inspection.
#[derive(Debug, Default)]
pub struct RecordingDropObserver {
    dropped: Mutex<Vec<DroppedDestination>>,
}

impl RecordingDropObserver {
    /// Reports received so far, in arrival order.
    #[must_use]
    pub fn dropped(&self) -> Vec<DroppedDestination> {
        self.dropped
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DropObserver for RecordingDropObserver {
    fn destination_dropped(&self, dropped: &DroppedDestination) {
        self.dropped
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(dropped.clone());
    }
}
