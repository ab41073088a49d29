//! Reporting seam for destinations dropped during ranking.

use std::sync::Arc;

use log::warn;

use super::DroppedDestination;

/// Receives a report for every target dropped by
/// [`crate::EvacuationSelector`].
///
/// Observers must not fail; the ranking continues regardless of what the
/// observer does with the report.
pub trait DropObserver: Send + Sync {
    /// Record that `dropped` was removed from a ranking.
    fn destination_dropped(&self, dropped: &DroppedDestination);
}

/// Default observer that emits a `warn!` record through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDropObserver;

impl DropObserver for LogDropObserver {
    fn destination_dropped(&self, dropped: &DroppedDestination) {
        warn!(
            "dropping evacuation target {:?} ({}): {}",
            dropped.name, dropped.category, dropped.error
        );
    }
}

impl<O> DropObserver for Arc<O>
where
    O: DropObserver + ?Sized,
{
    fn destination_dropped(&self, dropped: &DroppedDestination) {
        (**self).destination_dropped(dropped);
    }
}

impl<O> DropObserver for &O
where
    O: DropObserver + ?Sized,
{
    fn destination_dropped(&self, dropped: &DroppedDestination) {
        (**self).destination_dropped(dropped);
    }
}
