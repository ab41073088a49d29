use thiserror::Error;

/// Errors from [`crate::EvacuationSelector::nearest_to`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// None of the targets could be reached.
    ///
    /// `attempted` is zero when no targets were supplied.
    #[error("no reachable destination among {attempted} target(s)")]
    NotFound {
        /// Number of targets that were tried.
        attempted: usize,
    },
}
