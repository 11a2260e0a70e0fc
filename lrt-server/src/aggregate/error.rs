//! Aggregation error types.

use crate::domain::{RouteNumber, StationId};

/// Errors from multi-station aggregation.
///
/// Individual station failures inside a batch are swallowed (logged and
/// reported in the outcome's failed list); these variants cover the cases
/// where the aggregate call as a whole cannot produce anything.
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    /// Every station in the batch failed.
    #[error("all {} station fetches failed", failed.len())]
    AllFetchesFailed { failed: Vec<StationId> },

    /// Requested route number is not in the catalog.
    #[error("unknown route number: {0}")]
    UnknownRoute(RouteNumber),
}
