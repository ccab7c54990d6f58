//! Error taxonomy for planning, dispatch, the store seam and configuration.

use thiserror::Error;

/// Errors from [`crate::planner::plan`] and the caller-side eligibility filter.
///
/// All of these are fatal to the planning call; a partial plan is never
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The planner was handed an empty order list.
    #[error("no eligible orders to plan")]
    NoEligibleOrders,

    /// None of the requested orders is in status `ready`.
    #[error("No ready orders found")]
    NoReadyOrders,

    /// Ready orders exist but none carries both delivery coordinates.
    #[error("No orders with valid delivery locations")]
    NoLocatedOrders,

    /// `num_riders` or `max_orders_per_rider` was zero.
    #[error("invalid capacity: {0}")]
    InvalidCapacity(String),

    /// Every route is full while orders remain.
    #[error("capacity exceeded: {orders} orders cannot fit in {capacity} route slots")]
    CapacityExceeded { orders: usize, capacity: usize },

    /// Reading orders from the store failed.
    #[error("order lookup failed: {0}")]
    Store(#[from] StoreError),
}

impl PlanError {
    /// HTTP status the vendor endpoint reports for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            PlanError::NoReadyOrders => 404,
            PlanError::NoEligibleOrders
            | PlanError::NoLocatedOrders
            | PlanError::InvalidCapacity(_) => 400,
            PlanError::CapacityExceeded { .. } => 422,
            PlanError::Store(_) => 503,
        }
    }
}

/// Failures reported by collaborator implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("document not found: {0}")]
    NotFound(String),

    /// The storage client gave up waiting for the write.
    #[error("operation timed out")]
    Timeout,

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// A non-fatal problem recorded while dispatching a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchFailure {
    /// The rider does not exist or lacks the rider role; the whole assignment
    /// was skipped.
    #[error("Rider {0} not found")]
    RiderNotFound(String),

    /// The rider lookup itself failed; the whole assignment was skipped.
    #[error("Rider {rider_id} lookup failed: {source}")]
    RiderLookup {
        rider_id: String,
        #[source]
        source: StoreError,
    },

    /// Committing one order failed; other orders were still processed.
    #[error("Failed to assign order {order_id}: {source}")]
    WriteFailure {
        order_id: String,
        #[source]
        source: StoreError,
    },
}

/// Configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed routing config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid routing config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_errors_map_to_client_errors() {
        assert_eq!(PlanError::NoReadyOrders.status_code(), 404);
        assert_eq!(PlanError::NoLocatedOrders.status_code(), 400);
        assert_eq!(PlanError::InvalidCapacity("num_riders".into()).status_code(), 400);
        assert_eq!(
            PlanError::CapacityExceeded { orders: 5, capacity: 4 }.status_code(),
            422
        );
    }

    #[test]
    fn dispatch_failures_name_the_subject() {
        let missing = DispatchFailure::RiderNotFound("R9".into());
        assert_eq!(missing.to_string(), "Rider R9 not found");

        let write = DispatchFailure::WriteFailure {
            order_id: "O2".into(),
            source: StoreError::Timeout,
        };
        assert_eq!(write.to_string(), "Failed to assign order O2: operation timed out");
    }
}
