//! Core domain traits for route planning and dispatch.
//!
//! The planner only needs an id and a location per order. The dispatcher and
//! the api glue talk to the document store through the collaborator traits
//! below; concrete apps implement them over their own persistence layer.

use std::hash::Hash;

use crate::error::StoreError;
use crate::order::{OrderRecord, Rider};

/// Unique identifier for planner entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// An order that can be placed on a route.
pub trait Deliverable {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Delivery coordinates (lat, lng) in degrees.
    fn location(&self) -> (f64, f64);
}

/// Read access to order documents.
pub trait OrderSource: Send + Sync {
    /// Orders in status `ready` belonging to any of the given restaurants.
    fn fetch_ready_orders(&self, restaurant_ids: &[String]) -> Result<Vec<OrderRecord>, StoreError>;

    /// Orders currently `out-for-delivery`, used to derive busy riders.
    fn fetch_active_deliveries(&self) -> Result<Vec<OrderRecord>, StoreError>;
}

/// Lookup of user accounts that may carry the rider role.
pub trait RiderDirectory: Send + Sync {
    fn find_rider(&self, rider_id: &str) -> Result<Option<Rider>, StoreError>;

    /// Every account with the rider role.
    fn list_riders(&self) -> Result<Vec<Rider>, StoreError>;
}

/// Atomic per-order write used by the dispatcher.
///
/// Implementations must land `rider_id`, `status = out-for-delivery` and
/// `delivery_sequence` together or not at all.
pub trait AssignmentWriter: Send + Sync {
    fn commit_order_assignment(
        &self,
        order_id: &str,
        rider_id: &str,
        sequence: u32,
    ) -> Result<(), StoreError>;
}
