//! Derived rider reads: who is busy, and what a rider delivers next.
//!
//! A rider is busy while any order assigned to them is `out-for-delivery`.
//! Neither the planner nor the dispatcher enforces this.

use std::collections::HashSet;

use crate::order::{OrderRecord, OrderStatus, Rider, RiderAvailability};

/// Tag every rider with a busy flag derived from active deliveries.
pub fn rider_availability(riders: &[Rider], active: &[OrderRecord]) -> Vec<RiderAvailability> {
    let busy: HashSet<&str> = active
        .iter()
        .filter(|order| order.status == OrderStatus::OutForDelivery)
        .filter_map(|order| order.rider_id.as_deref())
        .collect();

    riders
        .iter()
        .filter(|rider| rider.is_rider())
        .map(|rider| RiderAvailability {
            id: rider.id.clone(),
            name: rider.name.clone(),
            busy: busy.contains(rider.id.as_str()),
        })
        .collect()
}

/// Riders free to take a new route.
pub fn available_riders(riders: &[Rider], active: &[OrderRecord]) -> Vec<RiderAvailability> {
    rider_availability(riders, active)
        .into_iter()
        .filter(|rider| !rider.busy)
        .collect()
}

/// A rider's undelivered orders, by delivery sequence. Orders without a
/// sequence sort first, then ties keep their existing order.
pub fn delivery_queue<'a>(orders: &'a [OrderRecord], rider_id: &str) -> Vec<&'a OrderRecord> {
    let mut queue: Vec<&OrderRecord> = orders
        .iter()
        .filter(|order| order.rider_id.as_deref() == Some(rider_id))
        .filter(|order| {
            !matches!(order.status, OrderStatus::Delivered | OrderStatus::Cancelled)
        })
        .collect();
    queue.sort_by_key(|order| order.delivery_sequence.unwrap_or(0));
    queue
}
