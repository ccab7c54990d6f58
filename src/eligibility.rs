//! Caller-side filtering of requested orders down to the planner's input.
//!
//! Two distinct empty outcomes are reported: nothing requested is ready, or
//! ready orders exist but none has delivery coordinates.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::PlanError;
use crate::order::{DeliverableOrder, OrderRecord, OrderStatus};

/// Ready records matching `requested_ids`, in request order, duplicates and
/// unknown ids dropped.
pub fn resolve_requested<'a>(
    requested_ids: &[String],
    ready: &'a [OrderRecord],
) -> Vec<&'a OrderRecord> {
    let by_id: HashMap<&str, &OrderRecord> = ready
        .iter()
        .filter(|order| order.status == OrderStatus::Ready)
        .map(|order| (order.id.as_str(), order))
        .collect();

    let mut seen = HashSet::new();
    requested_ids
        .iter()
        .filter(|id| seen.insert(id.as_str()))
        .filter_map(|id| by_id.get(id.as_str()).copied())
        .collect()
}

/// Reduce resolved ready orders to those the planner can route.
pub fn select_deliverable(ready: &[&OrderRecord]) -> Result<Vec<DeliverableOrder>, PlanError> {
    if ready.is_empty() {
        return Err(PlanError::NoReadyOrders);
    }

    let deliverable: Vec<DeliverableOrder> = ready
        .iter()
        .filter_map(|order| {
            order
                .delivery_location()
                .map(|(lat, lng)| DeliverableOrder::new(order.id.clone(), lat, lng))
        })
        .collect();

    if deliverable.is_empty() {
        return Err(PlanError::NoLocatedOrders);
    }

    debug!(
        ready = ready.len(),
        located = deliverable.len(),
        "selected deliverable orders"
    );
    Ok(deliverable)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(id: &str) -> OrderRecord {
        OrderRecord::new(id, "rest-1").with_status(OrderStatus::Ready)
    }

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn resolve_keeps_request_order_and_drops_duplicates() {
        let records = vec![ready("a"), ready("b"), ready("c")];
        let resolved = resolve_requested(&ids(&["c", "a", "c", "zzz"]), &records);
        let resolved: Vec<&str> = resolved.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(resolved, vec!["c", "a"]);
    }

    #[test]
    fn resolve_ignores_orders_not_ready() {
        let records = vec![ready("a"), ready("b").with_status(OrderStatus::Delivered)];
        let resolved = resolve_requested(&ids(&["a", "b"]), &records);
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn empty_ready_set_is_no_ready_orders() {
        assert_eq!(select_deliverable(&[]), Err(PlanError::NoReadyOrders));
    }

    #[test]
    fn unlocated_ready_set_is_no_located_orders() {
        let a = ready("a");
        let b = ready("b");
        assert_eq!(select_deliverable(&[&a, &b]), Err(PlanError::NoLocatedOrders));
    }

    #[test]
    fn partially_located_orders_keep_only_located() {
        let a = ready("a").with_location(19.076, 72.8777);
        let mut b = ready("b").with_location(19.1, 72.9);
        b.delivery_latitude = None;
        let c = ready("c").with_location(19.1176, 72.906);

        let selected = select_deliverable(&[&a, &b, &c]).unwrap();
        assert_eq!(
            selected,
            vec![
                DeliverableOrder::new("a", 19.076, 72.8777),
                DeliverableOrder::new("c", 19.1176, 72.906),
            ]
        );
    }
}
