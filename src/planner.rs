//! Greedy route planner for a batch of ready orders.
//!
//! Seeds one route per rider with the first orders, then appends every
//! remaining order to the open route whose last stop is nearest. This is a
//! nearest-neighbour heuristic, not an optimiser: O(orders * riders).

use tracing::{debug, instrument};

use crate::error::PlanError;
use crate::haversine::{TravelModel, haversine_km, path_distance_km, round_km};
use crate::traits::Deliverable;

#[derive(Debug, Clone, PartialEq)]
pub struct Route<OrderId> {
    /// 1-based rider slot, not yet bound to a real rider.
    pub rider_slot: usize,
    /// Orders in visiting order; position + 1 is the delivery sequence.
    pub order_ids: Vec<OrderId>,
    pub total_distance_km: f64,
    pub estimated_minutes: u32,
}

impl<OrderId> Route<OrderId> {
    pub fn len(&self) -> usize {
        self.order_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order_ids.is_empty()
    }
}

#[derive(Debug)]
struct RouteState<'a, D: Deliverable> {
    stops: Vec<&'a D>,
}

impl<D: Deliverable> RouteState<'_, D> {
    fn locations(&self) -> Vec<(f64, f64)> {
        self.stops.iter().map(|stop| stop.location()).collect()
    }
}

/// Default per-rider capacity: orders spread as evenly as possible.
pub fn default_capacity(order_count: usize, num_riders: usize) -> usize {
    order_count.div_ceil(num_riders)
}

/// Partition `orders` into at most `num_riders` routes.
///
/// `orders` must already be filtered to ready orders with coordinates; input
/// order drives both seeding and assignment, so the result is deterministic.
#[instrument(skip_all, fields(orders = orders.len(), num_riders = num_riders))]
pub fn plan<'a, D>(
    orders: &'a [D],
    num_riders: usize,
    max_orders_per_rider: Option<usize>,
    travel: &TravelModel,
) -> Result<Vec<Route<D::Id>>, PlanError>
where
    D: Deliverable,
{
    if orders.is_empty() {
        return Err(PlanError::NoEligibleOrders);
    }
    if num_riders == 0 {
        return Err(PlanError::InvalidCapacity(
            "num_riders must be at least 1".to_string(),
        ));
    }
    let capacity = match max_orders_per_rider {
        Some(0) => {
            return Err(PlanError::InvalidCapacity(
                "max_orders_per_rider must be at least 1".to_string(),
            ));
        }
        Some(capacity) => capacity,
        None => default_capacity(orders.len(), num_riders),
    };

    // Rider slots beyond the order count would stay empty, so they are never
    // created.
    let seeded = num_riders.min(orders.len());
    let mut routes: Vec<RouteState<'a, D>> = orders[..seeded]
        .iter()
        .map(|order| RouteState { stops: vec![order] })
        .collect();

    for order in &orders[seeded..] {
        let route_index = nearest_open_route(&routes, order, capacity).ok_or_else(|| {
            PlanError::CapacityExceeded {
                orders: orders.len(),
                capacity: capacity.saturating_mul(seeded),
            }
        })?;
        routes[route_index].stops.push(order);
    }

    let routes: Vec<Route<D::Id>> = routes
        .into_iter()
        .enumerate()
        .filter(|(_, route)| !route.stops.is_empty())
        .map(|(index, route)| {
            let total_distance_km = round_km(path_distance_km(&route.locations()));
            Route {
                rider_slot: index + 1,
                order_ids: route.stops.iter().map(|stop| stop.id().clone()).collect(),
                total_distance_km,
                estimated_minutes: travel.estimate_minutes(total_distance_km, route.stops.len()),
            }
        })
        .collect();

    debug!(routes = routes.len(), capacity, "planned routes");
    Ok(routes)
}

/// Open route whose last stop is closest to `order`; ties go to the lowest
/// index and an empty route wins outright.
fn nearest_open_route<D: Deliverable>(
    routes: &[RouteState<'_, D>],
    order: &D,
    capacity: usize,
) -> Option<usize> {
    let mut best_route: Option<usize> = None;
    let mut best_distance = f64::INFINITY;

    for (route_index, route) in routes.iter().enumerate() {
        if route.stops.len() >= capacity {
            continue;
        }

        let Some(last) = route.stops.last() else {
            return Some(route_index);
        };

        let distance = haversine_km(last.location(), order.location());
        if best_route.is_none() || distance < best_distance {
            best_distance = distance;
            best_route = Some(route_index);
        }
    }

    best_route
}
