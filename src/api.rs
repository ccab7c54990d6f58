//! Contract types and glue for the vendor routing endpoints.
//!
//! `POST /vendor/optimize-routes` maps to [`optimize_routes`] and
//! `POST /vendor/batch-assign-riders` maps to [`batch_assign_riders`]. The
//! HTTP framework itself lives outside this crate.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::dispatch::{Assignment, DispatchOptions, dispatch};
use crate::eligibility::{resolve_requested, select_deliverable};
use crate::error::{PlanError, StoreError};
use crate::haversine::TravelModel;
use crate::order::{OrderRecord, RiderAvailability};
use crate::planner::plan;
use crate::riders;
use crate::traits::{AssignmentWriter, OrderSource, RiderDirectory};

/// Body of `POST /vendor/optimize-routes`.
///
/// Both counts are unsigned, so a negative `num_riders` or
/// `max_orders_per_rider` fails deserialization before planning starts. Zero
/// parses but is rejected by the planner as [`PlanError::InvalidCapacity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRoutesRequest {
    pub order_ids: Vec<String>,
    pub num_riders: usize,
    #[serde(default)]
    pub max_orders_per_rider: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteView {
    /// 1-based; the planner's route index + 1.
    pub rider_index: usize,
    pub order_ids: Vec<String>,
    pub orders: Vec<OrderRecord>,
    pub total_distance_km: f64,
    pub estimated_duration_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRoutesResponse {
    pub routes: Vec<RouteView>,
    pub total_orders: usize,
    pub total_riders: usize,
}

/// Batch assignment body. Clients send either `{"routes": [...]}` or the bare
/// list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchAssignRequest {
    Routes { routes: Vec<Assignment> },
    Bare(Vec<Assignment>),
}

impl BatchAssignRequest {
    pub fn assignments(&self) -> &[Assignment] {
        match self {
            BatchAssignRequest::Routes { routes } => routes,
            BatchAssignRequest::Bare(routes) => routes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchAssignResponse {
    pub message: String,
    pub assigned_count: usize,
    /// `null` when every order was committed.
    pub errors: Option<Vec<String>>,
}

/// Plan routes for the requested orders of the vendor's restaurants.
#[instrument(skip_all, fields(requested = request.order_ids.len(), num_riders = request.num_riders))]
pub fn optimize_routes<S: OrderSource>(
    source: &S,
    restaurant_ids: &[String],
    request: &OptimizeRoutesRequest,
    travel: &TravelModel,
) -> Result<OptimizeRoutesResponse, PlanError> {
    let ready = source.fetch_ready_orders(restaurant_ids)?;
    let resolved = resolve_requested(&request.order_ids, &ready);
    let deliverable = select_deliverable(&resolved)?;

    let routes = plan(
        &deliverable,
        request.num_riders,
        request.max_orders_per_rider,
        travel,
    )?;

    let records: HashMap<&str, &OrderRecord> = resolved
        .iter()
        .map(|order| (order.id.as_str(), *order))
        .collect();

    let routes: Vec<RouteView> = routes
        .into_iter()
        .map(|route| RouteView {
            rider_index: route.rider_slot,
            orders: route
                .order_ids
                .iter()
                .filter_map(|id| records.get(id.as_str()).map(|order| (*order).clone()))
                .collect(),
            order_ids: route.order_ids,
            total_distance_km: route.total_distance_km,
            estimated_duration_minutes: route.estimated_minutes,
        })
        .collect();

    info!(routes = routes.len(), orders = deliverable.len(), "routes optimized");
    Ok(OptimizeRoutesResponse {
        total_orders: deliverable.len(),
        total_riders: routes.len(),
        routes,
    })
}

/// Commit rider assignments. Partial failures are reported, never raised.
#[instrument(skip_all)]
pub fn batch_assign_riders<R, W>(
    riders: &R,
    writer: &W,
    request: &BatchAssignRequest,
    options: &DispatchOptions,
) -> BatchAssignResponse
where
    R: RiderDirectory,
    W: AssignmentWriter,
{
    let assignments = request.assignments();
    let report = dispatch(assignments, riders, writer, options);

    let errors: Option<Vec<String>> = (!report.errors.is_empty())
        .then(|| report.errors.iter().map(ToString::to_string).collect());

    BatchAssignResponse {
        message: format!(
            "Assigned {} orders across {} routes",
            report.assigned_count,
            assignments.len()
        ),
        assigned_count: report.assigned_count,
        errors,
    }
}

/// Riders not currently out on a delivery.
pub fn available_riders<S, R>(source: &S, directory: &R) -> Result<Vec<RiderAvailability>, StoreError>
where
    S: OrderSource,
    R: RiderDirectory,
{
    let active = source.fetch_active_deliveries()?;
    let all = directory.list_riders()?;
    Ok(riders::available_riders(&all, &active))
}
