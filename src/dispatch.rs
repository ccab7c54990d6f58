//! Batch dispatcher: binds riders to planned routes in the order store.
//!
//! Each order is committed on its own; a failed write or an unknown rider is
//! recorded and the batch carries on. Nothing is rolled back, and re-running
//! the same batch rewrites the same values.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::error::{DispatchFailure, StoreError};
use crate::traits::{AssignmentWriter, RiderDirectory};

/// One rider bound to an ordered list of orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub rider_id: String,
    /// Visiting order; position + 1 becomes the delivery sequence.
    pub order_ids: Vec<String>,
}

impl Assignment {
    pub fn new<I, S>(rider_id: impl Into<String>, order_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rider_id: rider_id.into(),
            order_ids: order_ids.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchOptions {
    /// Fan an assignment's order writes out across the rayon pool.
    pub parallel_writes: bool,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            parallel_writes: true,
        }
    }
}

/// Outcome of a batch: successful commits plus every recorded failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub assigned_count: usize,
    pub errors: Vec<DispatchFailure>,
}

impl DispatchReport {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

#[instrument(skip_all, fields(assignments = assignments.len()))]
pub fn dispatch<R, W>(
    assignments: &[Assignment],
    riders: &R,
    writer: &W,
    options: &DispatchOptions,
) -> DispatchReport
where
    R: RiderDirectory,
    W: AssignmentWriter,
{
    let mut report = DispatchReport::default();

    for assignment in assignments {
        let rider_id = assignment.rider_id.as_str();

        match riders.find_rider(rider_id) {
            Ok(Some(rider)) if rider.is_rider() => {}
            Ok(_) => {
                warn!(rider_id, "rider not found, skipping assignment");
                report
                    .errors
                    .push(DispatchFailure::RiderNotFound(rider_id.to_string()));
                continue;
            }
            Err(source) => {
                warn!(rider_id, error = %source, "rider lookup failed, skipping assignment");
                report.errors.push(DispatchFailure::RiderLookup {
                    rider_id: rider_id.to_string(),
                    source,
                });
                continue;
            }
        }

        debug!(rider_id, orders = assignment.order_ids.len(), "committing assignment");

        let results = commit_assignment(assignment, writer, options);
        for (order_id, result) in assignment.order_ids.iter().zip(results) {
            match result {
                Ok(()) => report.assigned_count += 1,
                Err(source) => {
                    warn!(rider_id, order_id = %order_id, error = %source, "order write failed");
                    report.errors.push(DispatchFailure::WriteFailure {
                        order_id: order_id.clone(),
                        source,
                    });
                }
            }
        }
    }

    info!(
        assigned = report.assigned_count,
        failures = report.errors.len(),
        "dispatch finished"
    );
    report
}

/// Write every order of an accepted assignment. Results line up with
/// `assignment.order_ids`.
fn commit_assignment<W: AssignmentWriter>(
    assignment: &Assignment,
    writer: &W,
    options: &DispatchOptions,
) -> Vec<Result<(), StoreError>> {
    let commit = |(position, order_id): (usize, &String)| -> Result<(), StoreError> {
        let sequence = u32::try_from(position + 1)
            .map_err(|_| StoreError::Backend(format!("sequence overflow at position {position}")))?;
        writer.commit_order_assignment(order_id, &assignment.rider_id, sequence)
    };

    if options.parallel_writes {
        assignment.order_ids.par_iter().enumerate().map(commit).collect()
    } else {
        assignment.order_ids.iter().enumerate().map(commit).collect()
    }
}
