//! delivery-routing core
//!
//! Greedy route planning for batches of ready orders and the batch
//! dispatcher that commits rider assignments back to the order store.

pub mod api;
pub mod config;
pub mod dispatch;
pub mod eligibility;
pub mod error;
pub mod haversine;
pub mod memory;
pub mod order;
pub mod planner;
pub mod riders;
pub mod traits;
