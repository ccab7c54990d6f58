//! Test fixtures for delivery-routing.
//!
//! Provides real Mumbai locations plus builders for deliverable orders,
//! stored order records and a seeded in-memory store.
#![allow(dead_code)]

pub mod mumbai_locations;

pub use mumbai_locations::*;

use delivery_routing::memory::MemoryStore;
use delivery_routing::order::{DeliverableOrder, OrderRecord, OrderStatus, Rider};

pub const RESTAURANT: &str = "rest-bandra";

pub fn deliverable(id: &str, location: &Location) -> DeliverableOrder {
    DeliverableOrder::new(id, location.lat, location.lng)
}

/// One deliverable order per location, ids `O1..On`.
pub fn deliverables(locations: &[Location]) -> Vec<DeliverableOrder> {
    locations
        .iter()
        .enumerate()
        .map(|(i, location)| deliverable(&format!("O{}", i + 1), location))
        .collect()
}

pub fn ready_order(id: &str, location: &Location) -> OrderRecord {
    OrderRecord::new(id, RESTAURANT)
        .with_status(OrderStatus::Ready)
        .with_location(location.lat, location.lng)
        .with_address(location.name)
        .with_customer(format!("Customer {id}"))
}

/// Store holding ready orders `O1..On` at the given locations and riders
/// with the given ids.
pub fn seeded_store(locations: &[Location], rider_ids: &[&str]) -> MemoryStore {
    let store = MemoryStore::new();
    for (i, location) in locations.iter().enumerate() {
        store
            .insert_order(ready_order(&format!("O{}", i + 1), location))
            .expect("insert order");
    }
    for rider_id in rider_ids {
        store
            .insert_rider(Rider::new(*rider_id, format!("Rider {rider_id}")))
            .expect("insert rider");
    }
    store
}

pub fn ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}
