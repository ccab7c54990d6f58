//! In-memory document store implementing every collaborator trait.
//!
//! Holds orders and riders behind mutexes. Each assignment write is applied
//! under one lock acquisition, so rider, status and sequence always land
//! together. Writes can be made to fail per order, rider lookups per rider,
//! and order reads as a whole, to exercise partial dispatch and store
//! outages.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use tracing::trace;

use crate::error::StoreError;
use crate::order::{OrderRecord, OrderStatus, Rider};
use crate::traits::{AssignmentWriter, OrderSource, RiderDirectory};

#[derive(Debug, Default)]
pub struct MemoryStore {
    orders: Mutex<Vec<OrderRecord>>,
    riders: Mutex<HashMap<String, Rider>>,
    failing_writes: Mutex<HashMap<String, StoreError>>,
    failing_lookups: Mutex<HashMap<String, StoreError>>,
    failing_reads: Mutex<Option<StoreError>>,
    writes: Mutex<usize>,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StoreError> {
    mutex
        .lock()
        .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an order, keeping insertion order for new ids.
    pub fn insert_order(&self, order: OrderRecord) -> Result<(), StoreError> {
        let mut orders = lock(&self.orders)?;
        match orders.iter_mut().find(|existing| existing.id == order.id) {
            Some(existing) => *existing = order,
            None => orders.push(order),
        }
        Ok(())
    }

    pub fn insert_rider(&self, rider: Rider) -> Result<(), StoreError> {
        lock(&self.riders)?.insert(rider.id.clone(), rider);
        Ok(())
    }

    pub fn order(&self, order_id: &str) -> Result<Option<OrderRecord>, StoreError> {
        Ok(lock(&self.orders)?
            .iter()
            .find(|order| order.id == order_id)
            .cloned())
    }

    pub fn orders(&self) -> Result<Vec<OrderRecord>, StoreError> {
        Ok(lock(&self.orders)?.clone())
    }

    /// Make every future write to `order_id` fail with `error`.
    pub fn fail_writes_for(&self, order_id: impl Into<String>, error: StoreError) -> Result<(), StoreError> {
        lock(&self.failing_writes)?.insert(order_id.into(), error);
        Ok(())
    }

    /// Make every future lookup of `rider_id` fail with `error`.
    pub fn fail_lookups_for(&self, rider_id: impl Into<String>, error: StoreError) -> Result<(), StoreError> {
        lock(&self.failing_lookups)?.insert(rider_id.into(), error);
        Ok(())
    }

    /// Make every future order read fail with `error`.
    pub fn fail_reads(&self, error: StoreError) -> Result<(), StoreError> {
        *lock(&self.failing_reads)? = Some(error);
        Ok(())
    }

    fn check_reads(&self) -> Result<(), StoreError> {
        match lock(&self.failing_reads)?.as_ref() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    /// Number of successful assignment writes so far.
    pub fn write_count(&self) -> Result<usize, StoreError> {
        Ok(*lock(&self.writes)?)
    }
}

impl OrderSource for MemoryStore {
    fn fetch_ready_orders(&self, restaurant_ids: &[String]) -> Result<Vec<OrderRecord>, StoreError> {
        self.check_reads()?;
        let restaurants: HashSet<&str> = restaurant_ids.iter().map(String::as_str).collect();
        Ok(lock(&self.orders)?
            .iter()
            .filter(|order| order.status == OrderStatus::Ready)
            .filter(|order| restaurants.contains(order.restaurant_id.as_str()))
            .cloned()
            .collect())
    }

    fn fetch_active_deliveries(&self) -> Result<Vec<OrderRecord>, StoreError> {
        self.check_reads()?;
        Ok(lock(&self.orders)?
            .iter()
            .filter(|order| order.status == OrderStatus::OutForDelivery)
            .cloned()
            .collect())
    }
}

impl RiderDirectory for MemoryStore {
    fn find_rider(&self, rider_id: &str) -> Result<Option<Rider>, StoreError> {
        if let Some(error) = lock(&self.failing_lookups)?.get(rider_id) {
            return Err(error.clone());
        }
        Ok(lock(&self.riders)?.get(rider_id).cloned())
    }

    fn list_riders(&self) -> Result<Vec<Rider>, StoreError> {
        let mut riders: Vec<Rider> = lock(&self.riders)?
            .values()
            .filter(|rider| rider.is_rider())
            .cloned()
            .collect();
        riders.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(riders)
    }
}

impl AssignmentWriter for MemoryStore {
    fn commit_order_assignment(
        &self,
        order_id: &str,
        rider_id: &str,
        sequence: u32,
    ) -> Result<(), StoreError> {
        if let Some(error) = lock(&self.failing_writes)?.get(order_id) {
            return Err(error.clone());
        }

        {
            let mut orders = lock(&self.orders)?;
            let order = orders
                .iter_mut()
                .find(|order| order.id == order_id)
                .ok_or_else(|| StoreError::NotFound(order_id.to_string()))?;
            order.assign(rider_id, sequence);
        }

        *lock(&self.writes)? += 1;
        trace!(order_id, rider_id, sequence, "assignment written");
        Ok(())
    }
}
