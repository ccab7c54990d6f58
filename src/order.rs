//! Order, rider and status records shared by the planner, dispatcher and api.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::traits::Deliverable;

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Placed,
    Confirmed,
    Preparing,
    Ready,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order document as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: String,
    pub restaurant_id: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub delivery_address: String,
    #[serde(default)]
    pub delivery_latitude: Option<f64>,
    #[serde(default)]
    pub delivery_longitude: Option<f64>,
    pub status: OrderStatus,
    #[serde(default)]
    pub rider_id: Option<String>,
    #[serde(default)]
    pub delivery_sequence: Option<u32>,
}

impl OrderRecord {
    /// A new `placed` order with no location or rider.
    pub fn new(id: impl Into<String>, restaurant_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            restaurant_id: restaurant_id.into(),
            customer_name: String::new(),
            delivery_address: String::new(),
            delivery_latitude: None,
            delivery_longitude: None,
            status: OrderStatus::Placed,
            rider_id: None,
            delivery_sequence: None,
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_location(mut self, lat: f64, lng: f64) -> Self {
        self.delivery_latitude = Some(lat);
        self.delivery_longitude = Some(lng);
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.delivery_address = address.into();
        self
    }

    pub fn with_customer(mut self, name: impl Into<String>) -> Self {
        self.customer_name = name.into();
        self
    }

    /// Delivery coordinates, only when both latitude and longitude are set.
    pub fn delivery_location(&self) -> Option<(f64, f64)> {
        match (self.delivery_latitude, self.delivery_longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }

    /// Apply a committed dispatch: rider, status and sequence together.
    pub(crate) fn assign(&mut self, rider_id: &str, sequence: u32) {
        self.rider_id = Some(rider_id.to_string());
        self.status = OrderStatus::OutForDelivery;
        self.delivery_sequence = Some(sequence);
    }
}

/// A ready order with known coordinates, as fed to the planner.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliverableOrder {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl DeliverableOrder {
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
        }
    }
}

impl Deliverable for DeliverableOrder {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Vendor,
    Rider,
    Admin,
}

/// A user account that may deliver orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rider {
    pub id: String,
    pub name: String,
    pub role: Role,
}

impl Rider {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: Role::Rider,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn is_rider(&self) -> bool {
        self.role == Role::Rider
    }
}

/// Rider plus the derived busy flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiderAvailability {
    pub id: String,
    pub name: String,
    pub busy: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&OrderStatus::OutForDelivery).unwrap();
        assert_eq!(json, "\"out-for-delivery\"");
        let status: OrderStatus = serde_json::from_str("\"ready\"").unwrap();
        assert_eq!(status, OrderStatus::Ready);
    }

    #[test]
    fn location_requires_both_coordinates() {
        let mut order = OrderRecord::new("o1", "r1").with_location(19.07, 72.87);
        assert_eq!(order.delivery_location(), Some((19.07, 72.87)));
        order.delivery_longitude = None;
        assert_eq!(order.delivery_location(), None);
    }

    #[test]
    fn assign_sets_all_three_fields() {
        let mut order = OrderRecord::new("o1", "r1")
            .with_status(OrderStatus::Ready)
            .with_address("Hill Road, Bandra");
        order.assign("rider-1", 2);
        assert_eq!(order.rider_id.as_deref(), Some("rider-1"));
        assert_eq!(order.status, OrderStatus::OutForDelivery);
        assert_eq!(order.delivery_sequence, Some(2));
        assert_eq!(order.delivery_address, "Hill Road, Bandra");
    }

    #[test]
    fn record_deserializes_with_missing_optionals() {
        let json = r#"{"id":"o9","restaurant_id":"r1","status":"ready"}"#;
        let order: OrderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Ready);
        assert!(order.delivery_location().is_none());
        assert!(order.rider_id.is_none());
    }
}
