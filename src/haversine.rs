//! Great-circle distance helpers and the travel-time model.
//!
//! Distances are straight-line (haversine) estimates. Durations come from an
//! assumed average speed plus a fixed overhead per stop.

use serde::{Deserialize, Serialize};

/// Average riding speed assumption for time estimation.
const DEFAULT_SPEED_KMH: f64 = 30.0;

/// Handover time spent at each delivery stop.
const DEFAULT_MINUTES_PER_STOP: u32 = 5;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate haversine distance between two (lat, lng) points in kilometers.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Sum of consecutive leg distances along a path. Zero for fewer than two points.
pub fn path_distance_km(points: &[(f64, f64)]) -> f64 {
    points
        .windows(2)
        .map(|leg| haversine_km(leg[0], leg[1]))
        .sum()
}

/// Round a distance to two decimal places.
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

/// Speed-plus-overhead duration model for a delivery route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelModel {
    /// Assumed average riding speed in km/h.
    pub speed_kmh: f64,
    /// Fixed minutes added for every stop on the route.
    pub minutes_per_stop: u32,
}

impl Default for TravelModel {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
            minutes_per_stop: DEFAULT_MINUTES_PER_STOP,
        }
    }
}

impl TravelModel {
    pub fn new(speed_kmh: f64, minutes_per_stop: u32) -> Self {
        Self {
            speed_kmh,
            minutes_per_stop,
        }
    }

    /// Estimated whole minutes to ride `distance_km` and serve `stops` stops.
    pub fn estimate_minutes(&self, distance_km: f64, stops: usize) -> u32 {
        let riding = distance_km / self.speed_kmh * 60.0;
        let handover = f64::from(self.minutes_per_stop) * stops as f64;
        (riding + handover).floor() as u32
    }
}
