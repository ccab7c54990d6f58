//! Mumbai neighbourhood locations for realistic delivery fixtures.
//!
//! Coordinates are approximate neighbourhood points, good enough for
//! straight-line distance tests.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Western Suburbs
// ============================================================================

pub const WESTERN_SUBURBS: &[Location] = &[
    Location::new("Bandra Kurla", 19.0760, 72.8777),
    Location::new("Andheri East", 19.1136, 72.8697),
    Location::new("Bandra West", 19.0596, 72.8295),
    Location::new("Kalina", 19.0728, 72.8826),
    Location::new("Santacruz West", 19.0843, 72.8360),
    Location::new("Juhu", 19.1075, 72.8263),
    Location::new("Vile Parle East", 19.0990, 72.8497),
    Location::new("Goregaon West", 19.1663, 72.8526),
    Location::new("Malad West", 19.1874, 72.8484),
];

// ============================================================================
// Central and Eastern Suburbs
// ============================================================================

pub const EASTERN_SUBURBS: &[Location] = &[
    Location::new("Powai", 19.1176, 72.9060),
    Location::new("Ghatkopar West", 19.0860, 72.9081),
    Location::new("Chembur", 19.0522, 72.9005),
    Location::new("Vikhroli", 19.1110, 72.9280),
    Location::new("Mulund West", 19.1726, 72.9425),
];

// ============================================================================
// South Mumbai
// ============================================================================

pub const SOUTH_MUMBAI: &[Location] = &[
    Location::new("Colaba", 18.9067, 72.8147),
    Location::new("Fort", 18.9345, 72.8356),
    Location::new("Marine Lines", 18.9447, 72.8235),
    Location::new("Lower Parel", 18.9980, 72.8300),
    Location::new("Worli", 19.0176, 72.8172),
];

/// Bandra Kurla, Andheri East, Powai: the three-order dispatch scenario.
pub fn bandra_andheri_powai() -> [Location; 3] {
    [
        Location::new("Bandra Kurla", 19.0760, 72.8777),
        Location::new("Andheri East", 19.1136, 72.8697),
        Location::new("Powai", 19.1176, 72.9060),
    ]
}

/// Returns all locations as a single list.
pub fn all_locations() -> Vec<Location> {
    let mut all = Vec::with_capacity(32);
    all.extend_from_slice(WESTERN_SUBURBS);
    all.extend_from_slice(EASTERN_SUBURBS);
    all.extend_from_slice(SOUTH_MUMBAI);
    all
}

/// Returns a subset of locations for smaller tests.
pub fn sample_locations(count: usize) -> Vec<Location> {
    all_locations().into_iter().take(count).collect()
}
