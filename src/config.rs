//! Routing configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::dispatch::DispatchOptions;
use crate::error::ConfigError;
use crate::haversine::TravelModel;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    pub travel: TravelModel,
    pub dispatch: DispatchOptions,
}

impl RoutingConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let speed = self.travel.speed_kmh;
        if !speed.is_finite() || speed <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "travel.speed_kmh must be positive, got {speed}"
            )));
        }
        Ok(())
    }
}
