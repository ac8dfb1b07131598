//! Guidance configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default distance below which the viewer counts as arrived (meters)
pub const DEFAULT_ARRIVAL_THRESHOLD: f32 = 0.1;

/// Default maximum indicator length (meters)
pub const DEFAULT_INDICATOR_CAP_LENGTH: f32 = 0.5;

/// Default vertical offset of the indicator below the viewer (meters)
pub const DEFAULT_INDICATOR_DROP: f32 = 0.2;

/// Tunables for the guidance loop
///
/// Every field has a default, so a partial TOML table or JS object is
/// enough to override a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuidanceConfig {
    /// Distance below which an `Arrived` event fires
    pub arrival_threshold: f32,
    /// Upper bound on the indicator scale
    pub indicator_cap_length: f32,
    /// How far below the viewer the indicator is anchored
    pub indicator_drop: f32,
    /// How far ahead of the viewer (along its local -Z) new markers are placed
    pub placement_distance: f32,
    /// Stop navigating automatically once the target is reached
    pub auto_stop_on_arrival: bool,
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            arrival_threshold: DEFAULT_ARRIVAL_THRESHOLD,
            indicator_cap_length: DEFAULT_INDICATOR_CAP_LENGTH,
            indicator_drop: DEFAULT_INDICATOR_DROP,
            placement_distance: 0.0,
            auto_stop_on_arrival: false,
        }
    }
}

impl GuidanceConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_arrival_threshold(mut self, threshold: f32) -> Self {
        self.arrival_threshold = threshold;
        self
    }

    pub fn with_indicator_cap_length(mut self, length: f32) -> Self {
        self.indicator_cap_length = length;
        self
    }

    pub fn with_indicator_drop(mut self, drop: f32) -> Self {
        self.indicator_drop = drop;
        self
    }

    pub fn with_placement_distance(mut self, distance: f32) -> Self {
        self.placement_distance = distance;
        self
    }

    pub fn with_auto_stop_on_arrival(mut self, enabled: bool) -> Self {
        self.auto_stop_on_arrival = enabled;
        self
    }

    /// Check that all values are finite and in range
    pub fn validate(&self) -> Result<()> {
        positive("arrival_threshold", self.arrival_threshold)?;
        positive("indicator_cap_length", self.indicator_cap_length)?;
        non_negative("indicator_drop", self.indicator_drop)?;
        non_negative("placement_distance", self.placement_distance)?;
        Ok(())
    }
}

fn positive(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidConfig(format!(
            "{name} must be a positive finite number, got {value}"
        )));
    }
    Ok(())
}

fn non_negative(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidConfig(format!(
            "{name} must be a non-negative finite number, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GuidanceConfig::default();
        assert_eq!(config.arrival_threshold, 0.1);
        assert_eq!(config.indicator_cap_length, 0.5);
        assert!(!config.auto_stop_on_arrival);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = GuidanceConfig::new().with_arrival_threshold(0.0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = GuidanceConfig::new().with_indicator_cap_length(f32::NAN);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = GuidanceConfig::new().with_indicator_drop(-0.1);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = GuidanceConfig::new().with_placement_distance(f32::INFINITY);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: GuidanceConfig =
            serde_json::from_str(r#"{ "auto_stop_on_arrival": true }"#).unwrap();
        assert!(config.auto_stop_on_arrival);
        assert_eq!(config.arrival_threshold, DEFAULT_ARRIVAL_THRESHOLD);
        assert_eq!(config.indicator_drop, DEFAULT_INDICATOR_DROP);
    }
}
