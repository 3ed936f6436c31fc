use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tuning for an [`OrbitRig`](super::OrbitRig).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Degrees per second per unit of orbit input.
    pub orbit_speed: f32,
    /// Distance units per second per unit of zoom input.
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Flatten the zoom direction onto the horizontal plane.
    pub lock_vertical_axis_on_zoom: bool,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            orbit_speed: 60.0,
            zoom_speed: 10.0,
            min_distance: 0.5,
            max_distance: 200.0,
            lock_vertical_axis_on_zoom: true,
        }
    }
}

impl RigConfig {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("orbit_speed", self.orbit_speed),
            ("zoom_speed", self.zoom_speed),
            ("min_distance", self.min_distance),
            ("max_distance", self.max_distance),
        ] {
            if !value.is_finite() {
                return Err(Error::invalid_config(field, format!("must be finite, got {value}")));
            }
        }

        if self.min_distance <= 0.0 {
            return Err(Error::invalid_config(
                "min_distance",
                format!("must be positive, got {}", self.min_distance),
            ));
        }

        if self.max_distance < self.min_distance {
            return Err(Error::invalid_config(
                "max_distance",
                format!(
                    "must not be below min_distance ({} < {})",
                    self.max_distance, self.min_distance
                ),
            ));
        }

        Ok(())
    }
}
