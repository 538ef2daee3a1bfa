//! Host-supplied tuning for a particle field.
//!
//! The host passes a (possibly partial) JSON object using the camelCase option
//! names the page markup already uses; missing fields take the defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PARTICLE_COUNT: usize = 100;
pub const DEFAULT_CONNECTION_DISTANCE: f64 = 150.0;
pub const DEFAULT_MOUSE_RADIUS: f64 = 200.0;
pub const DEFAULT_BASE_SPEED: f64 = 1.5;
pub const DEFAULT_WANDER_STRENGTH: f64 = 0.1;

/// Largest accepted `particleCount`. Connection search is quadratic.
pub const MAX_PARTICLE_COUNT: usize = 1000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed particle config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("particle config field `{field}` must be finite and non-negative, got {value}")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("particle config field `particleCount` is {count}, the limit is {max}")]
    TooMany { count: usize, max: usize },
}

/// Options recognized by [`crate::field::ParticleField`].
///
/// Absent keys take the defaults; an explicit `0` is kept, so
/// `"wanderStrength": 0` turns wandering off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    /// Number of particles spawned per arena.
    pub particle_count: usize,
    /// Pixel distance below which two particles are connected.
    pub connection_distance: f64,
    /// Pixel distance below which the pointer repels a particle.
    pub mouse_radius: f64,
    /// Nominal speed in pixels per tick; the cap is twice this.
    pub base_speed: f64,
    /// Magnitude of the per-tick wander push.
    pub wander_strength: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            connection_distance: DEFAULT_CONNECTION_DISTANCE,
            mouse_radius: DEFAULT_MOUSE_RADIUS,
            base_speed: DEFAULT_BASE_SPEED,
            wander_strength: DEFAULT_WANDER_STRENGTH,
        }
    }
}

impl FieldConfig {
    /// Dense, slow field behind the hero banner.
    #[must_use]
    pub fn hero() -> Self {
        Self {
            particle_count: 80,
            connection_distance: 120.0,
            mouse_radius: 250.0,
            base_speed: 1.2,
            wander_strength: 0.01,
        }
    }

    /// Sparser field behind the contact section.
    #[must_use]
    pub fn contact() -> Self {
        Self {
            particle_count: 60,
            connection_distance: 100.0,
            mouse_radius: 150.0,
            base_speed: 0.8,
            wander_strength: 0.01,
        }
    }

    /// Parse and validate a JSON options object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, otherwise whatever
    /// [`Self::validate`] rejects.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every numeric option is finite and non-negative, and that
    /// the particle count is within [`MAX_PARTICLE_COUNT`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooMany`] for an oversized count, otherwise
    /// [`ConfigError::OutOfRange`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count > MAX_PARTICLE_COUNT {
            return Err(ConfigError::TooMany { count: self.particle_count, max: MAX_PARTICLE_COUNT });
        }
        let fields = [
            ("connectionDistance", self.connection_distance),
            ("mouseRadius", self.mouse_radius),
            ("baseSpeed", self.base_speed),
            ("wanderStrength", self.wander_strength),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        Ok(())
    }

    /// Velocity magnitude cap.
    #[must_use]
    pub fn max_speed(&self) -> f64 {
        self.base_speed * crate::consts::MAX_SPEED_FACTOR
    }
}
