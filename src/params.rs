/*
 * Steering Parameters Module
 *
 * This module defines the SteeringParameters struct holding the seven
 * tunable values every boid reads while steering. The UI mutates a copy
 * between frames; the flock copies it once at the start of each tick, so a
 * tick always sees one consistent set of values.
 */

use std::ops::RangeInclusive;

use crate::error::{FlockError, Result};

/// Tunable steering values shared by every boid in the flock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringParameters {
    pub max_force: f32,
    pub max_speed: f32,
    /// Neighbor radius for alignment and cohesion
    pub perception_radius: f32,
    pub separation_radius: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub separation_weight: f32,
}

impl Default for SteeringParameters {
    fn default() -> Self {
        Self {
            max_force: 0.4,
            max_speed: 4.0,
            perception_radius: 50.0,
            separation_radius: 25.0,
            alignment_weight: 1.0,
            cohesion_weight: 1.0,
            separation_weight: 1.5,
        }
    }
}

impl SteeringParameters {
    /// Check every field and the radius ordering.
    ///
    /// The tick itself never calls this: stepping with unchecked values is
    /// tolerated and stays NaN-free. The tuning surface uses it to decide
    /// whether a slider change is accepted.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("max_force", self.max_force),
            ("max_speed", self.max_speed),
            ("perception_radius", self.perception_radius),
            ("separation_radius", self.separation_radius),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(FlockError::InvalidParameter { name, value });
            }
        }

        let weights = [
            ("alignment_weight", self.alignment_weight),
            ("cohesion_weight", self.cohesion_weight),
            ("separation_weight", self.separation_weight),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(FlockError::InvalidParameter { name, value });
            }
        }

        if self.separation_radius > self.perception_radius {
            return Err(FlockError::RadiusOrder {
                perception: self.perception_radius,
                separation: self.separation_radius,
            });
        }

        Ok(())
    }

    // Get parameter ranges for UI sliders
    pub fn weight_range() -> RangeInclusive<f32> {
        0.0..=10.0
    }

    pub fn max_force_range() -> RangeInclusive<f32> {
        0.01..=2.0
    }

    pub fn max_speed_range() -> RangeInclusive<f32> {
        0.1..=8.0
    }

    /// Radii may grow up to half the shorter side of the world
    pub fn radius_range(width: f32, height: f32) -> RangeInclusive<f32> {
        1.0..=f32::max(width.min(height) / 2.0, 1.0)
    }
}
