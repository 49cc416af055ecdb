/*
 * Vector Module
 *
 * Boid position, velocity and acceleration are glam vectors. The steering
 * helpers below measure length with `hypot`, so neither a zero vector nor a
 * very long one turns into NaN or collapses to zero.
 */

pub use glam::Vec2 as Vector2;

/// Guarded length operations used by the steering rules
pub trait VectorExt {
    /// Euclidean length, safe against overflow of the squared length
    fn magnitude(self) -> f32;

    /// Unit vector in the same direction, or zero for a zero-length vector
    fn direction(self) -> Self;

    /// Scales down to `max` when longer than `max`, otherwise unchanged
    fn limit(self, max: f32) -> Self;

    /// Same direction with length `magnitude`; a zero vector stays zero
    fn set_magnitude(self, magnitude: f32) -> Self;

    /// Division that refuses a zero (or non-finite) divisor
    fn checked_div(self, scalar: f32) -> Option<Self>
    where
        Self: Sized;
}

impl VectorExt for Vector2 {
    fn magnitude(self) -> f32 {
        self.x.hypot(self.y)
    }

    fn direction(self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 && mag.is_finite() {
            self / mag
        } else {
            Vector2::ZERO
        }
    }

    fn limit(self, max: f32) -> Self {
        if self.magnitude() > max {
            self.direction() * max
        } else {
            self
        }
    }

    fn set_magnitude(self, magnitude: f32) -> Self {
        self.direction() * magnitude
    }

    fn checked_div(self, scalar: f32) -> Option<Self> {
        if scalar != 0.0 && scalar.is_finite() {
            Some(self / scalar)
        } else {
            None
        }
    }
}
