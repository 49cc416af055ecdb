/*
 * Boid Module
 *
 * This module defines the Boid struct and its behavior.
 * Each boid follows three main rules, evaluated against a snapshot of the
 * whole flock taken at the start of the tick:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 */

use crate::params::SteeringParameters;
use crate::vector::{Vector2, VectorExt};
use crate::BOID_SIZE_UNIT;

/// Stable handle of a boid within its flock, used to exclude a boid from its own neighbors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoidId(pub(crate) u64);

impl BoidId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Read-only copy of one boid's state as of the start of a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoidState {
    pub id: BoidId,
    pub position: Vector2,
    pub velocity: Vector2,
}

/// The three unweighted steering vectors computed for one boid
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Steering {
    pub alignment: Vector2,
    pub cohesion: Vector2,
    pub separation: Vector2,
    pub neighbors: usize,
}

impl Steering {
    /// Sum of the three rules scaled by their weights
    pub fn weighted(&self, params: &SteeringParameters) -> Vector2 {
        self.alignment * params.alignment_weight
            + self.cohesion * params.cohesion_weight
            + self.separation * params.separation_weight
    }
}

/// Repulsion a neighbor at distance `d` exerts on `position`: `(position - other) / d²`.
///
/// Returns zero when `d²` underflows to zero.
pub fn separation_contribution(position: Vector2, other: Vector2, d: f32) -> Vector2 {
    (position - other).checked_div(d * d).unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct Boid {
    id: BoidId,
    position: Vector2,
    velocity: Vector2,
    acceleration: Vector2,
    size_unit: f32,
}

impl Boid {
    pub fn new(id: BoidId, position: Vector2, velocity: Vector2) -> Self {
        Self {
            id,
            position,
            velocity,
            acceleration: Vector2::ZERO,
            size_unit: BOID_SIZE_UNIT,
        }
    }

    pub fn id(&self) -> BoidId {
        self.id
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vector2 {
        self.acceleration
    }

    /// Rendering scale; also the margin used when wrapping around the edges
    pub fn size_unit(&self) -> f32 {
        self.size_unit
    }

    pub fn state(&self) -> BoidState {
        BoidState {
            id: self.id,
            position: self.position,
            velocity: self.velocity,
        }
    }

    /// Compute alignment, cohesion and separation in a single pass over the snapshot
    pub fn steer(&self, snapshot: &[BoidState], params: &SteeringParameters) -> Steering {
        let mut alignment = Vector2::ZERO;
        let mut cohesion = Vector2::ZERO;
        let mut separation = Vector2::ZERO;
        let mut count = 0usize;

        for other in snapshot {
            if other.id == self.id {
                continue;
            }

            let d = self.position.distance(other.position);
            if d > 0.0 && d < params.perception_radius {
                count += 1;
                alignment += other.velocity;
                cohesion += other.position;
                if d < params.separation_radius {
                    // inverse-square falloff
                    separation += separation_contribution(self.position, other.position, d);
                }
            }
        }

        if count == 0 {
            return Steering::default();
        }

        let alignment = alignment.set_magnitude(params.max_speed) - self.velocity;

        let centroid = cohesion / count as f32;
        let cohesion = (centroid - self.position).set_magnitude(params.max_speed) - self.velocity;

        // The accumulated repulsion is not averaged; only its direction survives set_magnitude.
        let separation = separation.set_magnitude(params.max_speed) - self.velocity;

        Steering {
            alignment,
            cohesion,
            separation,
            neighbors: count,
        }
    }

    // Apply a force to the boid (mass is 1, so force is acceleration)
    pub fn apply_force(&mut self, force: Vector2) {
        self.acceleration += force;
    }

    /// Steer against the snapshot, accumulate the weighted force and clamp it to `max_force`
    pub fn flock(&mut self, snapshot: &[BoidState], params: &SteeringParameters) -> Steering {
        let steering = self.steer(snapshot, params);
        self.apply_force(steering.weighted(params));
        self.acceleration = self.acceleration.limit(params.max_force);
        steering
    }

    // Update the boid's position based on its velocity and acceleration
    pub fn update(&mut self, max_speed: f32) {
        self.velocity = (self.velocity + self.acceleration).limit(max_speed);
        self.position += self.velocity;
        self.acceleration = Vector2::ZERO;
    }

    /// Toroidal wrap; the boid must be fully off one edge before reappearing at the other
    pub fn wrap_edges(&mut self, width: f32, height: f32) {
        let margin = self.size_unit;

        if self.position.x < -margin {
            self.position.x = width + margin;
        } else if self.position.x > width + margin {
            self.position.x = -margin;
        }

        if self.position.y < -margin {
            self.position.y = height + margin;
        } else if self.position.y > height + margin {
            self.position.y = -margin;
        }
    }

    /// One full tick for this boid: steer, integrate, wrap
    pub fn run(
        &mut self,
        snapshot: &[BoidState],
        params: &SteeringParameters,
        width: f32,
        height: f32,
    ) {
        self.flock(snapshot, params);
        self.update(params.max_speed);
        self.wrap_edges(width, height);
    }
}
