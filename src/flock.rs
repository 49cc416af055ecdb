/*
 * Flock Module
 *
 * This module owns the boid population and advances it one tick at a time.
 * Every tick starts by copying each boid's position and velocity into a
 * snapshot; all steering for that tick is computed from the snapshot, so no
 * boid sees another boid's already-updated state.
 */

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::boid::{Boid, BoidId, BoidState};
use crate::error::{FlockError, Result};
use crate::params::SteeringParameters;
use crate::vector::Vector2;

/// World size used for spawn coordinates and wraparound
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    width: f32,
    height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(FlockError::InvalidBounds { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

pub struct Flock {
    boids: Vec<Boid>,
    bounds: Bounds,
    rng: StdRng,
    next_id: u64,
    tick: u64,
    parallel: bool,
}

impl Flock {
    pub fn new(bounds: Bounds) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Flock whose spawn positions and headings are reproducible
    pub fn with_seed(bounds: Bounds, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: Bounds, rng: StdRng) -> Self {
        Self {
            boids: Vec::new(),
            bounds,
            rng,
            next_id: 0,
            tick: 0,
            parallel: false,
        }
    }

    /// Spawn a boid at an explicit position and velocity
    pub fn insert(&mut self, position: Vector2, velocity: Vector2) -> BoidId {
        let id = BoidId(self.next_id);
        self.next_id += 1;
        self.boids.push(Boid::new(id, position, velocity));
        log::debug!(
            "spawned boid {} at ({:.1}, {:.1})",
            id.get(),
            position.x,
            position.y
        );
        id
    }

    /// Spawn a boid at `(x, y)` with a random unit-length heading
    pub fn add_boid(&mut self, x: f32, y: f32) -> BoidId {
        let angle = self.rng.gen_range(0.0..std::f32::consts::TAU);
        self.insert(Vector2::new(x, y), Vector2::from_angle(angle))
    }

    /// Spawn a boid at a uniformly random point inside the bounds
    pub fn add_random_boid(&mut self) -> BoidId {
        let x = self.rng.gen_range(0.0..self.bounds.width);
        let y = self.rng.gen_range(0.0..self.bounds.height);
        self.add_boid(x, y)
    }

    pub fn populate(&mut self, count: usize) {
        self.boids.reserve(count);
        for _ in 0..count {
            self.add_random_boid();
        }
        log::info!("flock populated with {} boids", self.boids.len());
    }

    /// Copy of every boid's state; the sole input to steering for one tick
    pub fn snapshot(&self) -> Vec<BoidState> {
        self.boids.iter().map(Boid::state).collect()
    }

    /// Advance every boid by one tick.
    ///
    /// `params` is copied once up front, so the whole tick runs against a
    /// single parameter set.
    pub fn step(&mut self, params: &SteeringParameters) {
        let params = *params;
        let snapshot = self.snapshot();
        let (width, height) = (self.bounds.width, self.bounds.height);

        if self.parallel {
            self.boids
                .par_iter_mut()
                .for_each(|boid| boid.run(&snapshot, &params, width, height));
        } else {
            for boid in &mut self.boids {
                boid.run(&snapshot, &params, width, height);
            }
        }

        self.tick += 1;
        log::trace!("tick {} advanced {} boids", self.tick, self.boids.len());
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn get(&self, id: BoidId) -> Option<&Boid> {
        self.boids.iter().find(|boid| boid.id() == id)
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }
}
