/*
 * Flocking Simulation - Module Definitions
 *
 * The simulation core (vector, params, boid, flock) has no windowing
 * dependency; the remaining modules are the nannou front end built on it.
 */

// Re-export key components for easier access
pub use boid::{Boid, BoidId, BoidState, Steering};
pub use config::SimulationConfig;
pub use error::FlockError;
pub use flock::{Bounds, Flock};
pub use params::SteeringParameters;
pub use vector::Vector2;

// Define modules
pub mod app;
pub mod boid;
pub mod config;
pub mod debug;
pub mod error;
pub mod flock;
pub mod input;
pub mod params;
pub mod renderer;
pub mod ui;
pub mod vector;

// Constants
pub const BOID_SIZE_UNIT: f32 = 2.0;
