//! Launch settings for the windowed simulation.

/// Settings fixed for the lifetime of one run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Initial population
    pub boid_count: usize,
    /// Seed for spawn positions and headings; random when `None`
    pub seed: Option<u64>,
    /// Window size as a fraction of the primary monitor
    pub window_scale: f32,
    /// Run the per-boid pass on the rayon thread pool
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            boid_count: 150,
            seed: None,
            window_scale: 0.5,
            parallel: false,
        }
    }
}
