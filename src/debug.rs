/*
 * Debug Information Module
 *
 * Frame statistics shown in the overlay and the control panel.
 */

use std::time::Duration;

// Debug information to display
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub boid_count: usize,
    pub tick: u64,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            boid_count: 0,
            tick: 0,
        }
    }
}

impl DebugInfo {
    pub fn lines(&self) -> [String; 4] {
        [
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Boids: {}", self.boid_count),
            format!("Tick: {}", self.tick),
        ]
    }
}
