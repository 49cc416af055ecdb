/*
 * UI Module
 *
 * This module contains the egui control panel used to tune the steering
 * parameters while the simulation runs. Sliders edit a candidate copy; the
 * candidate only replaces the live parameters when it passes validation.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::flock::Bounds;
use crate::params::SteeringParameters;

/// Panel toggles that are not steering parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelState {
    pub show_debug: bool,
    pub paused: bool,
}

/// Replace `current` with `candidate` if it differs and is valid.
///
/// Returns whether the live parameters changed.
pub fn apply_candidate(current: &mut SteeringParameters, candidate: SteeringParameters) -> bool {
    if candidate == *current {
        return false;
    }

    match candidate.validate() {
        Ok(()) => {
            *current = candidate;
            true
        }
        Err(err) => {
            log::warn!("rejected parameter change: {}", err);
            false
        }
    }
}

// Update the UI and return whether the steering parameters changed
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SteeringParameters,
    panel: &mut PanelState,
    debug_info: &DebugInfo,
    world: Bounds,
) -> bool {
    let mut candidate = *params;
    let radius_range = SteeringParameters::radius_range(world.width(), world.height());

    let ctx = egui.begin_frame();

    egui::Window::new("Flocking Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Rule Weights", |ui| {
                ui.add(egui::Slider::new(&mut candidate.alignment_weight, SteeringParameters::weight_range()).text("Alignment"));
                ui.add(egui::Slider::new(&mut candidate.cohesion_weight, SteeringParameters::weight_range()).text("Cohesion"));
                ui.add(egui::Slider::new(&mut candidate.separation_weight, SteeringParameters::weight_range()).text("Separation"));
            });

            ui.collapsing("Motion Limits", |ui| {
                ui.add(egui::Slider::new(&mut candidate.max_force, SteeringParameters::max_force_range()).text("Max force"));
                ui.add(egui::Slider::new(&mut candidate.max_speed, SteeringParameters::max_speed_range()).text("Max speed"));
                ui.add(egui::Slider::new(&mut candidate.perception_radius, radius_range.clone()).text("Perception radius"));
                ui.add(egui::Slider::new(&mut candidate.separation_radius, radius_range.clone()).text("Separation radius"));
            });

            if ui.button("Reset Parameters").clicked() {
                candidate = SteeringParameters::default();
            }

            ui.separator();
            ui.label(format!("Boids: {}", debug_info.boid_count));
            ui.label("Click anywhere outside this panel to add a boid");

            ui.checkbox(&mut panel.show_debug, "Show Debug Info");
            ui.checkbox(&mut panel.paused, "Pause Simulation");
        });

    apply_candidate(params, candidate)
}
