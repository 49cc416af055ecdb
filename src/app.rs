/*
 * Application Module
 *
 * This module defines the application model and the nannou callbacks that
 * drive it: window creation, per-frame UI and simulation update. One frame
 * advances the flock by exactly one tick.
 */

use std::sync::OnceLock;

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::config::SimulationConfig;
use crate::debug::DebugInfo;
use crate::flock::{Bounds, Flock};
use crate::input;
use crate::params::SteeringParameters;
use crate::renderer;
use crate::ui::{self, PanelState};

// Used when the platform reports no primary monitor
const FALLBACK_MONITOR_SIZE: (f32, f32) = (1600.0, 1000.0);

static CONFIG: OnceLock<SimulationConfig> = OnceLock::new();

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub params: SteeringParameters,
    pub panel: PanelState,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub mouse_position: Vec2,
}

/// Open the window and run until it is closed
pub fn run(config: SimulationConfig) {
    if CONFIG.set(config).is_err() {
        log::warn!("simulation already configured; keeping the first configuration");
    }

    nannou::app(model).update(update).run();
}

// Initialize the model
fn model(app: &App) -> Model {
    let config = CONFIG.get_or_init(SimulationConfig::default).clone();

    let (monitor_width, monitor_height) = match app.primary_monitor() {
        Some(monitor) => {
            let size = monitor.size();
            (size.width as f32, size.height as f32)
        }
        None => {
            log::warn!("no primary monitor reported; using a default window size");
            FALLBACK_MONITOR_SIZE
        }
    };

    let window_width = (monitor_width * config.window_scale).max(1.0);
    let window_height = (monitor_height * config.window_scale).max(1.0);

    let window_id = app
        .new_window()
        .title("Flocking")
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .expect("failed to build the simulation window");

    let window = app.window(window_id).expect("window closed during setup");
    let egui = Egui::from_window(&window);

    // Spawn coordinates and wraparound use the window's logical size.
    let rect = window.rect();
    let bounds = Bounds::new(rect.w(), rect.h())
        .or_else(|_| Bounds::new(window_width, window_height))
        .expect("window has a positive size");

    let mut flock = match config.seed {
        Some(seed) => Flock::with_seed(bounds, seed),
        None => Flock::new(bounds),
    };
    flock.set_parallel(config.parallel);
    flock.populate(config.boid_count);

    log::info!(
        "window {:.0}x{:.0}, {} boids, seed {:?}, parallel {}",
        bounds.width(),
        bounds.height(),
        config.boid_count,
        config.seed,
        config.parallel
    );

    Model {
        flock,
        params: SteeringParameters::default(),
        panel: PanelState::default(),
        egui,
        debug_info: DebugInfo::default(),
        mouse_position: Vec2::ZERO,
    }
}

// Update the model
fn update(app: &App, model: &mut Model, update: Update) {
    model.egui.set_elapsed_time(update.since_start);

    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let bounds = model.flock.bounds();
    if ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &mut model.panel,
        &model.debug_info,
        bounds,
    ) {
        log::debug!("steering parameters updated: {:?}", model.params);
    }

    if !model.panel.paused {
        model.flock.step(&model.params);
    }

    model.debug_info.boid_count = model.flock.len();
    model.debug_info.tick = model.flock.tick_count();
}
