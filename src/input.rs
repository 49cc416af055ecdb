/*
 * Input Module
 *
 * Pointer handling: the cursor position is tracked every move, and a left
 * click outside the control panel spawns a boid under the cursor.
 */

use nannou::prelude::*;
use nannou::winit::event::{MouseButton, WindowEvent};

use crate::app::Model;
use crate::flock::Bounds;
use crate::vector::Vector2;

/// Convert nannou's centred, y-up coordinates to a world position
pub fn screen_to_world(position: Vec2, bounds: Bounds) -> Vector2 {
    Vector2::new(
        position.x + bounds.width() / 2.0,
        bounds.height() / 2.0 - position.y,
    )
}

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    model.mouse_position = pos;
}

// Mouse pressed event handler
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left || model.egui.ctx().is_pointer_over_area() {
        return;
    }

    let world = screen_to_world(model.mouse_position, model.flock.bounds());
    model.flock.add_boid(world.x, world.y);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &WindowEvent) {
    model.egui.handle_raw_event(event);
}
