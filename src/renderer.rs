/*
 * Renderer Module
 *
 * This module draws the flock. The simulation works in a top-left origin,
 * y-down world the size of the window; nannou draws in a centred, y-up
 * frame, so positions and headings are converted here.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::boid::Boid;
use crate::flock::Bounds;
use crate::vector::Vector2;

/// Convert a world position to nannou's centred, y-up coordinates
pub fn world_to_screen(position: Vector2, bounds: Bounds) -> Vec2 {
    vec2(
        position.x - bounds.width() / 2.0,
        bounds.height() / 2.0 - position.y,
    )
}

/// Heading of a world-space velocity as seen in screen space
pub fn screen_heading(velocity: Vector2) -> f32 {
    (-velocity.y).atan2(velocity.x)
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    draw.background().color(rgb(50u8, 50u8, 50u8));

    let bounds = model.flock.bounds();
    for boid in model.flock.boids() {
        draw_boid(&draw, boid, bounds);
    }

    if model.panel.show_debug {
        draw_debug_overlay(&draw, model, app.window_rect());
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("failed to draw frame: {:?}", err);
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        log::error!("failed to draw controls: {:?}", err);
    }
}

// Draw a boid as a stroked triangle pointing along its velocity
fn draw_boid(draw: &Draw, boid: &Boid, bounds: Bounds) {
    let size = boid.size_unit();
    let points = [
        pt2(2.0 * size, 0.0),
        pt2(-size, size),
        pt2(-size, -size),
    ];

    draw.polygon()
        .no_fill()
        .stroke(WHITE)
        .stroke_weight(2.0)
        .points(points)
        .xy(world_to_screen(boid.position(), bounds))
        .rotate(screen_heading(boid.velocity()));
}

// Perception and separation radii of the first boid plus frame statistics
fn draw_debug_overlay(draw: &Draw, model: &Model, window_rect: Rect) {
    if let Some(first) = model.flock.boids().first() {
        let center = world_to_screen(first.position(), model.flock.bounds());

        draw.ellipse()
            .xy(center)
            .radius(model.params.separation_radius)
            .no_fill()
            .stroke(RED)
            .stroke_weight(1.0);

        draw.ellipse()
            .xy(center)
            .radius(model.params.perception_radius)
            .no_fill()
            .stroke(GREEN)
            .stroke_weight(1.0);
    }

    let margin = 20.0;
    let line_height = 20.0;
    for (i, text) in model.debug_info.lines().iter().enumerate() {
        draw.text(text)
            .x_y(
                window_rect.right() - 100.0,
                window_rect.top() - margin - i as f32 * line_height,
            )
            .color(WHITE)
            .font_size(14);
    }
}
