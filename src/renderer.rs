/*
 * Renderer Module
 *
 * This module handles the drawing of the point swarm: connection lines or
 * arrows with distance-based opacity, the found path polyline with its
 * endpoint markers, the points themselves, and the debug overlay. It only
 * reads the per-frame data the update pipeline produced.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::params::Variant;
use crate::ui;
use crate::POINT_RADIUS;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear the background
    draw.background().color(rgb(0.16, 0.16, 0.16));

    let window_rect = app.window_rect();

    // Draw connections under everything else, fading with distance: close
    // pairs are nearly opaque, pairs out at the link radius barely show.
    for (index, entries) in model.neighbor_map.iter() {
        let origin = model.positions[index];
        for entry in entries {
            let distance = entry.dist_sq.sqrt();
            let fade = 1.0 - (distance / model.params.link_radius).clamp(0.0, 1.0);
            let alpha = (40.0 + 195.0 * fade) as u8;
            let color = srgba(100, 255, 100, alpha);

            match model.params.variant {
                Variant::Arrows => {
                    draw.arrow()
                        .start(origin)
                        .end(model.positions[entry.index])
                        .color(color)
                        .stroke_weight(1.5);
                }
                Variant::Lines | Variant::Pathfinder => {
                    draw.line()
                        .start(origin)
                        .end(model.positions[entry.index])
                        .color(color)
                        .weight(1.0);
                }
            }
        }
    }

    // Draw the found path and its endpoints on top of the mesh
    if !model.path.is_empty() {
        draw.polyline()
            .weight(3.0)
            .points(model.path.points.iter().cloned())
            .color(srgba(255, 210, 80, 230u8));

        if let (Some(&start), Some(&goal)) = (model.path.points.first(), model.path.points.last()) {
            draw.ellipse()
                .xy(start)
                .radius(POINT_RADIUS * 1.6)
                .no_fill()
                .stroke(srgba(120, 255, 120, 255u8))
                .stroke_weight(2.0);
            draw.ellipse()
                .xy(goal)
                .radius(POINT_RADIUS * 1.6)
                .no_fill()
                .stroke(srgba(255, 120, 120, 255u8))
                .stroke_weight(2.0);
        }
    }

    // Draw each point as a translucent circle
    for point in &model.simulation.points {
        draw.ellipse()
            .xy(point.position)
            .radius(POINT_RADIUS)
            .color(srgba(200, 200, 200, 100u8));
    }

    // Draw debug overlay if enabled
    if model.params.show_debug {
        ui::draw_debug_info(
            &draw,
            &model.debug_info,
            window_rect,
            model.simulation.points.len(),
        );
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}
