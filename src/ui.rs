/*
 * UI Module
 *
 * This module contains functions for creating and updating the user
 * interface using nannou_egui. It provides controls for the swarm and
 * connection parameters, variant selection, and the debug overlay text.
 * Parameter change detection is handled by the SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{SimulationParams, Variant, VelocityModel};

// Update the UI. Returns whether points should be respawned, whether the
// point count changed, and whether any UI value changed at all.
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
) -> (bool, bool, bool) {
    let mut should_reset = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Swarm", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.num_points, SimulationParams::get_num_points_range())
                        .text("Points"),
                );

                if ui.button("Respawn Points").clicked() {
                    should_reset = true;
                }

                ui.add(
                    egui::Slider::new(&mut params.speed_min, SimulationParams::get_speed_range())
                        .text("Min Speed"),
                );
                ui.add(
                    egui::Slider::new(&mut params.speed_max, SimulationParams::get_speed_range())
                        .text("Max Speed"),
                );
                // Spawn draws from [speed_min, speed_max]; keep it a valid range
                if params.speed_min > params.speed_max {
                    params.speed_max = params.speed_min;
                }

                egui::ComboBox::from_label("Velocity Model")
                    .selected_text(params.velocity_model.label())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut params.velocity_model, VelocityModel::Polar, "Polar");
                        ui.selectable_value(&mut params.velocity_model, VelocityModel::Axial, "Axial");
                    });

                ui.add(
                    egui::Slider::new(&mut params.tick_rate, SimulationParams::get_tick_rate_range())
                        .text("Tick Rate"),
                );
            });

            ui.collapsing("Connections", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.link_radius, SimulationParams::get_link_radius_range())
                        .text("Link Radius"),
                );
                ui.add(
                    egui::Slider::new(&mut params.max_links, SimulationParams::get_max_links_range())
                        .text("Max Links"),
                );

                egui::ComboBox::from_label("Variant")
                    .selected_text(params.variant.label())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut params.variant, Variant::Lines, "Lines");
                        ui.selectable_value(&mut params.variant, Variant::Arrows, "Arrows");
                        ui.selectable_value(&mut params.variant, Variant::Pathfinder, "Pathfinder");
                    });
            });

            if params.variant == Variant::Pathfinder {
                ui.collapsing("Path", |ui| {
                    ui.label(format!("Path nodes: {}", debug_info.path_nodes));
                    ui.label(format!("Path length: {:.1}", debug_info.path_length));
                    ui.label(format!("Nodes expanded: {}", debug_info.nodes_expanded));
                });
            }

            ui.separator();
            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    // Detect parameter changes
    let (num_points_changed, variant_changed, ui_changed) = params.detect_changes();

    // Switching variant loads that variant's tuning constants and
    // respawns the swarm at its point count.
    if variant_changed {
        let variant = params.variant;
        params.apply_variant(variant);
        should_reset = true;
    }

    (should_reset, num_points_changed, ui_changed)
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    point_count: usize,
) {
    // Create a background panel in the top-left corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 230.0;
    let panel_height = line_height * 7.0 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    // Draw the background panel
    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    // Draw each line of text
    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Ticks/frame: {}", debug_info.ticks_last_frame),
        format!("Points: {}", point_count),
        format!("Connections: {}", debug_info.connection_count),
        format!("A* expanded: {}", debug_info.nodes_expanded),
        format!("Path: {} nodes / {:.0}", debug_info.path_nodes, debug_info.path_length),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge
        draw.text(text)
            .x_y(text_x + 80.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
