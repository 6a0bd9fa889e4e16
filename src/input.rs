/*
 * Input Module
 *
 * This module handles keyboard and window events for the demo:
 * fullscreen toggle, pause, respawn, variant cycling, and keeping the
 * arena in sync with the window size.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::simulation::Arena;

// Key pressed event handler
pub fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::F => {
            let window = app.main_window();
            let fullscreen = window.is_fullscreen();
            window.set_fullscreen(!fullscreen);
        }
        Key::Space => {
            model.params.pause_simulation = !model.params.pause_simulation;
        }
        Key::R => {
            model.simulation.reset(&model.params);
        }
        Key::V => {
            let next = model.params.variant.next();
            model.params.apply_variant(next);
            model.simulation.reset(&model.params);
        }
        Key::D => {
            model.params.show_debug = !model.params.show_debug;
        }
        _ => {}
    }
}

// Window resized event handler: the arena follows the window, and points
// stranded outside respawn through the normal exit rule.
pub fn resized(_app: &App, model: &mut Model, dim: Vec2) {
    model.simulation.set_arena(Arena::new(dim.x, dim.y));
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
