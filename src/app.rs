/*
 * Application Module
 *
 * This module defines the main application model and the per-frame update
 * logic. Each rendered frame runs the same pipeline: advance the
 * simulation by however many fixed ticks have accumulated, rebuild the
 * proximity map from the new positions, and (in the Pathfinder variant)
 * run the A* search and reconstruct the path polyline. All of it happens
 * on the one thread that owns the model; nothing is shared or locked.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use std::time::{Duration, Instant};

use crate::debug::DebugInfo;
use crate::input;
use crate::params::{SimulationParams, Variant};
use crate::pathfind::{Path, PathSearch};
use crate::proximity::NeighborMap;
use crate::renderer;
use crate::simulation::{Arena, Simulation};
use crate::ui;

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    // Per-frame derived data, rebuilt in update() and read by view()
    pub positions: Vec<Point2>,
    pub neighbor_map: NeighborMap,
    pub path_search: PathSearch,
    pub path: Path,
    // Fixed timestep tick variables
    pub tick_accumulator: Duration,
    pub tick_step: Duration,
    pub last_update_time: Instant,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Get the primary monitor's dimensions
    let monitor = app.primary_monitor().expect("Failed to get primary monitor");
    let monitor_size = monitor.size();

    // Calculate window size based on monitor size (80% of monitor size)
    let window_width = monitor_size.width as f32 * 0.8;
    let window_height = monitor_size.height as f32 * 0.8;

    // Create the main window with dynamic size
    let window_id = app
        .new_window()
        .title("Constellation")
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .key_pressed(input::key_pressed)
        .resized(input::resized)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Create simulation parameters and the simulation itself; the arena
    // starts as the window rectangle and follows it on resize.
    let params = SimulationParams::default();
    let simulation = Simulation::new(&params, Arena::new(window_width, window_height));

    let tick_step = Duration::from_secs_f32(1.0 / params.tick_rate);
    let now = Instant::now();

    Model {
        simulation,
        params,
        egui,
        debug_info: DebugInfo::default(),
        positions: Vec::new(),
        neighbor_map: NeighborMap::new(),
        path_search: PathSearch::new(),
        path: Path::empty(),
        tick_accumulator: Duration::ZERO,
        tick_step,
        last_update_time: now,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Update UI and check what changed
    let (should_reset, num_points_changed, ui_changed) =
        ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if ui_changed {
        // Pick up a changed tick rate
        model.tick_step = Duration::from_secs_f32(1.0 / model.params.tick_rate);
    }

    if should_reset || num_points_changed {
        model.simulation.reset(&model.params);
    }

    // Accumulate elapsed time and run fixed ticks
    let current_time = Instant::now();
    model.tick_accumulator += current_time.duration_since(model.last_update_time);
    model.last_update_time = current_time;

    if model.params.pause_simulation {
        // Drop accumulated time so unpausing doesn't replay it as a burst
        model.tick_accumulator = Duration::ZERO;
        model.debug_info.ticks_last_frame = 0;
    } else {
        let mut ticks_this_frame = 0;
        while model.tick_accumulator >= model.tick_step {
            model.simulation.advance(&model.params);
            model.tick_accumulator -= model.tick_step;
            ticks_this_frame += 1;
        }
        model.debug_info.ticks_last_frame = ticks_this_frame;
    }

    // Rebuild the per-frame proximity map from the current positions
    model.positions.clear();
    model
        .positions
        .extend(model.simulation.points.iter().map(|point| point.position));
    model.neighbor_map.rebuild(
        &model.positions,
        model.params.link_radius,
        model.params.max_links,
    );
    model.debug_info.connection_count = model.neighbor_map.total_connections();

    // Pathfinder variant: search between the two designated endpoints
    // (the first and last point) and rebuild the path polyline.
    if model.params.variant == Variant::Pathfinder && model.positions.len() >= 2 {
        let goal = model.positions.len() - 1;
        model.path = model.path_search.shortest_path(
            &model.positions,
            0,
            goal,
            model.params.link_radius,
        );
        model.debug_info.nodes_expanded = model.path_search.nodes_expanded();
    } else {
        model.path = Path::empty();
        model.debug_info.nodes_expanded = 0;
    }
    model.debug_info.path_nodes = model.path.points.len();
    model.debug_info.path_length = model.path.length;
}
