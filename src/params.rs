/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the point swarm. The three demo variants are
 * presets over the same parameter set: they differ in tuning constants and
 * in how connections are drawn. It also provides methods for parameter
 * change detection and management to improve separation of concerns.
 */

// The three demo variants. Lines and Arrows only differ in connection
// styling and tuning; Pathfinder additionally runs an A* search between
// the first and last point every frame and draws the resulting polyline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Lines,
    Arrows,
    Pathfinder,
}

impl Variant {
    pub fn next(self) -> Self {
        match self {
            Variant::Lines => Variant::Arrows,
            Variant::Arrows => Variant::Pathfinder,
            Variant::Pathfinder => Variant::Lines,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Variant::Lines => "Lines",
            Variant::Arrows => "Arrows",
            Variant::Pathfinder => "Pathfinder",
        }
    }
}

// How respawn velocities are drawn. Polar picks a uniform heading and a
// speed magnitude from [speed_min, speed_max]; Axial picks the X and Y
// components independently from [-speed_max, speed_max].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VelocityModel {
    Polar,
    Axial,
}

impl VelocityModel {
    pub fn label(self) -> &'static str {
        match self {
            VelocityModel::Polar => "Polar",
            VelocityModel::Axial => "Axial",
        }
    }
}

// Parameters for the simulation that can be adjusted via UI
pub struct SimulationParams {
    pub num_points: usize,
    pub speed_min: f32,
    pub speed_max: f32,
    pub link_radius: f32,
    pub max_links: usize,
    pub variant: Variant,
    pub velocity_model: VelocityModel,
    pub tick_rate: f32,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    num_points: usize,
    speed_min: f32,
    speed_max: f32,
    link_radius: f32,
    max_links: usize,
    variant: Variant,
    velocity_model: VelocityModel,
    tick_rate: f32,
    show_debug: bool,
    pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        let mut params = Self {
            num_points: 0,
            speed_min: 0.5,
            speed_max: 1.0,
            link_radius: 0.0,
            max_links: 0,
            variant: Variant::Lines,
            velocity_model: VelocityModel::Polar,
            tick_rate: 60.0,
            show_debug: false,
            pause_simulation: false,
            previous_values: None,
        };
        params.apply_variant(Variant::Lines);
        params
    }
}

impl SimulationParams {
    // Switch to a variant and load its tuning constants. Every constant
    // stays individually adjustable through the UI afterwards.
    pub fn apply_variant(&mut self, variant: Variant) {
        self.variant = variant;
        match variant {
            Variant::Lines => {
                self.num_points = 500;
                self.link_radius = 220.0;
                self.max_links = 10;
            }
            Variant::Arrows => {
                self.num_points = 200;
                self.link_radius = 150.0;
                self.max_links = 4;
            }
            Variant::Pathfinder => {
                self.num_points = 300;
                self.link_radius = 170.0;
                self.max_links = 8;
            }
        }
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            num_points: self.num_points,
            speed_min: self.speed_min,
            speed_max: self.speed_max,
            link_radius: self.link_radius,
            max_links: self.max_links,
            variant: self.variant,
            velocity_model: self.velocity_model,
            tick_rate: self.tick_rate,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        });
    }

    // Check if any parameters have changed since the last snapshot.
    // Returns a tuple of (num_points_changed, variant_changed, any_ui_changed)
    pub fn detect_changes(&self) -> (bool, bool, bool) {
        let mut num_points_changed = false;
        let mut variant_changed = false;
        let mut ui_changed = false;

        // If we don't have previous values, nothing has changed
        if let Some(prev) = &self.previous_values {
            if self.num_points != prev.num_points {
                num_points_changed = true;
                ui_changed = true;
            }

            if self.variant != prev.variant {
                variant_changed = true;
                ui_changed = true;
            }

            // Check for other parameter changes
            if self.speed_min != prev.speed_min
                || self.speed_max != prev.speed_max
                || self.link_radius != prev.link_radius
                || self.max_links != prev.max_links
                || self.velocity_model != prev.velocity_model
                || self.tick_rate != prev.tick_rate
                || self.show_debug != prev.show_debug
                || self.pause_simulation != prev.pause_simulation
            {
                ui_changed = true;
            }
        }

        (num_points_changed, variant_changed, ui_changed)
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_points_range() -> std::ops::RangeInclusive<usize> {
        10..=2000
    }

    pub fn get_speed_range() -> std::ops::RangeInclusive<f32> {
        0.1..=10.0
    }

    pub fn get_link_radius_range() -> std::ops::RangeInclusive<f32> {
        20.0..=500.0
    }

    pub fn get_max_links_range() -> std::ops::RangeInclusive<usize> {
        1..=30
    }

    pub fn get_tick_rate_range() -> std::ops::RangeInclusive<f32> {
        15.0..=120.0
    }
}
