/*
 * Simulation Module
 *
 * This module owns the shared point collection and the motion step.
 * Each tick adds every point's velocity to its position (a fixed per-tick
 * displacement; the tick rate is fixed, so motion is frame-rate-coupled on
 * purpose). Points that end a tick outside the arena are reinitialized in
 * place rather than clamped or bounced.
 *
 * The state lives in an explicitly owned Simulation value that is passed
 * by reference to the proximity index, the path search, and the renderer,
 * which keeps the core testable without a window.
 */

use nannou::prelude::*;

use crate::params::SimulationParams;
use crate::point::Point;

// The rectangular region points move within, in the window's centered
// coordinates. Exiting it triggers a respawn.
#[derive(Clone, Copy, Debug)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Point2) -> bool {
        position.x.abs() <= self.width / 2.0 && position.y.abs() <= self.height / 2.0
    }
}

pub struct Simulation {
    pub points: Vec<Point>,
    pub arena: Arena,
}

impl Simulation {
    pub fn new(params: &SimulationParams, arena: Arena) -> Self {
        let points = (0..params.num_points)
            .map(|_| Point::spawn(arena, params))
            .collect();
        Self { points, arena }
    }

    // Respawn every point. Also applied when the configured point count
    // changes, since indices above the new count would otherwise dangle.
    pub fn reset(&mut self, params: &SimulationParams) {
        let arena = self.arena;
        self.points.clear();
        self.points
            .resize_with(params.num_points, || Point::spawn(arena, params));
    }

    // The arena tracks the window, so resize events land here. Points left
    // outside after a shrink respawn through the normal exit rule on the
    // next tick.
    pub fn set_arena(&mut self, arena: Arena) {
        self.arena = arena;
    }

    // Advance the simulation by one tick. Cannot fail; mutates the point
    // collection in place.
    pub fn advance(&mut self, params: &SimulationParams) {
        for point in &mut self.points {
            point.position += point.velocity;
            if !self.arena.contains(point.position) {
                *point = Point::spawn(self.arena, params);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_stay_inside_arena_after_advance() {
        let mut params = SimulationParams::default();
        params.num_points = 150;
        // High speeds against a small arena force plenty of respawns.
        params.speed_min = 20.0;
        params.speed_max = 40.0;
        let mut simulation = Simulation::new(&params, Arena::new(100.0, 80.0));

        for _ in 0..500 {
            simulation.advance(&params);
            for point in &simulation.points {
                assert!(simulation.arena.contains(point.position));
            }
        }
    }

    #[test]
    fn test_advance_keeps_point_count_stable() {
        let mut params = SimulationParams::default();
        params.num_points = 64;
        let mut simulation = Simulation::new(&params, Arena::new(200.0, 200.0));
        for _ in 0..100 {
            simulation.advance(&params);
        }
        assert_eq!(simulation.points.len(), 64);
    }

    #[test]
    fn test_reset_applies_new_point_count() {
        let mut params = SimulationParams::default();
        params.num_points = 32;
        let mut simulation = Simulation::new(&params, Arena::new(200.0, 200.0));
        params.num_points = 96;
        simulation.reset(&params);
        assert_eq!(simulation.points.len(), 96);
        for point in &simulation.points {
            assert!(simulation.arena.contains(point.position));
        }
    }

    #[test]
    fn test_in_bounds_point_moves_by_velocity() {
        let mut params = SimulationParams::default();
        params.num_points = 1;
        let mut simulation = Simulation::new(&params, Arena::new(1000.0, 1000.0));
        simulation.points[0].position = pt2(0.0, 0.0);
        simulation.points[0].velocity = vec2(3.0, -2.0);

        simulation.advance(&params);

        let moved = simulation.points[0].position;
        assert!((moved.x - 3.0).abs() < f32::EPSILON);
        assert!((moved.y + 2.0).abs() < f32::EPSILON);
    }
}
