/*
 * Point Module
 *
 * This module defines the Point struct, the element of the simulated swarm.
 * A point is pure state: a position and a per-tick velocity. Its identity
 * is its index in the Simulation's point vector, which never changes while
 * the simulation runs. Points that leave the arena are respawned in place
 * with a fresh random position and velocity.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::{SimulationParams, VelocityModel};
use crate::simulation::Arena;

#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub position: Point2,
    pub velocity: Vec2,
}

impl Point {
    // Spawn a point at a uniformly random position inside the arena with a
    // velocity drawn from the configured generation strategy.
    pub fn spawn(arena: Arena, params: &SimulationParams) -> Self {
        let mut rng = rand::thread_rng();
        let half_width = arena.width / 2.0;
        let half_height = arena.height / 2.0;

        let position = pt2(
            rng.gen_range(-half_width..=half_width),
            rng.gen_range(-half_height..=half_height),
        );

        Self {
            position,
            velocity: random_velocity(params, &mut rng),
        }
    }
}

// Draw a velocity according to the configured generation strategy.
fn random_velocity(params: &SimulationParams, rng: &mut impl Rng) -> Vec2 {
    match params.velocity_model {
        VelocityModel::Polar => {
            let heading = rng.gen_range(0.0..TAU);
            let speed = rng.gen_range(params.speed_min..=params.speed_max);
            vec2(heading.cos(), heading.sin()) * speed
        }
        VelocityModel::Axial => vec2(
            rng.gen_range(-params.speed_max..=params.speed_max),
            rng.gen_range(-params.speed_max..=params.speed_max),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_lands_inside_arena() {
        let arena = Arena::new(400.0, 300.0);
        let params = SimulationParams::default();
        for _ in 0..200 {
            let point = Point::spawn(arena, &params);
            assert!(arena.contains(point.position));
        }
    }

    #[test]
    fn test_polar_speed_stays_in_configured_range() {
        let mut params = SimulationParams::default();
        params.velocity_model = VelocityModel::Polar;
        params.speed_min = 0.5;
        params.speed_max = 1.0;
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let velocity = random_velocity(&params, &mut rng);
            let speed = velocity.length();
            assert!(speed >= 0.5 - 1e-4 && speed <= 1.0 + 1e-4);
        }
    }

    #[test]
    fn test_axial_components_stay_in_symmetric_range() {
        let mut params = SimulationParams::default();
        params.velocity_model = VelocityModel::Axial;
        params.speed_max = 2.0;
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let velocity = random_velocity(&params, &mut rng);
            assert!(velocity.x.abs() <= 2.0 && velocity.y.abs() <= 2.0);
        }
    }
}
