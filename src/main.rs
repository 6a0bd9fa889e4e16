/*
 * Constellation
 *
 * A demo that animates a swarm of drifting points, draws proximity-based
 * connections between them, and in the Pathfinder variant runs an A*
 * search between two designated points over the ever-changing proximity
 * graph, drawing the resulting path every frame.
 *
 * Keys: F fullscreen, Space pause, R respawn, V cycle variant, D debug.
 */

use constellation::app;

fn main() {
    env_logger::init();
    log::info!("starting constellation demo");

    nannou::app(app::model).update(app::update).run();
}
