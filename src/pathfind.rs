/*
 * Path Search Module
 *
 * This module runs an A* search over the proximity graph implied by the
 * link radius: any two points within the radius are adjacent, and the edge
 * cost is the true Euclidean distance between them. The graph is never
 * materialized; edge existence is tested with the same squared-distance
 * rule the proximity index uses, against the points' current positions.
 *
 * The search state is a set of flat arrays indexed by point id. A frontier
 * point is picked by a linear scan over the open flags each iteration,
 * which is O(N^2) per search overall and perfectly adequate at a few
 * hundred points. The whole search re-runs from scratch every frame, so
 * the drawn path follows the moving points.
 */

use log::warn;
use nannou::prelude::*;

// An ordered polyline from start to goal, plus its cumulative Euclidean
// length. Empty when no path exists or none was requested.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub points: Vec<Point2>,
    pub length: f32,
}

impl Path {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// A* working state. The arrays are kept around between searches to avoid
// reallocation, but reset() reinitializes every cell before each run:
// stale closed flags from a previous frame would silently corrupt the
// search.
#[derive(Default)]
pub struct PathSearch {
    came_from: Vec<Option<usize>>,
    g_score: Vec<f32>,
    f_score: Vec<f32>,
    in_open: Vec<bool>,
    in_closed: Vec<bool>,
    nodes_expanded: usize,
}

impl PathSearch {
    pub fn new() -> Self {
        Self::default()
    }

    // Number of points finalized during the most recent search.
    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    fn reset(&mut self, count: usize) {
        self.came_from.clear();
        self.came_from.resize(count, None);
        self.g_score.clear();
        self.g_score.resize(count, f32::INFINITY);
        self.f_score.clear();
        self.f_score.resize(count, f32::INFINITY);
        self.in_open.clear();
        self.in_open.resize(count, false);
        self.in_closed.clear();
        self.in_closed.resize(count, false);
        self.nodes_expanded = 0;
    }

    // Find the shortest path from start to goal over the current point
    // layout. Returns an empty path when the two are not connected through
    // any chain of edges within link_radius; that is a normal outcome, not
    // an error.
    pub fn shortest_path(
        &mut self,
        positions: &[Point2],
        start: usize,
        goal: usize,
        link_radius: f32,
    ) -> Path {
        let count = positions.len();
        self.reset(count);
        if start >= count || goal >= count {
            return Path::empty();
        }

        let radius_sq = link_radius * link_radius;

        self.g_score[start] = 0.0;
        self.f_score[start] = positions[start].distance(positions[goal]);
        self.in_open[start] = true;

        loop {
            // Pick the open point with the smallest estimated total cost.
            let mut current = None;
            let mut best = f32::INFINITY;
            for index in 0..count {
                if self.in_open[index] && self.f_score[index] < best {
                    best = self.f_score[index];
                    current = Some(index);
                }
            }

            // Frontier exhausted without reaching the goal: no path.
            let Some(current) = current else {
                return Path::empty();
            };

            if current == goal {
                return self.reconstruct(positions, goal);
            }

            self.in_open[current] = false;
            self.in_closed[current] = true;
            self.nodes_expanded += 1;

            // Relax every non-closed point within the link radius. The
            // Euclidean heuristic never overestimates straight-line edge
            // costs, so the first goal pop is optimal.
            for next in 0..count {
                if next == current || self.in_closed[next] {
                    continue;
                }
                let dist_sq = positions[current].distance_squared(positions[next]);
                if dist_sq > radius_sq {
                    continue;
                }

                let tentative = self.g_score[current] + dist_sq.sqrt();
                if tentative < self.g_score[next] {
                    self.came_from[next] = Some(current);
                    self.g_score[next] = tentative;
                    self.f_score[next] = tentative + positions[next].distance(positions[goal]);
                    self.in_open[next] = true;
                }
            }
        }
    }

    // Walk predecessor links backward from the goal, then reverse into
    // start-to-goal order and accumulate the polyline length. A chain
    // longer than the point count means the predecessor state is corrupt;
    // the walk stops there and the frame gets an empty path instead of an
    // unbounded loop.
    fn reconstruct(&self, positions: &[Point2], goal: usize) -> Path {
        let mut indices = vec![goal];
        let mut cursor = goal;
        while let Some(previous) = self.came_from[cursor] {
            if indices.len() > positions.len() {
                warn!("path reconstruction exceeded point count; discarding this frame's path");
                return Path::empty();
            }
            indices.push(previous);
            cursor = previous;
        }
        indices.reverse();

        let points: Vec<Point2> = indices.iter().map(|&index| positions[index]).collect();
        let length = points
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum();

        Path { points, length }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Exhaustive shortest path over the same threshold graph, for
    // cross-checking A* on small layouts.
    fn brute_force_shortest(
        positions: &[Point2],
        start: usize,
        goal: usize,
        link_radius: f32,
    ) -> Option<f32> {
        fn explore(
            positions: &[Point2],
            radius_sq: f32,
            goal: usize,
            current: usize,
            visited: &mut Vec<bool>,
            cost: f32,
            best: &mut Option<f32>,
        ) {
            if current == goal {
                *best = Some(best.map_or(cost, |b: f32| b.min(cost)));
                return;
            }
            for next in 0..positions.len() {
                if visited[next] {
                    continue;
                }
                let dist_sq = positions[current].distance_squared(positions[next]);
                if dist_sq > radius_sq {
                    continue;
                }
                visited[next] = true;
                explore(positions, radius_sq, goal, next, visited, cost + dist_sq.sqrt(), best);
                visited[next] = false;
            }
        }

        let mut visited = vec![false; positions.len()];
        visited[start] = true;
        let mut best = None;
        explore(
            positions,
            link_radius * link_radius,
            goal,
            start,
            &mut visited,
            0.0,
            &mut best,
        );
        best
    }

    #[test]
    fn test_two_hop_detour_when_direct_edge_exceeds_threshold() {
        // Direct distance start-goal is sqrt(200) ~ 14.14, above the 13
        // threshold, so the path must detour through the corner point.
        let positions = vec![pt2(0.0, 0.0), pt2(10.0, 0.0), pt2(10.0, 10.0)];
        let mut search = PathSearch::new();
        let path = search.shortest_path(&positions, 0, 2, 13.0);

        assert_eq!(
            path.points,
            vec![pt2(0.0, 0.0), pt2(10.0, 0.0), pt2(10.0, 10.0)]
        );
        assert!((path.length - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_direct_edge_wins_when_threshold_allows_it() {
        let positions = vec![pt2(0.0, 0.0), pt2(10.0, 0.0), pt2(10.0, 10.0)];
        let mut search = PathSearch::new();
        let path = search.shortest_path(&positions, 0, 2, 15.0);

        assert_eq!(path.points, vec![pt2(0.0, 0.0), pt2(10.0, 10.0)]);
        assert!((path.length - 200.0_f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn test_disconnected_layout_yields_empty_path() {
        let positions = vec![
            pt2(0.0, 0.0),
            pt2(5.0, 0.0),
            pt2(1000.0, 0.0),
            pt2(1005.0, 0.0),
        ];
        let mut search = PathSearch::new();
        let path = search.shortest_path(&positions, 0, 3, 10.0);

        assert!(path.is_empty());
        assert_eq!(path.length, 0.0);
    }

    #[test]
    fn test_start_equal_goal_is_a_single_point_path() {
        let positions = vec![pt2(3.0, 4.0), pt2(30.0, 40.0)];
        let mut search = PathSearch::new();
        let path = search.shortest_path(&positions, 0, 0, 10.0);

        assert_eq!(path.points, vec![pt2(3.0, 4.0)]);
        assert_eq!(path.length, 0.0);
    }

    #[test]
    fn test_out_of_range_endpoints_yield_empty_path() {
        let positions = vec![pt2(0.0, 0.0), pt2(1.0, 0.0)];
        let mut search = PathSearch::new();
        assert!(search.shortest_path(&positions, 0, 5, 10.0).is_empty());
        assert!(search.shortest_path(&[], 0, 0, 10.0).is_empty());
    }

    #[test]
    fn test_matches_brute_force_on_a_hand_picked_layout() {
        // Eight points with several competing routes across the middle.
        let positions = vec![
            pt2(0.0, 0.0),
            pt2(8.0, 3.0),
            pt2(7.0, -4.0),
            pt2(15.0, 0.0),
            pt2(14.0, 8.0),
            pt2(22.0, 4.0),
            pt2(21.0, -3.0),
            pt2(29.0, 0.0),
        ];
        let link_radius = 10.0;
        let mut search = PathSearch::new();
        let path = search.shortest_path(&positions, 0, 7, link_radius);
        let expected = brute_force_shortest(&positions, 0, 7, link_radius)
            .expect("layout should be connected");

        assert!(!path.is_empty());
        assert!((path.length - expected).abs() < 1e-3);
        assert_eq!(path.points.first(), Some(&positions[0]));
        assert_eq!(path.points.last(), Some(&positions[7]));
    }

    #[test]
    fn test_path_length_equals_sum_of_segment_distances() {
        let positions = vec![
            pt2(0.0, 0.0),
            pt2(4.0, 0.0),
            pt2(4.0, 3.0),
            pt2(8.0, 3.0),
        ];
        let mut search = PathSearch::new();
        let path = search.shortest_path(&positions, 0, 3, 4.5);

        assert_eq!(path.points.len(), 4);
        let summed: f32 = path
            .points
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum();
        assert!((path.length - summed).abs() < 1e-5);
        assert!((path.length - 11.0).abs() < 1e-4);
    }

    #[test]
    fn test_scratch_state_does_not_leak_between_searches() {
        let mut search = PathSearch::new();

        // First search over a connected layout.
        let connected = vec![pt2(0.0, 0.0), pt2(5.0, 0.0), pt2(10.0, 0.0)];
        let first = search.shortest_path(&connected, 0, 2, 6.0);
        assert_eq!(first.points.len(), 3);

        // Second search over a disconnected layout with the same scratch:
        // stale open/closed flags would fabricate a path here.
        let disconnected = vec![pt2(0.0, 0.0), pt2(100.0, 0.0), pt2(200.0, 0.0)];
        assert!(search.shortest_path(&disconnected, 0, 2, 6.0).is_empty());

        // And the connected layout still resolves identically afterwards.
        let again = search.shortest_path(&connected, 0, 2, 6.0);
        assert_eq!(again, first);
    }

    #[test]
    fn test_expanded_count_resets_per_search() {
        let positions = vec![pt2(0.0, 0.0), pt2(5.0, 0.0), pt2(10.0, 0.0)];
        let mut search = PathSearch::new();
        search.shortest_path(&positions, 0, 2, 6.0);
        let first_run = search.nodes_expanded();
        assert!(first_run > 0);

        search.shortest_path(&positions, 0, 0, 6.0);
        assert_eq!(search.nodes_expanded(), 0);
    }
}
