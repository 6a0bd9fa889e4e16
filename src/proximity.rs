/*
 * Proximity Index Module
 *
 * This module finds, for each point, its k nearest neighbors within the
 * link radius. The scan is brute force over every other point: O(N) per
 * query, O(N^2) for the whole map. At the few hundred points this demo
 * runs, that beats maintaining a spatial structure and keeps neighbor
 * sets deterministic for a given point layout.
 *
 * The candidate buffer keeps the k smallest distances seen so far by
 * replacing the current worst slot, not by sorting. Distances are compared
 * squared against the squared radius; the same rule decides edge existence
 * in the path search.
 */

use nannou::prelude::*;

// One neighbor hit: a non-owning reference to the neighbor point plus the
// squared distance to it. Valid only for the frame that computed it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeighborEntry {
    pub index: usize,
    pub dist_sq: f32,
}

// Fill `out` with up to `max_links` entries: the nearest other points
// within `link_radius` of the query point. Ties keep whichever candidate
// was scanned first; only a strictly smaller distance displaces a slot.
pub fn nearest_neighbors(
    positions: &[Point2],
    query: usize,
    link_radius: f32,
    max_links: usize,
    out: &mut Vec<NeighborEntry>,
) {
    out.clear();
    if max_links == 0 {
        return;
    }

    let radius_sq = link_radius * link_radius;
    for (index, candidate) in positions.iter().enumerate() {
        if index == query {
            continue;
        }
        let dist_sq = positions[query].distance_squared(*candidate);
        if dist_sq > radius_sq {
            continue;
        }

        if out.len() < max_links {
            out.push(NeighborEntry { index, dist_sq });
            continue;
        }

        // Buffer is full: replace the worst slot if this one is closer.
        let mut worst = 0;
        for slot in 1..out.len() {
            if out[slot].dist_sq > out[worst].dist_sq {
                worst = slot;
            }
        }
        if dist_sq < out[worst].dist_sq {
            out[worst] = NeighborEntry { index, dist_sq };
        }
    }
}

// Per-frame neighbor lists for every point, rebuilt from scratch each
// frame. Entry vectors are reused across frames to avoid reallocation,
// but their contents never survive a rebuild.
#[derive(Default)]
pub struct NeighborMap {
    entries: Vec<Vec<NeighborEntry>>,
}

impl NeighborMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rebuild(&mut self, positions: &[Point2], link_radius: f32, max_links: usize) {
        self.entries.resize_with(positions.len(), Vec::new);
        for (index, entries) in self.entries.iter_mut().enumerate() {
            nearest_neighbors(positions, index, link_radius, max_links, entries);
        }
    }

    pub fn of(&self, index: usize) -> &[NeighborEntry] {
        &self.entries[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[NeighborEntry])> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entries)| (index, entries.as_slice()))
    }

    pub fn total_connections(&self) -> usize {
        self.entries.iter().map(|entries| entries.len()).sum()
    }
}
