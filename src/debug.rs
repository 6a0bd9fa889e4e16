/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance
 * metrics and per-frame simulation statistics shown in the overlay.
 */

use std::time::Duration;

// Debug information to display
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks_last_frame: usize,
    pub connection_count: usize,
    pub nodes_expanded: usize,
    pub path_nodes: usize,
    pub path_length: f32,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            ticks_last_frame: 0,
            connection_count: 0,
            nodes_expanded: 0,
            path_nodes: 0,
            path_length: 0.0,
        }
    }
}
