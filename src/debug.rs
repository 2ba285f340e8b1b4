/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains frame metrics
 * displayed in the UI and the on-screen debug panel.
 */

use std::time::Duration;

// Debug information to display
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub delta_time: f32,
    pub frames: u64,
    pub respawns: u32,
}

impl DebugInfo {
    pub fn record_frame(&mut self, fps: f32, frame_time: Duration, delta_time: f32) {
        self.fps = fps;
        self.frame_time = frame_time;
        self.delta_time = delta_time;
        self.frames += 1;
    }

    pub fn frame_time_ms(&self) -> f64 {
        self.frame_time.as_secs_f64() * 1000.0
    }

    // Lines shown in the on-screen debug panel, top to bottom
    pub fn panel_lines(&self, fish_len: usize) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time_ms()),
            format!("Delta time: {:.2}", self.delta_time),
            format!("Frames: {}", self.frames),
            format!("Fish: {}", fish_len),
            format!("Respawns: {}", self.respawns),
        ]
    }
}
