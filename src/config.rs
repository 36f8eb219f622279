// Tunables for the cursor trail. Constructed once when the trail is attached and
// never mutated afterwards.

use crate::color::{Color, PALETTE};

#[derive(Clone, Debug)]
pub struct TrailConfig {
    /// Maximum number of live particles; spawning past it evicts the oldest.
    pub capacity: usize,
    /// Particles closer than this (logical px) get a connecting line.
    pub link_distance: f64,
    pub link_alpha: f64,
    pub link_width: f64,
    /// Life lost per frame. Life starts at 1.0.
    pub decay: f64,
    /// Velocity multiplier applied every frame.
    pub friction: f64,
    /// Minimum time between spawns, in milliseconds.
    pub spawn_interval_ms: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub glow_scale: f64,
    pub glow_alpha: f64,
    pub core_alpha: f64,
    pub halo_radius: f64,
    pub max_device_pixel_ratio: f64,
    pub canvas_id: &'static str,
    pub z_index: u32,
    pub palette: &'static [Color],
}

impl Default for TrailConfig {
    fn default() -> Self {
        TrailConfig {
            capacity: 55,
            link_distance: 110.0,
            link_alpha: 0.18,
            link_width: 0.6,
            decay: 0.018,
            friction: 0.975,
            spawn_interval_ms: 16.0,
            min_speed: 0.3,
            max_speed: 1.5,
            min_radius: 2.0,
            max_radius: 4.5,
            glow_scale: 5.0,
            glow_alpha: 0.25,
            core_alpha: 0.85,
            halo_radius: 60.0,
            max_device_pixel_ratio: 2.0,
            canvas_id: "tri-cursor-canvas",
            z_index: 9998,
            palette: &PALETTE,
        }
    }
}

impl TrailConfig {
    // Inline style for a full-viewport overlay that never eats pointer events
    pub fn canvas_css(&self) -> String {
        format!(
            "position:fixed;inset:0;z-index:{};pointer-events:none;",
            self.z_index
        )
    }
}
