// Tracks the last known pointer position and throttles particle spawning

use glm::DVec2;

pub struct PointerTracker {
    pub pos: DVec2,
    last_spawn_ms: Option<f64>,
    spawn_interval_ms: f64,
}

impl PointerTracker {
    // Parked well off-screen until the first real move so the halo stays hidden
    pub const OFFSCREEN: f64 = -200.0;

    pub fn new(spawn_interval_ms: f64) -> Self {
        PointerTracker {
            pos: glm::vec2(PointerTracker::OFFSCREEN, PointerTracker::OFFSCREEN),
            last_spawn_ms: None,
            spawn_interval_ms,
        }
    }

    // Always records the position. Returns true when enough time has passed since
    // the previous spawn for this move to spawn a particle.
    pub fn record_move(&mut self, x: f64, y: f64, now_ms: f64) -> bool {
        self.pos = glm::vec2(x, y);
        if let Some(last) = self.last_spawn_ms {
            if now_ms - last < self.spawn_interval_ms {
                return false;
            }
        }
        self.last_spawn_ms = Some(now_ms);
        true
    }

    pub fn halo_position(&self) -> Option<DVec2> {
        if self.pos.x > 0.0 && self.pos.y > 0.0 {
            Some(self.pos)
        } else {
            None
        }
    }
}
