// The cursor trail: all of the effect's mutable state in one place, driven by
// pointer moves and one frame() call per display refresh

use crate::config::TrailConfig;
use crate::error::TrailError;
use crate::pointer::PointerTracker;
use crate::renderer::{self, Painter};
use crate::store::ParticleStore;
use rand::rngs::ThreadRng;
use rand::Rng;

pub struct CursorTrail<R: Rng = ThreadRng> {
    pub config: TrailConfig,
    pub store: ParticleStore,
    pub pointer: PointerTracker,
    rng: R,
}

impl CursorTrail<ThreadRng> {
    pub fn new(config: TrailConfig) -> Self {
        CursorTrail::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> CursorTrail<R> {
    pub fn with_rng(config: TrailConfig, rng: R) -> Self {
        CursorTrail {
            store: ParticleStore::new(config.capacity),
            pointer: PointerTracker::new(config.spawn_interval_ms),
            config,
            rng,
        }
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, now_ms: f64) {
        if self.pointer.record_move(x, y, now_ms) {
            self.spawn(x, y);
        }
    }

    pub fn spawn(&mut self, x: f64, y: f64) {
        self.store.spawn(x, y, &self.config, &mut self.rng);
    }

    // One display refresh: clear, links, particles (stepped newest first), halo
    pub fn frame<P: Painter>(&mut self, painter: &mut P) -> Result<(), TrailError> {
        painter.clear();
        renderer::draw_links(painter, &self.store, &self.config)?;

        let config = &self.config;
        self.store.advance(config.friction, config.decay, |p| {
            renderer::draw_particle(painter, p, config)
        })?;

        if let Some(center) = self.pointer.halo_position() {
            renderer::draw_halo(painter, center, config)?;
        }
        Ok(())
    }
}
