extern crate nalgebra_glm as glm;

mod app;
mod color;
mod config;
mod error;
mod particle;
mod pointer;
mod renderer;
mod store;
mod surface;
mod trail;
mod utils;

use wasm_bindgen::prelude::*;

pub use color::{Color, PALETTE};
pub use config::TrailConfig;
pub use error::TrailError;
pub use particle::Particle;
pub use pointer::PointerTracker;
pub use renderer::{draw_halo, draw_links, draw_particle, Painter};
pub use store::ParticleStore;
pub use surface::{ensure_surface, Surface, SurfaceGeometry, Viewport};
pub use trail::CursorTrail;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Runs when the module is instantiated. A page without a usable canvas just
// doesn't get the effect.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    utils::set_panic_hook();
    utils::init_logging();
    if let Err(e) = app::attach(TrailConfig::default()) {
        log::warn!("cursor trail disabled: {}", e);
    }
    Ok(())
}
