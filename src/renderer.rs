// Draw passes for the trail, written against a small Painter trait so the canvas
// calls stay in one place. Surface implements it with the 2D canvas context.

use crate::config::TrailConfig;
use crate::error::TrailError;
use crate::particle::Particle;
use crate::store::ParticleStore;
use crate::surface::Surface;
use glm::DVec2;
use std::f64::consts::PI;
use wasm_bindgen::JsValue;

// Halo gradient, center outwards: amber, faint purple, transparent cyan
const HALO_STOPS: [(f32, &str); 3] = [
    (0.0, "rgba(245,158,11,0.07)"),
    (0.5, "rgba(192,132,252,0.03)"),
    (1.0, "rgba(34,211,238,0)"),
];

pub trait Painter {
    // Wipes the whole logical surface
    fn clear(&mut self);
    fn stroke_line(&mut self, from: DVec2, to: DVec2, style: &str, width: f64) -> Result<(), TrailError>;
    fn fill_circle(&mut self, center: DVec2, radius: f64, style: &str) -> Result<(), TrailError>;
    // Circle filled with a radial gradient running from `center` out to `radius`
    fn fill_radial(&mut self, center: DVec2, radius: f64, stops: &[(f32, &str)]) -> Result<(), TrailError>;
}

impl Painter for Surface {
    fn clear(&mut self) {
        let (width, height) = self.geometry.logical_size();
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, style: &str, width: f64) -> Result<(), TrailError> {
        self.context.set_stroke_style(&JsValue::from_str(style));
        self.context.set_line_width(width);
        self.context.begin_path();
        self.context.move_to(from.x, from.y);
        self.context.line_to(to.x, to.y);
        self.context.stroke();
        Ok(())
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, style: &str) -> Result<(), TrailError> {
        self.context.set_fill_style(&JsValue::from_str(style));
        self.context.begin_path();
        self.context.arc(center.x, center.y, radius, 0.0, PI * 2.0)?;
        self.context.fill();
        Ok(())
    }

    fn fill_radial(&mut self, center: DVec2, radius: f64, stops: &[(f32, &str)]) -> Result<(), TrailError> {
        let gradient = self
            .context
            .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)?;
        for (offset, color) in stops {
            gradient.add_color_stop(*offset, color)?;
        }
        self.context.set_fill_style(&gradient);
        self.context.begin_path();
        self.context.arc(center.x, center.y, radius, 0.0, PI * 2.0)?;
        self.context.fill();
        Ok(())
    }
}

// Connects every pair of particles closer than the link distance. Lines fade with
// distance and with the weaker of the two lives. Returns how many were drawn.
pub fn draw_links<P: Painter>(
    painter: &mut P,
    store: &ParticleStore,
    config: &TrailConfig,
) -> Result<usize, TrailError> {
    let pairs = store.pairs_within(config.link_distance);
    for (a, b, distance) in &pairs {
        let alpha = (1.0 - distance / config.link_distance) * a.life.min(b.life) * config.link_alpha;
        let style = a.color.blend(b.color).rgba(alpha);
        painter.stroke_line(a.pos, b.pos, &style, config.link_width)?;
    }
    Ok(pairs.len())
}

// Soft glow first, then the solid core on top
pub fn draw_particle<P: Painter>(painter: &mut P, p: &Particle, config: &TrailConfig) -> Result<(), TrailError> {
    let alpha = p.alpha(config.core_alpha);
    let size = p.size();

    let glow_inner = p.color.rgba(alpha * config.glow_alpha);
    let glow_outer = p.color.rgba(0.0);
    painter.fill_radial(
        p.pos,
        size * config.glow_scale,
        &[(0.0, glow_inner.as_str()), (1.0, glow_outer.as_str())],
    )?;

    painter.fill_circle(p.pos, size, &p.color.rgba(alpha))
}

pub fn draw_halo<P: Painter>(painter: &mut P, center: DVec2, config: &TrailConfig) -> Result<(), TrailError> {
    painter.fill_radial(center, config.halo_radius, &HALO_STOPS)
}


#[cfg(test)]
mod tests {
    use super::testing::{DrawCall, RecordingPainter};
    use super::*;
    use crate::color::{Color, PALETTE};

    #[test]
    fn link_alpha_and_color() {
        let config = TrailConfig::default();
        let mut store = ParticleStore::new(config.capacity);
        store.push(Particle::new(0.0, 0.0, 0.0, 0.0, 2.0, PALETTE[0]));
        let mut faded = Particle::new(55.0, 0.0, 0.0, 0.0, 2.0, PALETTE[1]);
        faded.life = 0.5;
        store.push(faded);

        let mut painter = RecordingPainter::default();
        assert_eq!(draw_links(&mut painter, &store, &config).unwrap(), 1);
        match &painter.calls[0] {
            DrawCall::Line { style, width, .. } => {
                // (1 - 55/110) * 0.5 * 0.18
                assert_eq!(style, &Color::rgb(221, 161, 144).rgba(0.5 * 0.5 * 0.18));
                assert_eq!(*width, 0.6);
            }
            other => panic!("expected a line, got {:?}", other),
        }
    }

    #[test]
    fn particle_draws_glow_then_core() {
        let config = TrailConfig::default();
        let p = Particle::new(10.0, 20.0, 0.0, 0.0, 4.0, PALETTE[2]);
        let mut painter = RecordingPainter::default();
        draw_particle(&mut painter, &p, &config).unwrap();

        assert_eq!(painter.calls.len(), 2);
        match &painter.calls[0] {
            DrawCall::Radial { center, radius, stops } => {
                assert_eq!(*center, glm::vec2(10.0, 20.0));
                assert!((radius - 20.0).abs() < 1e-9);
                assert_eq!(stops[1].1, "rgba(34,211,238,0)");
            }
            other => panic!("expected glow, got {:?}", other),
        }
        match &painter.calls[1] {
            DrawCall::Circle { radius, style, .. } => {
                assert!((radius - 4.0).abs() < 1e-9);
                assert_eq!(style, "rgba(34,211,238,0.85)");
            }
            other => panic!("expected core, got {:?}", other),
        }
    }

    #[test]
    fn halo_uses_three_stops() {
        let config = TrailConfig::default();
        let mut painter = RecordingPainter::default();
        draw_halo(&mut painter, glm::vec2(5.0, 5.0), &config).unwrap();
        match &painter.calls[0] {
            DrawCall::Radial { radius, stops, .. } => {
                assert_eq!(*radius, 60.0);
                assert_eq!(stops.len(), 3);
                assert_eq!(stops[0].1, "rgba(245,158,11,0.07)");
            }
            other => panic!("expected halo, got {:?}", other),
        }
    }
}
