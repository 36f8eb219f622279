// Simple particle struct to keep track of individual position, velocity, life, and color

use crate::color::Color;
use glm::DVec2;

#[derive(Copy, Clone, Debug)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    // Base radius, scaled down as life runs out
    pub radius: f64,
    pub life: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64, color: Color) -> Particle {
        Particle {
            pos: glm::vec2(pos_x, pos_y),
            vel: glm::vec2(vel_x, vel_y),
            radius,
            life: 1.0,
            color,
        }
    }

    // Advances one frame. Returns false once the particle has run out of life.
    pub fn step(&mut self, friction: f64, decay: f64) -> bool {
        self.pos += self.vel;
        self.vel *= friction;
        self.life -= decay;
        self.life > 0.0
    }

    pub fn size(&self) -> f64 {
        self.radius * (0.4 + 0.6 * self.life)
    }

    pub fn alpha(&self, core_alpha: f64) -> f64 {
        self.life * core_alpha
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        glm::distance(&self.pos, &other.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PALETTE;

    #[test]
    fn step_integrates_then_damps() {
        let mut p = Particle::new(10.0, 20.0, 1.0, -2.0, 3.0, PALETTE[2]);
        assert!(p.step(0.5, 0.25));
        assert_eq!(p.pos, glm::vec2(11.0, 18.0));
        assert_eq!(p.vel, glm::vec2(0.5, -1.0));
        assert_eq!(p.life, 0.75);
    }

    #[test]
    fn step_reports_expiry() {
        let mut p = Particle::new(0.0, 0.0, 0.0, 0.0, 3.0, PALETTE[0]);
        p.life = 0.01;
        assert!(!p.step(0.975, 0.018));
        assert!(p.life <= 0.0);
    }

    #[test]
    fn size_and_alpha_follow_life() {
        let mut p = Particle::new(0.0, 0.0, 0.0, 0.0, 4.0, PALETTE[0]);
        assert!((p.size() - 4.0).abs() < 1e-12);
        assert!((p.alpha(0.85) - 0.85).abs() < 1e-12);
        p.life = 0.5;
        assert!((p.size() - 2.8).abs() < 1e-12);
        assert!((p.alpha(0.85) - 0.425).abs() < 1e-12);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Particle::new(100.0, 100.0, 0.0, 0.0, 2.0, PALETTE[0]);
        let b = Particle::new(103.0, 104.0, 0.0, 0.0, 2.0, PALETTE[1]);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }
}
