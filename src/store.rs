// Bounded FIFO of live particles. Insertion order matters: when full, the oldest
// particle is dropped regardless of how much life it has left.

use crate::config::TrailConfig;
use crate::particle::Particle;
use rand::Rng;
use std::collections::VecDeque;
use std::f64::consts::PI;

pub struct ParticleStore {
    particles: VecDeque<Particle>,
    capacity: usize,
}

impl ParticleStore {
    pub fn new(capacity: usize) -> ParticleStore {
        ParticleStore {
            particles: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push_back(particle);
        if self.particles.len() > self.capacity {
            self.particles.pop_front();
        }
    }

    // Spawns a particle at (x, y) heading in a random direction with random speed,
    // radius and palette color
    pub fn spawn<R: Rng>(&mut self, x: f64, y: f64, config: &TrailConfig, rng: &mut R) {
        let angle = rng.gen::<f64>() * PI * 2.0;
        let speed = rng.gen::<f64>() * (config.max_speed - config.min_speed) + config.min_speed;
        let radius = rng.gen::<f64>() * (config.max_radius - config.min_radius) + config.min_radius;
        let color = config.palette[rng.gen_range(0, config.palette.len())];
        self.push(Particle::new(
            x,
            y,
            angle.cos() * speed,
            angle.sin() * speed,
            radius,
            color,
        ));
    }

    // Every unordered pair closer than `max_distance`, with the distance between them
    pub fn pairs_within(&self, max_distance: f64) -> Vec<(&Particle, &Particle, f64)> {
        let mut pairs = Vec::new();
        for i in 0..self.particles.len() {
            let a = &self.particles[i];
            for j in (i + 1)..self.particles.len() {
                let b = &self.particles[j];
                let d = a.distance_to(b);
                if d < max_distance {
                    pairs.push((a, b, d));
                }
            }
        }
        pairs
    }

    // Steps every particle newest to oldest, removing the expired ones in place and
    // handing each survivor to `visit` right after it moves
    pub fn advance<F, E>(&mut self, friction: f64, decay: f64, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&Particle) -> Result<(), E>,
    {
        for i in (0..self.particles.len()).rev() {
            if !self.particles[i].step(friction, decay) {
                self.particles.remove(i);
                continue;
            }
            visit(&self.particles[i])?;
        }
        Ok(())
    }
}
