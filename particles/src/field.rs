//! The simulation core: everything that doesn't need a canvas element.
//!
//! Separated from [`crate::engine::Engine`] so it can be tested without
//! WASM/browser dependencies. Randomness is injected so tests can seed it.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use rand::Rng;
use rand::rngs::SmallRng;

use crate::config::{FieldConfig, MAX_PARTICLE_COUNT};
use crate::consts::CONNECTION_MAX_OPACITY;
use crate::particle::Particle;
use crate::point::Point;

/// A line to draw between two nearby particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from: Point,
    pub to: Point,
    /// Stroke opacity in `(0, CONNECTION_MAX_OPACITY]`.
    pub opacity: f64,
}

/// A fixed-size set of particles confined to a `width` x `height` arena.
pub struct ParticleField<R: Rng = SmallRng> {
    pub config: FieldConfig,
    pub particles: Vec<Particle>,
    pub width: f64,
    pub height: f64,
    /// Pointer position in arena coordinates; `None` when the pointer is away.
    pub pointer: Option<Point>,
    rng: R,
}

impl<R: Rng> ParticleField<R> {
    /// Create a field and populate it with `config.particle_count` particles,
    /// capped at [`MAX_PARTICLE_COUNT`] for configs that skipped validation.
    pub fn new(config: FieldConfig, width: f64, height: f64, rng: R) -> Self {
        let mut field = Self {
            config,
            particles: Vec::with_capacity(config.particle_count.min(MAX_PARTICLE_COUNT)),
            width: width.max(0.0),
            height: height.max(0.0),
            pointer: None,
            rng,
        };
        field.populate();
        field
    }

    /// Change the arena size. All particles are discarded and respawned when
    /// the size actually changes. Returns whether that happened.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        let width = width.max(0.0);
        let height = height.max(0.0);
        #[allow(clippy::float_cmp)]
        let unchanged = width == self.width && height == self.height;
        if unchanged {
            return false;
        }
        self.width = width;
        self.height = height;
        self.populate();
        log::debug!("particle field resized to {width}x{height}, respawned {}", self.particles.len());
        true
    }

    pub fn set_pointer(&mut self, pointer: Option<Point>) {
        self.pointer = pointer;
    }

    /// Advance every particle by one frame.
    ///
    /// Steps run per particle in this order: wander, pointer repulsion, speed
    /// clamp, integrate, damp, bounce.
    pub fn tick(&mut self) {
        let max_speed = self.config.max_speed();
        for particle in &mut self.particles {
            particle.wander(&mut self.rng, self.config.wander_strength);
            if let Some(pointer) = self.pointer {
                particle.repel(pointer, self.config.mouse_radius);
            }
            particle.clamp_speed(max_speed);
            particle.integrate();
            particle.damp();
            particle.bounce(&mut self.rng, self.width, self.height);
        }
    }

    /// Every unordered pair closer than the connection distance.
    #[must_use]
    pub fn connections(&self) -> Vec<Connection> {
        let limit = self.config.connection_distance;
        let mut out = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position().distance(b.position());
                if distance < limit {
                    out.push(Connection {
                        from: a.position(),
                        to: b.position(),
                        opacity: connection_opacity(distance, limit),
                    });
                }
            }
        }
        out
    }

    fn populate(&mut self) {
        let (width, height, speed) = (self.width, self.height, self.config.base_speed);
        self.particles.clear();
        let count = self.config.particle_count;
        if count > MAX_PARTICLE_COUNT {
            log::warn!("particle count {count} capped at {MAX_PARTICLE_COUNT}");
        }
        for _ in 0..count.min(MAX_PARTICLE_COUNT) {
            self.particles.push(Particle::spawn(&mut self.rng, width, height, speed));
        }
    }
}

/// Opacity for a connection of length `distance` under `limit`.
#[must_use]
pub fn connection_opacity(distance: f64, limit: f64) -> f64 {
    (1.0 - distance / limit) * CONNECTION_MAX_OPACITY
}
