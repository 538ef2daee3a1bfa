//! A single particle and the physics steps applied to it each tick.
//!
//! The steps are exposed individually so [`crate::field::ParticleField::tick`]
//! can apply them in a fixed order and tests can exercise each one in
//! isolation.

#[cfg(test)]
#[path = "particle_test.rs"]
mod particle_test;

use std::f64::consts::TAU;

use rand::Rng;

use crate::consts::{BOUNCE_RESTITUTION, DAMPING, MIN_RADIUS, RADIUS_SPAN, REPULSION_STRENGTH, WANDER_JITTER};
use crate::point::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Disc radius in pixels, fixed at spawn.
    pub radius: f64,
    /// Current wander heading in radians.
    pub wander_angle: f64,
}

impl Particle {
    /// Spawn at a uniform position inside `width` x `height` with a small
    /// random velocity in `[-base_speed/2, base_speed/2)` per axis.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, base_speed: f64) -> Self {
        Self {
            x: rng.random::<f64>() * width,
            y: rng.random::<f64>() * height,
            vx: (rng.random::<f64>() - 0.5) * base_speed,
            vy: (rng.random::<f64>() - 0.5) * base_speed,
            radius: rng.random::<f64>() * RADIUS_SPAN + MIN_RADIUS,
            wander_angle: rng.random::<f64>() * TAU,
        }
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }

    /// Random-walk the heading, then push along it.
    pub fn wander<R: Rng + ?Sized>(&mut self, rng: &mut R, strength: f64) {
        self.wander_angle += (rng.random::<f64>() - 0.5) * strength * WANDER_JITTER;
        self.vx += self.wander_angle.cos() * strength;
        self.vy += self.wander_angle.sin() * strength;
    }

    /// Push away from `pointer` with linear falloff inside `radius`.
    pub fn repel(&mut self, pointer: Point, radius: f64) {
        let dx = pointer.x - self.x;
        let dy = pointer.y - self.y;
        let distance = dx.hypot(dy);
        if distance >= radius {
            return;
        }
        let force = (radius - distance) / radius;
        let angle = dy.atan2(dx);
        self.vx -= angle.cos() * force * REPULSION_STRENGTH;
        self.vy -= angle.sin() * force * REPULSION_STRENGTH;
    }

    /// Rescale the velocity so its magnitude is at most `max_speed`.
    pub fn clamp_speed(&mut self, max_speed: f64) {
        let speed = self.speed();
        if speed > max_speed {
            self.vx = self.vx / speed * max_speed;
            self.vy = self.vy / speed * max_speed;
        }
    }

    /// Advance position by one tick of velocity.
    pub fn integrate(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }

    pub fn damp(&mut self) {
        self.vx *= DAMPING;
        self.vy *= DAMPING;
    }

    /// Reflect off the arena edges.
    ///
    /// An axis that left `[0, extent]` has its velocity inverted and damped
    /// and its position clamped back inside; the heading is re-randomized.
    /// Returns whether any axis bounced.
    pub fn bounce<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f64, height: f64) -> bool {
        let mut bounced = false;
        if self.x < 0.0 || self.x > width {
            self.vx *= -BOUNCE_RESTITUTION;
            self.wander_angle = rng.random::<f64>() * TAU;
            self.x = self.x.max(0.0).min(width.max(0.0));
            bounced = true;
        }
        if self.y < 0.0 || self.y > height {
            self.vy *= -BOUNCE_RESTITUTION;
            self.wander_angle = rng.random::<f64>() * TAU;
            self.y = self.y.max(0.0).min(height.max(0.0));
            bounced = true;
        }
        bounced
    }
}
