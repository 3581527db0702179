//! A single sampled pixel and its spring-plus-repulsion integrator.
//!
//! Each frame a particle is pushed away from the pointer when the squared
//! distance to it falls below the pointer radius, damped by friction, and
//! pulled back toward its origin by `ease`:
//!
//! ```text
//! d² = |pointer - position|²
//! if d² < radius:
//!     velocity += (-radius / max(d², 1)) * (cos θ, sin θ),  θ = atan2(dy, dx)
//! velocity *= friction
//! position += velocity + (origin - position) * ease
//! ```
//!
//! The activation test compares a squared distance with a linear radius; the
//! resulting ~√radius pixel reach is the effect's look and is kept as is.

use crate::color::Color;
use crate::params::FieldParams;
use crate::pointer::Pointer;
use crate::prng::Xorshift64;
use glam::DVec2;

/// Lower bound on the squared pointer distance, keeping the force finite when
/// the pointer sits exactly on a particle.
pub const MIN_DISTANCE_SQUARED: f64 = 1.0;

/// One particle: immutable origin and color, mutable position, velocity, ease.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    position: DVec2,
    origin: DVec2,
    color: Color,
    size: f64,
    velocity: DVec2,
    ease: f64,
    friction: f64,
}

impl Particle {
    /// Creates a particle homed at the grid coordinate `(origin_x, origin_y)`.
    ///
    /// The starting position is uniform random inside `width × height`, so a
    /// freshly sampled image assembles itself over the first frames.
    pub fn new(
        origin_x: usize,
        origin_y: usize,
        color: Color,
        params: &FieldParams,
        width: f64,
        height: f64,
        rng: &mut Xorshift64,
    ) -> Self {
        Self {
            position: rng.next_point(width, height),
            origin: DVec2::new(origin_x as f64, origin_y as f64),
            color,
            size: params.gap as f64,
            velocity: DVec2::ZERO,
            ease: params.ease,
            friction: params.friction,
        }
    }

    /// Current position.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Home coordinate, fixed for the particle's lifetime.
    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    /// Current velocity.
    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    /// Sampled color.
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Side length of the painted square.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Current spring stiffness.
    pub fn ease(&self) -> f64 {
        self.ease
    }

    /// Velocity damping factor.
    pub fn friction(&self) -> f64 {
        self.friction
    }

    /// Advances the particle by one frame.
    pub fn update(&mut self, pointer: &Pointer) {
        if let Some(target) = pointer.position() {
            let delta = target - self.position;
            let distance_squared = delta.length_squared();
            let radius = pointer.radius();
            if distance_squared < radius {
                let force = -radius / distance_squared.max(MIN_DISTANCE_SQUARED);
                let angle = delta.y.atan2(delta.x);
                self.velocity.x += force * angle.cos();
                self.velocity.y += force * angle.sin();
            }
        }

        self.velocity *= self.friction;
        self.position += self.velocity + (self.origin - self.position) * self.ease;
    }

    /// Scatters the particle to a random point in `width × height` and lowers
    /// its stiffness to `warp_ease`. Nothing restores the previous ease.
    pub fn warp(&mut self, width: f64, height: f64, warp_ease: f64, rng: &mut Xorshift64) {
        self.position = rng.next_point(width, height);
        self.ease = warp_ease;
    }

    #[cfg(test)]
    pub(crate) fn place_at(&mut self, position: DVec2) {
        self.position = position;
    }
}
