//! The particle field: canvas-sized simulation state.
//!
//! A [`Field`] owns the surface dimensions, the sampled particles, the live
//! pointer and the scatter PRNG. It is built empty with [`Field::new`],
//! populated exactly once by [`Field::init`] from a sampling surface, then
//! driven through the [`Effect`] trait every frame.

use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::effect::Effect;
use crate::error::ScatterError;
use crate::painter::Painter;
use crate::params::FieldParams;
use crate::particle::Particle;
use crate::pointer::Pointer;
use crate::prng::Xorshift64;
use serde_json::Value;

/// Simulation state for one disintegrating image.
#[derive(Debug, Clone)]
pub struct Field {
    width: usize,
    height: usize,
    params: FieldParams,
    particles: Vec<Particle>,
    pointer: Pointer,
    rng: Xorshift64,
    initialized: bool,
}

impl Field {
    /// Creates an empty field covering a `width × height` surface.
    ///
    /// Returns `ScatterError::InvalidDimensions` if either dimension is zero,
    /// or `ScatterError::InvalidParam` if `params` fails validation.
    pub fn new(width: usize, height: usize, params: FieldParams, seed: u64) -> Result<Self, ScatterError> {
        if width == 0 || height == 0 {
            return Err(ScatterError::InvalidDimensions);
        }
        params.validate()?;
        Ok(Self {
            width,
            height,
            params,
            particles: Vec::new(),
            pointer: Pointer::new(params.radius),
            rng: Xorshift64::new(seed),
            initialized: false,
        })
    }

    /// Samples `surface` on a `gap`-spaced grid and creates one particle per
    /// opaque sample, in row-major scan order.
    ///
    /// `surface` is the readback of the sampling surface: the source image
    /// already drawn at its centered offset onto a transparent surface of the
    /// field's size. Returns the number of particles created.
    ///
    /// Fails with `ScatterError::AlreadyInitialized` on a second call and
    /// `ScatterError::DimensionMismatch` if `surface` is not `width × height`.
    pub fn init(&mut self, surface: &Bitmap) -> Result<usize, ScatterError> {
        if self.initialized {
            return Err(ScatterError::AlreadyInitialized(self.particles.len()));
        }
        if surface.width() != self.width || surface.height() != self.height {
            return Err(ScatterError::DimensionMismatch {
                expected_w: self.width,
                expected_h: self.height,
                got_w: surface.width(),
                got_h: surface.height(),
            });
        }

        let gap = self.params.gap;
        let (w, h) = (self.width as f64, self.height as f64);
        let pixels = surface.pixels();
        let mut particles = Vec::new();

        for y in (0..self.height).step_by(gap) {
            for x in (0..self.width).step_by(gap) {
                let index = (y * self.width + x) * 4;
                let Some(&[r, g, b, a]) = pixels.get(index..index + 4) else {
                    continue;
                };
                if a > 0 {
                    let color = Color::from_rgba([r, g, b, a]);
                    particles.push(Particle::new(x, y, color, &self.params, w, h, &mut self.rng));
                }
            }
        }

        self.particles = particles;
        self.initialized = true;

        if self.particles.is_empty() {
            log::warn!(
                "sampled no opaque pixels from {}x{} surface; effect is empty",
                self.width,
                self.height
            );
        } else {
            log::debug!(
                "sampled {} particles from {}x{} surface at gap {}",
                self.particles.len(),
                self.width,
                self.height,
                gap
            );
        }
        Ok(self.particles.len())
    }

    /// Updates the surface dimensions.
    ///
    /// Particles keep their origins; the image is not re-sampled. Later warps
    /// scatter into the new bounds.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), ScatterError> {
        if width == 0 || height == 0 {
            return Err(ScatterError::InvalidDimensions);
        }
        log::debug!(
            "resize {}x{} -> {}x{} ({} particles keep their origins)",
            self.width,
            self.height,
            width,
            height,
            self.particles.len()
        );
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Returns the pointer to its "not yet moved" state.
    pub fn clear_pointer(&mut self) {
        self.pointer.clear();
    }

    /// Surface width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sampling stride.
    pub fn gap(&self) -> usize {
        self.params.gap
    }

    /// Effective parameters.
    pub fn field_params(&self) -> &FieldParams {
        &self.params
    }

    /// Particles in sampling scan order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles; fixed once `init` has run.
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Live pointer state.
    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    /// Whether `init` has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl Effect for Field {
    fn update(&mut self) {
        let pointer = self.pointer;
        for particle in &mut self.particles {
            particle.update(&pointer);
        }
    }

    fn draw(&self, painter: &mut dyn Painter) {
        for particle in &self.particles {
            let pos = particle.position();
            painter.fill_square(pos.x, pos.y, particle.size(), particle.color());
        }
    }

    fn warp(&mut self) {
        let (w, h) = (self.width as f64, self.height as f64);
        let ease = self.params.warp_ease;
        for particle in &mut self.particles {
            particle.warp(w, h, ease, &mut self.rng);
        }
        log::info!("warped {} particles", self.particles.len());
    }

    fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer.move_to(x, y);
    }

    fn params(&self) -> Value {
        self.params.to_json()
    }

    fn param_schema(&self) -> Value {
        FieldParams::schema()
    }
}
