#![deny(unsafe_code)]
//! Core types for the disintegrate particle effect.
//!
//! Provides the [`Field`] that samples an image into [`Particle`]s, the
//! [`Pointer`] they are repelled by, the [`Effect`] and [`Painter`] traits the
//! browser and CPU renderers plug into, [`Bitmap`] sampling surfaces,
//! [`FieldParams`] configuration and the seedable [`Xorshift64`] PRNG.

pub mod bitmap;
pub mod color;
pub mod effect;
pub mod error;
pub mod field;
pub mod painter;
pub mod params;
pub mod particle;
pub mod pointer;
pub mod prng;

pub use bitmap::Bitmap;
pub use color::Color;
pub use effect::Effect;
pub use error::ScatterError;
pub use field::Field;
pub use painter::Painter;
pub use params::FieldParams;
pub use particle::Particle;
pub use pointer::Pointer;
pub use prng::Xorshift64;
