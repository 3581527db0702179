#![deny(unsafe_code)]
//! CPU rendering for the disintegrate effect.
//!
//! This crate sits between `disintegrate-core` (which defines `Field` and the
//! `Painter` trait) and the CLI. It provides an RGBA [`canvas::RgbaCanvas`]
//! painter, a [`headless`] frame driver, and PNG load/save behind the `png`
//! feature.

pub mod canvas;
pub mod headless;

#[cfg(feature = "png")]
pub mod snapshot;

pub use canvas::RgbaCanvas;
pub use headless::{play, render, sample_image, Script};
