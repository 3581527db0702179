//! Headless driver: sample an image, play frames, render the result.
//!
//! This is the off-browser counterpart of the animation loop, shared by the
//! CLI and tests so neither duplicates the setup sequence.

use crate::canvas::RgbaCanvas;
use disintegrate_core::{Bitmap, Effect, Field, FieldParams, Painter, ScatterError};

/// What happens during a headless run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Script {
    /// Number of `update` calls.
    pub frames: usize,
    /// Warp before this frame's update (0-based), if any.
    pub warp_at: Option<usize>,
    /// Fixed pointer position for the whole run.
    pub pointer: Option<(f64, f64)>,
}

/// Builds a `width × height` field from `image` drawn centered on a
/// transparent sampling surface.
pub fn sample_image(
    image: &Bitmap,
    width: usize,
    height: usize,
    params: FieldParams,
    seed: u64,
) -> Result<Field, ScatterError> {
    let surface = Bitmap::compose_centered(image, width, height)?;
    let mut field = Field::new(width, height, params, seed)?;
    field.init(&surface)?;
    Ok(field)
}

/// Plays `script` against `effect`.
pub fn play(effect: &mut dyn Effect, script: &Script) {
    if let Some((x, y)) = script.pointer {
        effect.set_pointer(x, y);
    }
    for frame in 0..script.frames {
        if script.warp_at == Some(frame) {
            effect.warp();
        }
        effect.update();
    }
}

/// Clears a fresh canvas of the field's size and draws the field onto it.
pub fn render(field: &Field) -> Result<RgbaCanvas, ScatterError> {
    let mut canvas = RgbaCanvas::new(field.width(), field.height())?;
    canvas.clear();
    field.draw(&mut canvas);
    Ok(canvas)
}
