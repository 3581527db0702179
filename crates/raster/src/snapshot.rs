//! PNG decode into a [`Bitmap`] and PNG encode of a rendered frame.
//!
//! Feature-gated behind `png` (default on) so WASM builds can depend on this
//! crate without pulling in the `image` crate.

use disintegrate_core::{Bitmap, ScatterError};
use std::path::Path;

/// Decodes an image file into an RGBA8 [`Bitmap`].
///
/// Returns `ScatterError::Io` if the file cannot be read and
/// `ScatterError::Decode` if its contents are not a supported image.
pub fn load_bitmap(path: &Path) -> Result<Bitmap, ScatterError> {
    let img = image::open(path).map_err(|e| match e {
        image::ImageError::IoError(io) => ScatterError::Io(format!("{}: {io}", path.display())),
        other => ScatterError::Decode(format!("{}: {other}", path.display())),
    })?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    log::debug!("loaded {}x{} image from {}", w, h, path.display());
    Bitmap::from_rgba(w as usize, h as usize, rgba.into_raw())
}

/// Writes `bitmap` as a PNG file.
///
/// Returns `ScatterError::InvalidDimensions` if the dimensions overflow
/// `u32`, or `ScatterError::Io` on write failure.
pub fn write_png(bitmap: &Bitmap, path: &Path) -> Result<(), ScatterError> {
    let w = u32::try_from(bitmap.width()).map_err(|_| ScatterError::InvalidDimensions)?;
    let h = u32::try_from(bitmap.height()).map_err(|_| ScatterError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, bitmap.pixels().to_vec()).ok_or(
        ScatterError::BufferLength {
            expected: bitmap.width() * bitmap.height() * 4,
            got: bitmap.pixels().len(),
        },
    )?;
    img.save(path).map_err(|e| ScatterError::Io(e.to_string()))?;
    log::debug!("wrote {}x{} snapshot to {}", w, h, path.display());
    Ok(())
}
