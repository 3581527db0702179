//! Owned RGBA8 pixel buffers used as the sampling surface.
//!
//! In the browser the sampling surface comes straight from
//! `getImageData`. Off-browser, [`Bitmap::compose_centered`] reproduces
//! drawing the source image at its centered offset onto a transparent
//! surface of the field's size.

use crate::error::ScatterError;

/// A `width × height` RGBA8 image in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Creates a fully transparent bitmap.
    ///
    /// Returns `ScatterError::InvalidDimensions` if either dimension is zero
    /// or the byte length overflows.
    pub fn new(width: usize, height: usize) -> Result<Self, ScatterError> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    /// Wraps an existing RGBA8 buffer.
    ///
    /// The buffer must hold exactly `width * height * 4` bytes.
    pub fn from_rgba(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self, ScatterError> {
        let len = byte_len(width, height)?;
        if pixels.len() != len {
            return Err(ScatterError::BufferLength {
                expected: len,
                got: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A `width × height` bitmap filled with one color.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Result<Self, ScatterError> {
        let len = byte_len(width, height)?;
        let pixels = rgba.iter().copied().cycle().take(len).collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable RGBA bytes.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// The pixel at `(x, y)`, or `None` outside the bitmap.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        let px = self.pixels.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Overwrites the pixel at `(x, y)`; out-of-range writes are ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y * self.width + x) * 4;
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }

    /// Draws `image` at its centered offset onto a transparent
    /// `width × height` surface, clipping whatever falls outside.
    pub fn compose_centered(image: &Bitmap, width: usize, height: usize) -> Result<Self, ScatterError> {
        let mut surface = Self::new(width, height)?;
        let (ox, oy) = centered_offset(width, height, image.width, image.height);
        for sy in 0..image.height {
            let ty = oy + sy as i64;
            if ty < 0 || ty >= height as i64 {
                continue;
            }
            for sx in 0..image.width {
                let tx = ox + sx as i64;
                if tx < 0 || tx >= width as i64 {
                    continue;
                }
                if let Some(px) = image.pixel(sx, sy) {
                    surface.set_pixel(tx as usize, ty as usize, px);
                }
            }
        }
        Ok(surface)
    }
}

/// Offset that centers an `image_w × image_h` image on a
/// `surface_w × surface_h` surface: `surface / 2 - image / 2`, floored.
///
/// Negative when the image is larger than the surface.
pub fn centered_offset(surface_w: usize, surface_h: usize, image_w: usize, image_h: usize) -> (i64, i64) {
    let axis = |s: usize, i: usize| (s as f64 * 0.5 - i as f64 * 0.5).floor() as i64;
    (axis(surface_w, image_w), axis(surface_h, image_h))
}

fn byte_len(width: usize, height: usize) -> Result<usize, ScatterError> {
    if width == 0 || height == 0 {
        return Err(ScatterError::InvalidDimensions);
    }
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .ok_or(ScatterError::InvalidDimensions)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];

    #[test]
    fn new_is_transparent() {
        let bmp = Bitmap::new(3, 2).unwrap();
        assert_eq!(bmp.pixels().len(), 3 * 2 * 4);
        assert!(bmp.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(matches!(Bitmap::new(0, 4), Err(ScatterError::InvalidDimensions)));
        assert!(matches!(Bitmap::new(4, 0), Err(ScatterError::InvalidDimensions)));
        assert!(matches!(
            Bitmap::new(usize::MAX, 2),
            Err(ScatterError::InvalidDimensions)
        ));
    }

    #[test]
    fn from_rgba_checks_length() {
        assert!(Bitmap::from_rgba(2, 2, vec![0; 16]).is_ok());
        assert!(matches!(
            Bitmap::from_rgba(2, 2, vec![0; 12]),
            Err(ScatterError::BufferLength {
                expected: 16,
                got: 12
            })
        ));
    }

    #[test]
    fn filled_repeats_color() {
        let bmp = Bitmap::filled(2, 3, RED).unwrap();
        for y in 0..3 {
            for x in 0..2 {
                assert_eq!(bmp.pixel(x, y), Some(RED));
            }
        }
    }

    #[test]
    fn pixel_out_of_range_is_none() {
        let bmp = Bitmap::new(2, 2).unwrap();
        assert_eq!(bmp.pixel(2, 0), None);
        assert_eq!(bmp.pixel(0, 2), None);
    }

    #[test]
    fn set_pixel_is_row_major() {
        let mut bmp = Bitmap::new(3, 2).unwrap();
        bmp.set_pixel(1, 1, RED);
        let i = (3 + 1) * 4;
        assert_eq!(&bmp.pixels()[i..i + 4], &RED);
        bmp.set_pixel(9, 9, RED);
    }

    // ---- Centering ----

    #[test]
    fn centered_offset_floors() {
        assert_eq!(centered_offset(10, 10, 4, 4), (3, 3));
        assert_eq!(centered_offset(10, 9, 3, 4), (3, 2));
        assert_eq!(centered_offset(4, 4, 10, 6), (-3, -1));
    }

    #[test]
    fn compose_centered_places_image() {
        let image = Bitmap::filled(2, 2, RED).unwrap();
        let surface = Bitmap::compose_centered(&image, 6, 4).unwrap();
        // offset (2, 1)
        for y in 0..4 {
            for x in 0..6 {
                let inside = (2..4).contains(&x) && (1..3).contains(&y);
                let expected = if inside { RED } else { [0; 4] };
                assert_eq!(surface.pixel(x, y), Some(expected), "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn compose_centered_clips_oversized_image() {
        let mut image = Bitmap::filled(8, 8, RED).unwrap();
        image.set_pixel(3, 3, [0, 255, 0, 255]);
        let surface = Bitmap::compose_centered(&image, 2, 2).unwrap();
        // offset (-3, -3): surface (0, 0) shows image (3, 3)
        assert_eq!(surface.pixel(0, 0), Some([0, 255, 0, 255]));
        assert_eq!(surface.pixel(1, 1), Some(RED));
    }
}
