//! CPU-side [`Painter`] backed by an RGBA8 buffer.
//!
//! Always available (no feature gate) so tests and the CLI can render frames
//! without a browser. Squares snap to the nearest whole pixels: a square at
//! `(x, y)` with side `size` covers `[round(x), round(x + size))` horizontally
//! and likewise vertically, which is where a browser's antialiased fill puts
//! most of its coverage.

use disintegrate_core::{Bitmap, Color, Painter, ScatterError};

/// A transparent-cleared RGBA surface that particles are painted onto.
#[derive(Debug, Clone)]
pub struct RgbaCanvas {
    bitmap: Bitmap,
}

impl RgbaCanvas {
    /// Creates a transparent `width × height` canvas.
    pub fn new(width: usize, height: usize) -> Result<Self, ScatterError> {
        Ok(Self {
            bitmap: Bitmap::new(width, height)?,
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> usize {
        self.bitmap.width()
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> usize {
        self.bitmap.height()
    }

    /// Current pixels.
    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    /// Consumes the canvas and returns its pixels.
    pub fn into_bitmap(self) -> Bitmap {
        self.bitmap
    }

    /// Number of pixels with non-zero alpha.
    pub fn painted_pixels(&self) -> usize {
        self.bitmap
            .pixels()
            .chunks_exact(4)
            .filter(|px| px[3] > 0)
            .count()
    }
}

/// Pixel span `[round(start), round(start + size))` clipped to `[0, limit)`.
fn span(start: f64, size: f64, limit: usize) -> Option<(usize, usize)> {
    if !start.is_finite() || !size.is_finite() {
        return None;
    }
    let lo = start.round().max(0.0);
    let hi = (start + size).round().min(limit as f64);
    if lo >= hi {
        return None;
    }
    Some((lo as usize, hi as usize))
}

impl Painter for RgbaCanvas {
    fn clear(&mut self) {
        self.bitmap.pixels_mut().fill(0);
    }

    fn fill_square(&mut self, x: f64, y: f64, size: f64, color: &Color) {
        // Browsers clamp rgba() alpha to 1, so every visible sample is opaque.
        if !color.is_visible() {
            return;
        }
        let Some((x0, x1)) = span(x, size, self.width()) else {
            return;
        };
        let Some((y0, y1)) = span(y, size, self.height()) else {
            return;
        };
        let rgba = [color.r(), color.g(), color.b(), u8::MAX];
        for py in y0..y1 {
            for px in x0..x1 {
                self.bitmap.set_pixel(px, py, rgba);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color {
        Color::new(255, 0, 0, 255)
    }

    #[test]
    fn new_canvas_is_transparent() {
        let canvas = RgbaCanvas::new(8, 4).unwrap();
        assert_eq!(canvas.bitmap().pixels().len(), 8 * 4 * 4);
        assert_eq!(canvas.painted_pixels(), 0);
    }

    #[test]
    fn fill_square_paints_size_squared_pixels() {
        let mut canvas = RgbaCanvas::new(10, 10).unwrap();
        canvas.fill_square(2.0, 3.0, 3.0, &red());
        assert_eq!(canvas.painted_pixels(), 9);
        assert_eq!(canvas.bitmap().pixel(2, 3), Some([255, 0, 0, 255]));
        assert_eq!(canvas.bitmap().pixel(4, 5), Some([255, 0, 0, 255]));
        assert_eq!(canvas.bitmap().pixel(5, 5), Some([0, 0, 0, 0]));
    }

    #[test]
    fn low_alpha_paints_opaque_like_css() {
        let mut canvas = RgbaCanvas::new(2, 2).unwrap();
        canvas.fill_square(0.0, 0.0, 1.0, &Color::new(1, 2, 3, 1));
        assert_eq!(canvas.bitmap().pixel(0, 0), Some([1, 2, 3, 255]));
    }

    #[test]
    fn zero_alpha_paints_nothing() {
        let mut canvas = RgbaCanvas::new(2, 2).unwrap();
        canvas.fill_square(0.0, 0.0, 2.0, &Color::new(9, 9, 9, 0));
        assert_eq!(canvas.painted_pixels(), 0);
    }

    #[test]
    fn fractional_positions_snap_to_nearest() {
        let mut canvas = RgbaCanvas::new(10, 10).unwrap();
        canvas.fill_square(1.7, 1.2, 1.0, &red());
        // round(1.7)..round(2.7) = 2..3, round(1.2)..round(2.2) = 1..2
        assert_eq!(canvas.painted_pixels(), 1);
        assert_eq!(canvas.bitmap().pixel(2, 1), Some([255, 0, 0, 255]));
    }

    #[test]
    fn almost_settled_position_lands_on_origin_pixel() {
        let mut canvas = RgbaCanvas::new(4, 4).unwrap();
        canvas.fill_square(2.0 - 1e-12, 1.0, 1.0, &red());
        assert_eq!(canvas.bitmap().pixel(2, 1), Some([255, 0, 0, 255]));
        assert_eq!(canvas.painted_pixels(), 1);
    }

    #[test]
    fn squares_clip_at_every_edge() {
        let mut canvas = RgbaCanvas::new(4, 4).unwrap();
        canvas.fill_square(-1.0, -1.0, 2.0, &red());
        assert_eq!(canvas.painted_pixels(), 1);
        canvas.fill_square(3.0, 3.0, 5.0, &red());
        assert_eq!(canvas.painted_pixels(), 2);
        canvas.fill_square(-500.0, 2.0, 3.0, &red());
        canvas.fill_square(2.0, 900.0, 3.0, &red());
        assert_eq!(canvas.painted_pixels(), 2);
    }

    #[test]
    fn clear_resets_to_transparent() {
        let mut canvas = RgbaCanvas::new(4, 4).unwrap();
        canvas.fill_square(0.0, 0.0, 4.0, &red());
        assert_eq!(canvas.painted_pixels(), 16);
        canvas.clear();
        assert_eq!(canvas.painted_pixels(), 0);
    }

    #[test]
    fn nan_position_is_ignored() {
        let mut canvas = RgbaCanvas::new(4, 4).unwrap();
        canvas.fill_square(f64::NAN, 0.0, 2.0, &red());
        assert_eq!(canvas.painted_pixels(), 0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn painted_area_never_exceeds_square(
                x in -20.0_f64..40.0,
                y in -20.0_f64..40.0,
                size in 0.0_f64..8.0,
            ) {
                let mut canvas = RgbaCanvas::new(24, 24).unwrap();
                canvas.fill_square(x, y, size, &red());
                let side = size.ceil() as usize + 1;
                prop_assert!(canvas.painted_pixels() <= side * side);
            }
        }
    }
}
