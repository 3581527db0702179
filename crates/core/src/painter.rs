//! Drawing surface abstraction shared by the browser and CPU renderers.

use crate::color::Color;

/// Anything that can be cleared and filled with colored squares.
///
/// Object safe, so the frame loop can hold a `&mut dyn Painter`.
pub trait Painter {
    /// Resets the whole surface to transparent.
    fn clear(&mut self);

    /// Fills the axis-aligned square with top-left corner `(x, y)` and side
    /// `size` in `color`.
    fn fill_square(&mut self, x: f64, y: f64, size: f64, color: &Color);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// Painter that records every call, for asserting draw order.
    #[derive(Debug, Default)]
    pub struct RecordingPainter {
        pub clears: usize,
        pub squares: Vec<(f64, f64, f64, String)>,
    }

    impl Painter for RecordingPainter {
        fn clear(&mut self) {
            self.clears += 1;
            self.squares.clear();
        }

        fn fill_square(&mut self, x: f64, y: f64, size: f64, color: &Color) {
            self.squares.push((x, y, size, color.css().to_owned()));
        }
    }
}
