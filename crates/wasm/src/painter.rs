//! [`Painter`] over a browser 2D canvas context.

use disintegrate_core::{Color, Painter};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Paints particles straight onto the visible canvas.
pub struct CanvasPainter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }
}

impl Painter for CanvasPainter {
    // Reads the canvas size each time so resizes need no bookkeeping here.
    fn clear(&mut self) {
        let w = f64::from(self.canvas.width());
        let h = f64::from(self.canvas.height());
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn fill_square(&mut self, x: f64, y: f64, size: f64, color: &Color) {
        self.ctx.set_fill_style_str(color.css());
        self.ctx.fill_rect(x, y, size, size);
    }
}
