//! Reads the source image back as a field-sized sampling surface.

use crate::dom::to_js;
use disintegrate_core::bitmap::centered_offset;
use disintegrate_core::Bitmap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlImageElement, OffscreenCanvas, OffscreenCanvasRenderingContext2d};

/// Draws `image` at its centered offset on a hidden `width × height`
/// surface and returns the pixels.
///
/// An image with no intrinsic size yields a transparent surface, so the
/// effect comes up empty instead of failing.
pub fn sample_surface(image: &HtmlImageElement, width: u32, height: u32) -> Result<Bitmap, JsValue> {
    let (w, h) = (width as usize, height as usize);
    let (iw, ih) = (image.natural_width(), image.natural_height());
    if iw == 0 || ih == 0 {
        log::warn!("source image has no pixels; the effect will be empty");
        return Bitmap::new(w, h).map_err(to_js);
    }

    let offscreen = OffscreenCanvas::new(width, height)?;
    let ctx = offscreen
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("offscreen 2d context unavailable"))?
        .dyn_into::<OffscreenCanvasRenderingContext2d>()?;

    let (x, y) = centered_offset(w, h, iw as usize, ih as usize);
    ctx.draw_image_with_html_image_element(image, x as f64, y as f64)?;

    let data = ctx.get_image_data(0.0, 0.0, f64::from(width), f64::from(height))?;
    log::debug!("read back {width}x{height} sampling surface for {iw}x{ih} image");
    Bitmap::from_rgba(w, h, data.data().0).map_err(to_js)
}
