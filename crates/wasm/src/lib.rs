#![deny(unsafe_code)]
//! Browser bindings for the disintegrate effect.
//!
//! The page provides a `<canvas>`, an `<img>` holding the source image and a
//! warp button, then calls `run` with their ids:
//!
//! ```js
//! import init, { run } from "./disintegrate_wasm.js";
//! await init();
//! run("canvas", "source", "warpButton");
//! ```
//!
//! Effect params can be set as JSON on the canvas, e.g.
//! `<canvas id="canvas" data-params='{"gap": 4}'>`.

mod app;
mod config;
mod dom;
mod latch;
mod painter;
mod sampling;

use wasm_bindgen::prelude::*;

/// Installs the panic hook and console logger when the module loads.
#[wasm_bindgen(start)]
pub fn init_module() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

/// Starts the effect on the given elements.
///
/// Waits for the image to finish loading if it has not yet. Errors are
/// returned as JS exceptions.
#[wasm_bindgen]
pub fn run(canvas_id: &str, image_id: &str, warp_button_id: &str) -> Result<(), JsValue> {
    app::launch(canvas_id, image_id, warp_button_id)
}
