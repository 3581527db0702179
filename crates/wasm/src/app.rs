//! Wires the field to the page: pointer, resize, warp button, frame loop.
//!
//! Everything runs on the single JS thread. Callbacks share the field through
//! `Rc<RefCell<_>>` and never overlap, so each borrow is released before the
//! next event is dispatched.

use crate::config::{params_from_attribute, seed_from_unit};
use crate::dom::{self, to_js};
use crate::latch::StartLatch;
use crate::painter::CanvasPainter;
use crate::sampling::sample_surface;
use disintegrate_core::{Effect, Field};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlImageElement, MouseEvent, Window,
};

type Shared<T> = Rc<RefCell<T>>;

/// Looks up the page elements and starts the effect once the image is loaded.
pub fn launch(canvas_id: &str, image_id: &str, warp_button_id: &str) -> Result<(), JsValue> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let canvas: HtmlCanvasElement = dom::element_by_id(&document, canvas_id)?;
    let image: HtmlImageElement = dom::element_by_id(&document, image_id)?;
    let button: Element = dom::element_by_id(&document, warp_button_id)?;

    if image.complete() {
        return start(&window, &canvas, &image, &button);
    }

    // A failed load still starts the effect; the unsized image samples empty.
    log::info!("waiting for #{image_id} to load");
    let latch = StartLatch::new();
    for event in ["load", "error"] {
        let latch = latch.clone();
        let (window, canvas, image, button) =
            (window.clone(), canvas.clone(), image.clone(), button.clone());
        let target = image.clone();
        dom::listen(&target, event, move |_| {
            if !latch.claim() {
                return;
            }
            if event == "error" {
                log::warn!("source image failed to load");
            }
            if let Err(e) = start(&window, &canvas, &image, &button) {
                log::error!("failed to start effect: {e:?}");
            }
        })?;
    }
    Ok(())
}

/// Sizes the canvas, samples the image, registers listeners and starts the
/// animation loop.
fn start(
    window: &Window,
    canvas: &HtmlCanvasElement,
    image: &HtmlImageElement,
    button: &Element,
) -> Result<(), JsValue> {
    let (width, height) = dom::viewport_size(window)?;
    canvas.set_width(width);
    canvas.set_height(height);

    let params = params_from_attribute(canvas.get_attribute("data-params").as_deref());
    let seed = seed_from_unit(js_sys::Math::random());
    let mut field = Field::new(width as usize, height as usize, params, seed).map_err(to_js)?;
    let surface = sample_surface(image, width, height)?;
    let count = field.init(&surface).map_err(to_js)?;
    log::info!("disintegrating {count} particles on {width}x{height}");

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    let painter = CanvasPainter::new(canvas.clone(), ctx);
    let field = Rc::new(RefCell::new(field));

    register_pointer(window, &field)?;
    register_resize(window, canvas, &field)?;
    register_warp(button, &field)?;
    animate(window, field, painter)
}

fn register_pointer(window: &Window, field: &Shared<Field>) -> Result<(), JsValue> {
    let moved = Rc::clone(field);
    dom::listen(window, "mousemove", move |event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            let (x, y) = (f64::from(mouse.client_x()), f64::from(mouse.client_y()));
            moved.borrow_mut().set_pointer(x, y);
        }
    })?;

    let document = dom::document(window)?;
    let left = Rc::clone(field);
    dom::listen(&document, "mouseleave", move |_| {
        left.borrow_mut().clear_pointer();
    })
}

// Resizing only changes dimensions; particles keep their sampled origins.
fn register_resize(
    window: &Window,
    canvas: &HtmlCanvasElement,
    field: &Shared<Field>,
) -> Result<(), JsValue> {
    let field = Rc::clone(field);
    let canvas = canvas.clone();
    let win = window.clone();
    dom::listen(window, "resize", move |_| {
        let (w, h) = match dom::viewport_size(&win) {
            Ok(size) => size,
            Err(e) => {
                log::warn!("could not read viewport size: {e:?}");
                return;
            }
        };
        canvas.set_width(w);
        canvas.set_height(h);
        if let Err(e) = field.borrow_mut().resize(w as usize, h as usize) {
            log::warn!("ignoring resize to {w}x{h}: {e}");
        }
    })
}

fn register_warp(button: &Element, field: &Shared<Field>) -> Result<(), JsValue> {
    let field = Rc::clone(field);
    dom::listen(button, "click", move |_| {
        field.borrow_mut().warp();
    })
}

/// Runs clear, draw, update on every animation frame until the page closes.
fn animate(window: &Window, field: Shared<Field>, mut painter: CanvasPainter) -> Result<(), JsValue> {
    let callback: Shared<Option<Closure<dyn FnMut()>>> = Rc::new(RefCell::new(None));
    let next = Rc::clone(&callback);
    let win = window.clone();

    *callback.borrow_mut() = Some(Closure::new(move || {
        field.borrow_mut().frame(&mut painter);
        if let Some(cb) = next.borrow().as_ref() {
            if let Err(e) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed, stopping: {e:?}");
            }
        }
    }));

    let first = callback.borrow();
    if let Some(cb) = first.as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
