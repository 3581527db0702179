//! Host-independent setup helpers: params, seed and viewport sizing.

use disintegrate_core::FieldParams;
use serde_json::Value;

/// Reads effect params from the canvas `data-params` attribute.
///
/// A missing attribute means defaults; malformed JSON is logged and ignored.
pub fn params_from_attribute(raw: Option<&str>) -> FieldParams {
    let Some(text) = raw else {
        return FieldParams::default();
    };
    match serde_json::from_str::<Value>(text) {
        Ok(value) => FieldParams::from_json(&value),
        Err(e) => {
            log::warn!("ignoring malformed data-params: {e}");
            FieldParams::default()
        }
    }
}

/// Turns a `Math.random()` draw in [0, 1) into a PRNG seed.
pub fn seed_from_unit(r: f64) -> u64 {
    if !r.is_finite() {
        return 0;
    }
    (r.clamp(0.0, 1.0) * u64::MAX as f64) as u64
}

/// Converts a `window.innerWidth`-style value to whole canvas pixels.
///
/// Non-finite and negative values become 0, which field setup rejects.
pub fn viewport_dimension(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        v.min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}
