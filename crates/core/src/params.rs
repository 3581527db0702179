//! Effect tuning parameters and the JSON helpers that read them.
//!
//! Params arrive as a loose JSON object (the CLI `--params` flag, the canvas
//! `data-params` attribute). Missing or mistyped keys fall back to defaults;
//! [`FieldParams::validate`] rejects values the integrator cannot use.

use crate::error::ScatterError;
use serde::Serialize;
use serde_json::{json, Value};

/// Default sampling stride in pixels.
pub const DEFAULT_GAP: usize = 3;
/// Default pointer influence constant.
pub const DEFAULT_RADIUS: f64 = 2000.0;
/// Default spring stiffness toward the origin.
pub const DEFAULT_EASE: f64 = 0.15;
/// Spring stiffness after a warp.
pub const DEFAULT_WARP_EASE: f64 = 0.05;
/// Default per-frame velocity damping.
pub const DEFAULT_FRICTION: f64 = 0.9;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing or wrong type.
///
/// Only non-negative JSON integers are accepted.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

/// Tunable constants of the disintegration effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldParams {
    /// Sampling stride, also the particle square size.
    pub gap: usize,
    /// Pointer influence constant, compared against the squared distance.
    pub radius: f64,
    /// Initial spring stiffness.
    pub ease: f64,
    /// Spring stiffness set by a warp.
    pub warp_ease: f64,
    /// Velocity damping factor applied every frame.
    pub friction: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP,
            radius: DEFAULT_RADIUS,
            ease: DEFAULT_EASE,
            warp_ease: DEFAULT_WARP_EASE,
            friction: DEFAULT_FRICTION,
        }
    }
}

impl FieldParams {
    /// Reads params from a JSON object, falling back to defaults per key.
    pub fn from_json(params: &Value) -> Self {
        Self {
            gap: param_usize(params, "gap", DEFAULT_GAP),
            radius: param_f64(params, "radius", DEFAULT_RADIUS),
            ease: param_f64(params, "ease", DEFAULT_EASE),
            warp_ease: param_f64(params, "warp_ease", DEFAULT_WARP_EASE),
            friction: param_f64(params, "friction", DEFAULT_FRICTION),
        }
    }

    /// Rejects a zero gap and non-finite coefficients.
    pub fn validate(&self) -> Result<(), ScatterError> {
        if self.gap == 0 {
            return Err(ScatterError::InvalidParam {
                name: "gap".into(),
                reason: "must be at least 1".into(),
            });
        }
        let coefficients = [
            ("radius", self.radius),
            ("ease", self.ease),
            ("warp_ease", self.warp_ease),
            ("friction", self.friction),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() {
                return Err(ScatterError::InvalidParam {
                    name: name.into(),
                    reason: format!("must be finite, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Current values as a JSON object.
    ///
    /// Non-finite coefficients serialize as `null`.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Schema describing every parameter, its type, range and default.
    pub fn schema() -> Value {
        json!({
            "gap": {
                "type": "integer",
                "default": DEFAULT_GAP,
                "min": 1,
                "max": 64,
                "description": "Sampling stride in pixels; also the particle square size"
            },
            "radius": {
                "type": "number",
                "default": DEFAULT_RADIUS,
                "min": 0.0,
                "max": 100000.0,
                "description": "Pointer influence, compared against squared distance"
            },
            "ease": {
                "type": "number",
                "default": DEFAULT_EASE,
                "min": 0.0,
                "max": 1.0,
                "description": "Spring stiffness pulling particles to their origin"
            },
            "warp_ease": {
                "type": "number",
                "default": DEFAULT_WARP_EASE,
                "min": 0.0,
                "max": 1.0,
                "description": "Spring stiffness after a warp (never restored)"
            },
            "friction": {
                "type": "number",
                "default": DEFAULT_FRICTION,
                "min": 0.0,
                "max": 1.0,
                "description": "Per-frame velocity damping factor"
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- helpers --

    #[test]
    fn param_f64_extracts_existing_float() {
        let params = json!({"radius": 2.5});
        assert!((param_f64(&params, "radius", 1.0) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_accepts_integer() {
        let params = json!({"radius": 10});
        assert!((param_f64(&params, "radius", 0.0) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_wrong_type_returns_default() {
        let params = json!({"radius": "far"});
        assert!((param_f64(&params, "radius", 7.0) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_usize_rejects_negative_and_float() {
        assert_eq!(param_usize(&json!({"gap": -2}), "gap", 3), 3);
        assert_eq!(param_usize(&json!({"gap": 2.5}), "gap", 3), 3);
        assert_eq!(param_usize(&json!({"gap": 5}), "gap", 3), 5);
    }

    #[test]
    fn helpers_tolerate_non_object() {
        let params = json!([1, 2, 3]);
        assert_eq!(param_usize(&params, "gap", 4), 4);
        assert!((param_f64(&params, "ease", 0.5) - 0.5).abs() < f64::EPSILON);
    }

    // -- FieldParams --

    #[test]
    fn defaults_match_documented_values() {
        let p = FieldParams::default();
        assert_eq!(p.gap, 3);
        assert!((p.radius - 2000.0).abs() < f64::EPSILON);
        assert!((p.ease - 0.15).abs() < f64::EPSILON);
        assert!((p.warp_ease - 0.05).abs() < f64::EPSILON);
        assert!((p.friction - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn from_json_empty_is_default() {
        assert_eq!(FieldParams::from_json(&json!({})), FieldParams::default());
    }

    #[test]
    fn from_json_overrides_individual_keys() {
        let p = FieldParams::from_json(&json!({"gap": 1, "friction": 0.5}));
        assert_eq!(p.gap, 1);
        assert!((p.friction - 0.5).abs() < f64::EPSILON);
        assert!((p.ease - DEFAULT_EASE).abs() < f64::EPSILON);
    }

    #[test]
    fn validate_rejects_zero_gap() {
        let p = FieldParams {
            gap: 0,
            ..FieldParams::default()
        };
        assert!(matches!(
            p.validate(),
            Err(ScatterError::InvalidParam { ref name, .. }) if name == "gap"
        ));
    }

    #[test]
    fn validate_rejects_non_finite_coefficient() {
        let p = FieldParams {
            friction: f64::NAN,
            ..FieldParams::default()
        };
        assert!(matches!(
            p.validate(),
            Err(ScatterError::InvalidParam { ref name, .. }) if name == "friction"
        ));
    }

    #[test]
    fn to_json_feeds_back_into_from_json() {
        let p = FieldParams {
            gap: 2,
            radius: 900.0,
            ease: 0.2,
            warp_ease: 0.01,
            friction: 0.8,
        };
        assert_eq!(FieldParams::from_json(&p.to_json()), p);
    }

    #[test]
    fn to_json_writes_every_field_by_name() {
        let json = FieldParams::default().to_json();
        assert_eq!(json["gap"], 3);
        assert_eq!(json["radius"], 2000.0);
        assert_eq!(json["ease"], 0.15);
        assert_eq!(json["warp_ease"], 0.05);
        assert_eq!(json["friction"], 0.9);
        assert_eq!(json.as_object().map(|o| o.len()), Some(5));
    }

    #[test]
    fn schema_covers_every_key() {
        let schema = FieldParams::schema();
        for key in ["gap", "radius", "ease", "warp_ease", "friction"] {
            assert!(schema.get(key).is_some(), "schema missing {key}");
            assert!(schema[key].get("default").is_some(), "{key} missing default");
            assert!(
                schema[key].get("description").is_some(),
                "{key} missing description"
            );
        }
    }
}
