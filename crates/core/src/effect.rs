//! The `Effect` trait driven once per animation frame.
//!
//! The trait is object-safe so a host loop can hold a `Box<dyn Effect>` and a
//! `&mut dyn Painter` without knowing the concrete effect.

use crate::painter::Painter;
use serde_json::Value;

/// A frame-driven particle effect.
///
/// The host calls [`Effect::frame`] on every display refresh and forwards
/// pointer movement and the warp control between frames.
pub trait Effect {
    /// Advance every particle by one frame.
    fn update(&mut self);

    /// Paint every particle onto `painter`.
    fn draw(&self, painter: &mut dyn Painter);

    /// Scatter every particle.
    fn warp(&mut self);

    /// Report the pointer position in surface coordinates.
    fn set_pointer(&mut self, x: f64, y: f64);

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all parameters, their types, ranges and defaults.
    fn param_schema(&self) -> Value;

    /// One animation frame: clear, draw, then update.
    fn frame(&mut self, painter: &mut dyn Painter) {
        painter.clear();
        self.draw(painter);
        self.update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::painter::recording::RecordingPainter;
    use serde_json::json;

    /// Effect with a single square that moves one pixel right per update.
    struct Crawler {
        x: f64,
        warps: usize,
        pointer: Option<(f64, f64)>,
    }

    impl Effect for Crawler {
        fn update(&mut self) {
            self.x += 1.0;
        }

        fn draw(&self, painter: &mut dyn Painter) {
            painter.fill_square(self.x, 0.0, 1.0, &Color::new(1, 2, 3, 4));
        }

        fn warp(&mut self) {
            self.warps += 1;
        }

        fn set_pointer(&mut self, x: f64, y: f64) {
            self.pointer = Some((x, y));
        }

        fn params(&self) -> Value {
            json!({"x": self.x})
        }

        fn param_schema(&self) -> Value {
            json!({"x": {"type": "number"}})
        }
    }

    fn crawler() -> Crawler {
        Crawler {
            x: 0.0,
            warps: 0,
            pointer: None,
        }
    }

    #[test]
    fn effect_trait_is_object_safe() {
        let mut effect: Box<dyn Effect> = Box::new(crawler());
        effect.warp();
        effect.set_pointer(1.0, 2.0);
        assert_eq!(effect.params()["x"], 0.0);
    }

    #[test]
    fn frame_draws_before_updating() {
        let mut effect = crawler();
        let mut painter = RecordingPainter::default();
        effect.frame(&mut painter);
        assert_eq!(painter.clears, 1);
        assert_eq!(painter.squares.len(), 1);
        assert!((painter.squares[0].0 - 0.0).abs() < f64::EPSILON);
        assert!((effect.x - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn consecutive_frames_clear_previous_output() {
        let mut effect = crawler();
        let mut painter = RecordingPainter::default();
        effect.frame(&mut painter);
        effect.frame(&mut painter);
        assert_eq!(painter.clears, 2);
        assert_eq!(painter.squares.len(), 1);
        assert!((painter.squares[0].0 - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn pointer_and_warp_reach_the_effect() {
        let mut effect = crawler();
        {
            let dyn_ref: &mut dyn Effect = &mut effect;
            dyn_ref.set_pointer(4.0, 5.0);
            dyn_ref.warp();
        }
        assert_eq!(effect.pointer, Some((4.0, 5.0)));
        assert_eq!(effect.warps, 1);
    }
}
