//! Live pointer state read by the particle integrator.

use glam::DVec2;

/// Pointer position and influence constant.
///
/// `position` is `None` until the first movement is reported, which the
/// integrator treats as "no repulsion" rather than propagating NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    position: Option<DVec2>,
    radius: f64,
}

impl Pointer {
    /// A pointer that has not moved yet.
    pub fn new(radius: f64) -> Self {
        Self {
            position: None,
            radius,
        }
    }

    /// Last reported position, if any.
    pub fn position(&self) -> Option<DVec2> {
        self.position
    }

    /// Influence constant.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Records a pointer movement in surface coordinates.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.position = Some(DVec2::new(x, y));
    }

    /// Forgets the position, e.g. when the pointer leaves the surface.
    pub fn clear(&mut self) {
        self.position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_without_position() {
        let p = Pointer::new(2000.0);
        assert!(p.position().is_none());
        assert!((p.radius() - 2000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn move_then_clear() {
        let mut p = Pointer::new(10.0);
        p.move_to(3.0, 4.0);
        assert_eq!(p.position(), Some(DVec2::new(3.0, 4.0)));
        p.clear();
        assert!(p.position().is_none());
    }
}
