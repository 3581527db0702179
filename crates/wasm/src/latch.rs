//! One-shot flag shared between event listeners.

use std::cell::Cell;
use std::rc::Rc;

/// Lets exactly one of several listeners act.
///
/// The image's `load` and `error` events share one latch so the effect
/// starts once, whichever fires first.
#[derive(Debug, Clone, Default)]
pub struct StartLatch(Rc<Cell<bool>>);

impl StartLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` for the first caller across all clones, `false` after.
    pub fn claim(&self) -> bool {
        !self.0.replace(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_claim_wins() {
        let latch = StartLatch::new();
        assert!(latch.claim());
        assert!(!latch.claim());
        assert!(!latch.clone().claim());
    }

    #[test]
    fn error_alone_still_claims() {
        let latch = StartLatch::new();
        let on_load = latch.clone();
        let on_error = latch.clone();

        let mut starts = 0;
        // The image fails: only `error` fires.
        if on_error.claim() {
            starts += 1;
        }
        assert_eq!(starts, 1);
        assert!(!on_load.claim());
    }

    #[test]
    fn load_then_error_starts_once() {
        let latch = StartLatch::new();
        let listeners = [latch.clone(), latch.clone()];

        let starts = listeners.iter().filter(|l| l.claim()).count();
        assert_eq!(starts, 1);
    }
}
