//! Seedable Xorshift64 generator for particle scatter.
//!
//! Both the initial particle placement and every warp draw their positions
//! from this generator. Seeding it makes headless runs and tests repeatable;
//! the browser build seeds it from `Math.random()`.

use glam::DVec2;

/// Xorshift64 PRNG with shifts (13, 7, 17).
///
/// A zero seed is a fixed point of the algorithm and is replaced by a
/// non-zero fallback.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a generator from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform f64 in [0, 1), from the upper 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform f64 in [0, max).
    ///
    /// Guards against the product rounding up to `max` for large extents.
    pub fn next_below(&mut self, max: f64) -> f64 {
        let v = self.next_f64() * max;
        if v >= max {
            prev_float(max)
        } else {
            v
        }
    }

    /// Uniform point in `[0, width) × [0, height)`, x drawn first.
    pub fn next_point(&mut self, width: f64, height: f64) -> DVec2 {
        let x = self.next_below(width);
        let y = self.next_below(height);
        DVec2::new(x, y)
    }
}

/// Largest f64 strictly below a positive finite value, 0 otherwise.
fn prev_float(v: f64) -> f64 {
    if v > 0.0 && v.is_finite() {
        f64::from_bits(v.to_bits() - 1)
    } else {
        0.0
    }
}
