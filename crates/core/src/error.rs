//! Error types for the disintegrate core.

use thiserror::Error;

/// Errors produced while building or sampling a [`Field`](crate::Field).
///
/// The per-frame path (`update`, `draw`, `warp`, `set_pointer`) never fails;
/// these errors only surface during setup and at I/O boundaries.
#[derive(Debug, Error)]
pub enum ScatterError {
    /// Width or height was zero when creating a field or bitmap.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A parameter value is unusable (zero gap, non-finite coefficient).
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParam { name: String, reason: String },

    /// A pixel buffer did not match the expected dimensions.
    #[error("dimension mismatch: expected ({expected_w}, {expected_h}), got ({got_w}, {got_h})")]
    DimensionMismatch {
        expected_w: usize,
        expected_h: usize,
        got_w: usize,
        got_h: usize,
    },

    /// A raw pixel buffer had the wrong byte length for its dimensions.
    #[error("pixel buffer length mismatch: expected {expected} bytes, got {got}")]
    BufferLength { expected: usize, got: usize },

    /// `init` was called on a field that already holds particles.
    #[error("field already initialized with {0} particles")]
    AlreadyInitialized(usize),

    /// Reading or writing an image file failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Image bytes could not be decoded or encoded.
    #[error("image decode error: {0}")]
    Decode(String),
}
