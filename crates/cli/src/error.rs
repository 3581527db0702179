//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: effect error (bad dimensions, bad params, sampling failure)
//! - 11: I/O error (image read, snapshot write)
//! - 12: input error (bad JSON params, bad pointer, undecodable image)
//! - 13: serialization error

use disintegrate_core::ScatterError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// An effect-level error (bad dimensions, bad params, sampling failure).
    Effect(ScatterError),
    /// An I/O error (image read, snapshot write).
    Io(String),
    /// A user input error (bad JSON params, bad pointer, undecodable image).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Effect(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Effect(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<ScatterError> for CliError {
    fn from(e: ScatterError) -> Self {
        match e {
            ScatterError::Io(msg) => CliError::Io(msg),
            ScatterError::Decode(msg) => CliError::Input(msg),
            other => CliError::Effect(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
