//! Error types for curve loading and preset lookup.

use std::io;

use thiserror::Error;

/// Errors that can occur while loading or constructing curves.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested preset name is not in the registry.
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
    /// A stored point sequence is not ascending by anchor X.
    #[error("control point {index} at x={next} precedes the previous anchor at x={previous}")]
    Unordered {
        /// Position of the offending point in the stored sequence.
        index: usize,
        /// Anchor X of the point before it.
        previous: f32,
        /// Anchor X of the offending point.
        next: f32,
    },
    /// A stored anchor has a NaN coordinate, which cannot be ordered.
    #[error("control point {0} has a NaN anchor")]
    NanAnchor(usize),
    /// Malformed JSON or a record that does not match the curve layout.
    #[error("invalid curve json: {0}")]
    Json(#[from] serde_json::Error),
    /// Reading or writing the serialized curve failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Convenient alias for results returned by this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
