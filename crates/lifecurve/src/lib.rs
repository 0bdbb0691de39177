//! Forward-only cubic curves for driving a scalar over a normalized lifetime.
//!
//! A [`Curve`] is a sequence of [`ControlPoint`]s ordered by anchor X. Sampling
//! blends only the Y components of each segment's anchors and tangents, using a
//! fraction taken from the anchors' X positions. The independent axis therefore
//! never runs backwards, which makes the curve safe to use wherever X stands
//! for elapsed time or fractional particle life.
//!
//! Curves are usually assembled with the typestate builder:
//!
//! ```
//! use lifecurve::Curve;
//!
//! let curve = Curve::builder()
//!     .anchor_point((0.0, 0.0))
//!     .anchor_point((0.5, 0.5))
//!     .control_point1((0.6, 0.5))
//!     .control_point2((0.8, 2.0))
//!     .anchor_point((1.0, 2.0))
//!     .build();
//!
//! assert!((curve.value(0.25) - 0.25).abs() < 1e-5);
//! assert!((curve.value(1.0) - 2.0).abs() < 1e-5);
//! ```
//!
//! # Presets
//!
//! - linear
//! - constant
//! - ease-in / ease-out / ease-in-out
//! - fade
//! - pulse

/// Typestate stages used to assemble a curve.
pub mod builder;
/// A single anchor together with its tangents.
mod control_point;
/// The curve container and sampling.
mod curve;
/// Error types used across the crate.
pub mod error;
/// Ordered-record export and import.
pub mod persist;
/// 2D vector helpers.
pub mod point;
/// Central registry of named preset curves.
pub mod registry;

pub use crate::{control_point::ControlPoint, curve::Curve, persist::CurveRecord, point::Vec2};

/// Construct a preset curve by name.
///
/// Returns an error if the name is unknown.
pub fn preset_from_name(name: &str) -> error::Result<Curve> {
    registry::construct(name)
}
