//! 2D vector helpers used by control points and the builder.
//!
//! Anchors and tangents are plain [`glam::Vec2`] values. This module only adds
//! the scalar blend used during sampling and the straight-segment tangents.

pub use glam::Vec2;

/// Linear blend between `a` and `b`: `a + (b - a) * t`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Tangents that turn a cubic segment from `a` to `b` into a straight line.
///
/// Returns the points one third and two thirds of the way along, which is the
/// pair the builder synthesizes for its anchor-to-anchor shortcut.
pub fn thirds(a: Vec2, b: Vec2) -> (Vec2, Vec2) {
    let near = a * (2.0 / 3.0) + b * (1.0 / 3.0);
    let far = a * (1.0 / 3.0) + b * (2.0 / 3.0);
    (near, far)
}
