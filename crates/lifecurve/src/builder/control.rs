use log::trace;

use super::AtAnchor;
use crate::{curve::Curve, point::Vec2};

/// Stage after the first control point of a cubic segment.
///
/// The anchor the segment leaves from has already been committed to the curve.
#[derive(Debug)]
#[must_use = "a cubic segment needs a second control point"]
pub struct AtControlPoint1 {
    /// The curve under construction.
    curve: Curve,
}

impl AtControlPoint1 {
    /// Enter the first control point stage.
    pub(super) fn new(curve: Curve) -> Self {
        Self { curve }
    }

    /// Add the second control point of the segment, shaping the approach into
    /// the next anchor.
    pub fn control_point2(self, control: impl Into<Vec2>) -> AtControlPoint2 {
        let control = control.into();
        trace!("curve builder: approaching next anchor from {control}");
        AtControlPoint2 {
            curve: self.curve,
            tangent_in: control,
        }
    }
}

/// Stage after both control points of a cubic segment; the next anchor is due.
#[derive(Debug)]
#[must_use = "a cubic segment needs a closing anchor"]
pub struct AtControlPoint2 {
    /// The curve under construction.
    curve: Curve,
    /// Becomes the incoming tangent of the next anchor.
    tangent_in: Vec2,
}

impl AtControlPoint2 {
    /// Add the anchor that closes the segment. The curve passes through it.
    pub fn anchor_point(self, next: impl Into<Vec2>) -> AtAnchor {
        let next = next.into();
        trace!("curve builder: anchor at {next}");
        AtAnchor::new(self.curve, Some(self.tangent_in), next)
    }
}
