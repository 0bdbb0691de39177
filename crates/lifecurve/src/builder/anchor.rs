use log::trace;

use super::AtControlPoint1;
use crate::{
    curve::Curve,
    point::{self, Vec2},
};

/// Stage positioned on an anchor whose outgoing side is still open.
#[derive(Debug)]
#[must_use = "the last anchor is only added by `build`"]
pub struct AtAnchor {
    /// The curve under construction.
    curve: Curve,
    /// Incoming tangent of the current anchor; `None` for the first anchor.
    tangent_in: Option<Vec2>,
    /// The current anchor.
    anchor: Vec2,
}

impl AtAnchor {
    /// Enter the anchor stage.
    pub(super) fn new(curve: Curve, tangent_in: Option<Vec2>, anchor: Vec2) -> Self {
        Self {
            curve,
            tangent_in,
            anchor,
        }
    }

    /// Add the first control point of a cubic segment leaving the current
    /// anchor. The curve moves towards it but need not touch it.
    ///
    /// This commits the current anchor to the curve with `control` as its
    /// outgoing tangent.
    pub fn control_point1(mut self, control: impl Into<Vec2>) -> AtControlPoint1 {
        let control = control.into();
        trace!("curve builder: anchor {} leaves towards {control}", self.anchor);
        self.curve
            .add_control_point(self.tangent_in, self.anchor, Some(control));
        AtControlPoint1::new(self.curve)
    }

    /// Join the current anchor to `next` with a straight line.
    ///
    /// The line is expressed as a cubic segment whose control points sit one
    /// and two thirds of the way from the current anchor to `next`.
    pub fn anchor_point(self, next: impl Into<Vec2>) -> Self {
        let next = next.into();
        let (near, far) = point::thirds(self.anchor, next);
        self.control_point1(near).control_point2(far).anchor_point(next)
    }

    /// Finish the curve, committing the current anchor with no outgoing
    /// tangent.
    pub fn build(mut self) -> Curve {
        trace!("curve builder: final anchor at {}", self.anchor);
        self.curve.add_control_point(self.tangent_in, self.anchor, None);
        self.curve
    }
}
