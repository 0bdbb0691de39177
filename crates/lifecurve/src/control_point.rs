//! Anchors and their tangent offsets.

use serde::{Deserialize, Serialize};

use crate::point::{self, Vec2};

/// Tolerance used when checking whether tangents sit on a straight segment.
const STRAIGHT_EPSILON: f32 = 1e-5;

/// An anchor the curve passes through, with the tangents shaping the
/// segments on either side of it.
///
/// Only the first point of a curve lacks `tangent_in`, and only the last lacks
/// `tangent_out`. No validation happens here; the curve and builder are
/// responsible for that.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Shapes the approach into `anchor` from the previous segment.
    pub tangent_in: Option<Vec2>,
    /// The point the curve passes through exactly.
    pub anchor: Vec2,
    /// Shapes the departure from `anchor` into the next segment.
    pub tangent_out: Option<Vec2>,
}

impl ControlPoint {
    /// Create a control point from its incoming tangent, anchor and outgoing
    /// tangent.
    pub fn new(tangent_in: Option<Vec2>, anchor: impl Into<Vec2>, tangent_out: Option<Vec2>) -> Self {
        Self {
            tangent_in,
            anchor: anchor.into(),
            tangent_out,
        }
    }

    /// Anchor X, the key the curve orders by.
    #[inline]
    pub fn x(&self) -> f32 {
        self.anchor.x
    }

    /// Anchor Y, the value the curve takes at [`Self::x`].
    #[inline]
    pub fn y(&self) -> f32 {
        self.anchor.y
    }

    /// Y of the incoming tangent, or of the anchor when there is none.
    #[inline]
    pub fn incoming_y(&self) -> f32 {
        self.tangent_in.map_or(self.anchor.y, |t| t.y)
    }

    /// Y of the outgoing tangent, or of the anchor when there is none.
    #[inline]
    pub fn outgoing_y(&self) -> f32 {
        self.tangent_out.map_or(self.anchor.y, |t| t.y)
    }

    /// Whether the segment from `self` to `next` is a straight line, i.e. both
    /// tangents sit on the thirds of the chord between the anchors.
    pub fn is_straight_to(&self, next: &Self) -> bool {
        let (Some(out), Some(inc)) = (self.tangent_out, next.tangent_in) else {
            return false;
        };
        let (near, far) = point::thirds(self.anchor, next.anchor);
        out.abs_diff_eq(near, STRAIGHT_EPSILON) && inc.abs_diff_eq(far, STRAIGHT_EPSILON)
    }
}
