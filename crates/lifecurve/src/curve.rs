//! The curve container and its sampling algorithm.

use smallvec::SmallVec;

use crate::{
    builder::CurveBuilder,
    control_point::ControlPoint,
    point::{Vec2, lerp},
};

/// A piecewise cubic curve whose independent axis never runs backwards.
///
/// Control points are kept ordered by ascending anchor X after every
/// insertion. Points sharing an X keep the order they were inserted in. Each
/// segment is blended in Y only, with the blend fraction taken from the two
/// anchors' X positions, so the tangents' X coordinates never change the
/// result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Curve {
    /// Control points, ascending by anchor X.
    points: SmallVec<[ControlPoint; 4]>,
}

impl Curve {
    /// Create an empty curve. Sampling an empty curve yields `0.0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a curve with the typestate builder.
    ///
    /// In normal usage the first anchor sits at `x = 0`, every further anchor
    /// advances along X and the last anchor sits at `x = 1`, since X is usually
    /// the fractional life of a particle.
    pub fn builder() -> CurveBuilder {
        CurveBuilder::new()
    }

    /// Build a curve by inserting each control point in turn.
    pub fn from_control_points(points: impl IntoIterator<Item = ControlPoint>) -> Self {
        let mut curve = Self::new();
        for p in points {
            curve.insert(p);
        }
        curve
    }

    /// Insert a control point, keeping the points ordered by anchor X.
    ///
    /// Returns `self` so insertions can be chained.
    pub fn add_control_point(
        &mut self,
        tangent_in: Option<Vec2>,
        anchor: impl Into<Vec2>,
        tangent_out: Option<Vec2>,
    ) -> &mut Self {
        self.insert(ControlPoint::new(tangent_in, anchor, tangent_out));
        self
    }

    /// Insert after every point whose anchor X is not greater than the new one.
    ///
    /// `-0.0` and `0.0` compare equal. NaN anchors always go last.
    fn insert(&mut self, point: ControlPoint) {
        let x = point.x();
        let at = self.points.partition_point(|p| p.x() <= x || x.is_nan());
        self.points.insert(at, point);
    }

    /// The control points in ascending anchor X order.
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Number of control points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve has no control points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The anchor X of the first and last control points.
    pub fn domain(&self) -> Option<(f32, f32)> {
        Some((self.points.first()?.x(), self.points.last()?.x()))
    }

    /// Sample the curve at `position` along the independent axis.
    ///
    /// Positions before the first anchor answer the first anchor's Y and
    /// positions past the last anchor answer the last anchor's Y. An empty
    /// curve answers `0.0`. Within a segment the result is a cubic blend of
    /// the Y values of the left anchor, its outgoing tangent, the right
    /// anchor's incoming tangent and the right anchor.
    pub fn value(&self, position: f32) -> f32 {
        // First point with anchor.x >= position. A NaN position falls off the
        // end, like a forward scan that never finds a match.
        let idx = self
            .points
            .partition_point(|p| p.x() < position || position.is_nan());

        let Some(last) = self.points.last() else {
            return 0.0;
        };
        if idx == self.points.len() {
            return last.y();
        }

        let cur = &self.points[idx];
        if idx == 0 {
            return cur.y();
        }
        let prev = &self.points[idx - 1];

        // prev.x < position <= cur.x, so the span is never zero.
        let f = (position - prev.x()) / (cur.x() - prev.x());
        blend(prev.y(), prev.outgoing_y(), cur.incoming_y(), cur.y(), f)
    }

    /// Sample `steps` evenly spaced positions across the curve's domain,
    /// including both ends.
    ///
    /// A single step samples the first anchor only; an empty curve or zero
    /// steps yields nothing.
    pub fn sample(&self, steps: usize) -> Vec<Vec2> {
        let Some((start, end)) = self.domain() else {
            return Vec::new();
        };
        match steps {
            0 => Vec::new(),
            1 => vec![Vec2::new(start, self.value(start))],
            _ => {
                let last = (steps - 1) as f32;
                (0..steps)
                    .map(|i| {
                        let x = if i + 1 == steps {
                            end
                        } else {
                            lerp(start, end, i as f32 / last)
                        };
                        Vec2::new(x, self.value(x))
                    })
                    .collect()
            }
        }
    }
}

/// De Casteljau reduction of four guide values at fraction `f`.
#[inline]
fn blend(p0: f32, p1: f32, p2: f32, p3: f32, f: f32) -> f32 {
    let a = lerp(p0, p1, f);
    let b = lerp(p1, p2, f);
    let c = lerp(p2, p3, f);
    let d = lerp(a, b, f);
    let e = lerp(b, c, f);
    lerp(d, e, f)
}
