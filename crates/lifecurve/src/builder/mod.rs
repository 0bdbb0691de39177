//! Typestate builder producing a single well-formed [`Curve`].
//!
//! A curve is a series of anchors joined either by straight lines or by
//! cubic segments shaped by two control points. Each call appends to the curve
//! under construction and returns the stage that decides which calls are legal
//! next:
//!
//! | Stage               | Call               | Next stage          |
//! |---------------------|--------------------|---------------------|
//! | [`CurveBuilder`]    | `anchor_point`     | [`AtAnchor`]        |
//! | [`AtAnchor`]        | `control_point1`   | [`AtControlPoint1`] |
//! | [`AtAnchor`]        | `anchor_point`     | [`AtAnchor`]        |
//! | [`AtAnchor`]        | `build`            | [`Curve`]           |
//! | [`AtControlPoint1`] | `control_point2`   | [`AtControlPoint2`] |
//! | [`AtControlPoint2`] | `anchor_point`     | [`AtAnchor`]        |
//!
//! Every transition consumes its stage, so a stage cannot be used twice and two
//! diverging continuations can never share one curve. Each transition below
//! fails to compile when repeated on the same stage.
//!
//! [`CurveBuilder::anchor_point`]:
//!
//! ```compile_fail
//! use lifecurve::Curve;
//!
//! let builder = Curve::builder();
//! let first = builder.anchor_point((0.0, 0.0));
//! let second = builder.anchor_point((0.0, 1.0));
//! ```
//!
//! [`AtAnchor::control_point1`]:
//!
//! ```compile_fail
//! use lifecurve::Curve;
//!
//! let start = Curve::builder().anchor_point((0.0, 0.0));
//! let first = start.control_point1((0.3, 1.0));
//! let second = start.control_point1((0.3, 2.0));
//! ```
//!
//! [`AtAnchor::anchor_point`]:
//!
//! ```compile_fail
//! use lifecurve::Curve;
//!
//! let start = Curve::builder().anchor_point((0.0, 0.0));
//! let first = start.anchor_point((1.0, 1.0));
//! let second = start.anchor_point((1.0, 2.0));
//! ```
//!
//! [`AtAnchor::build`]:
//!
//! ```compile_fail
//! use lifecurve::Curve;
//!
//! let start = Curve::builder().anchor_point((0.0, 0.0));
//! let first = start.build();
//! let second = start.build();
//! ```
//!
//! [`AtControlPoint1::control_point2`]:
//!
//! ```compile_fail
//! use lifecurve::Curve;
//!
//! let c1 = Curve::builder().anchor_point((0.0, 0.0)).control_point1((0.3, 1.0));
//! let first = c1.control_point2((0.6, 1.0));
//! let second = c1.control_point2((0.6, 2.0));
//! ```
//!
//! [`AtControlPoint2::anchor_point`]:
//!
//! ```compile_fail
//! use lifecurve::Curve;
//!
//! let c2 = Curve::builder()
//!     .anchor_point((0.0, 0.0))
//!     .control_point1((0.3, 1.0))
//!     .control_point2((0.6, 1.0));
//! let first = c2.anchor_point((1.0, 1.0));
//! let second = c2.anchor_point((1.0, 2.0));
//! ```
//!
//! The same chains compile when each stage is used once:
//!
//! ```
//! use lifecurve::Curve;
//!
//! let c2 = Curve::builder()
//!     .anchor_point((0.0, 0.0))
//!     .control_point1((0.3, 1.0))
//!     .control_point2((0.6, 1.0));
//! let curve = c2.anchor_point((1.0, 1.0)).anchor_point((2.0, 0.0)).build();
//! assert_eq!(curve.len(), 3);
//! ```

use log::trace;

use crate::{curve::Curve, point::Vec2};

/// The anchor stage and its transitions.
mod anchor;
/// The two control point stages.
mod control;

pub use self::{
    anchor::AtAnchor,
    control::{AtControlPoint1, AtControlPoint2},
};

/// Entry stage: nothing has been placed yet.
#[derive(Debug, Default)]
#[must_use = "a builder does nothing until it is driven to `build`"]
pub struct CurveBuilder {
    /// The curve under construction.
    curve: Curve,
}

impl CurveBuilder {
    /// Start a new, empty curve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the first anchor, where the curve starts. It has no incoming
    /// tangent.
    pub fn anchor_point(self, start: impl Into<Vec2>) -> AtAnchor {
        let start = start.into();
        trace!("curve builder: first anchor at {start}");
        AtAnchor::new(self.curve, None, start)
    }
}
