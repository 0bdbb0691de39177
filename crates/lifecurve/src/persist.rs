//! Ordered-record export and import of curves.
//!
//! A curve persists as a record with a single named array, `points`, holding
//! its control points in order. Each point stores `tangent_in`, `anchor` and
//! `tangent_out` as `[x, y]` pairs; an absent tangent is stored as `null`,
//! never as a zero vector:
//!
//! ```json
//! {
//!   "points": [
//!     { "tangent_in": null, "anchor": [0.0, 0.0], "tangent_out": [0.2, 1.0] },
//!     { "tangent_in": [0.8, 0.0], "anchor": [1.0, 1.0], "tangent_out": null }
//!   ]
//! }
//! ```
//!
//! Loading keeps the stored order and refuses sequences that are not
//! ascending by anchor X.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{
    control_point::ControlPoint,
    curve::Curve,
    error::{Error, Result},
};

/// Plain export form of a curve: its control points in order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveRecord {
    /// Control points, ascending by anchor X.
    pub points: Vec<ControlPoint>,
}

impl CurveRecord {
    /// Check that the points are ordered by anchor X and have no NaN anchors.
    pub fn validate(&self) -> Result<()> {
        for (index, p) in self.points.iter().enumerate() {
            if p.anchor.is_nan() {
                return Err(Error::NanAnchor(index));
            }
        }
        if let Some(bad) = self.points.windows(2).position(|w| w[1].x() < w[0].x()) {
            return Err(Error::Unordered {
                index: bad + 1,
                previous: self.points[bad].x(),
                next: self.points[bad + 1].x(),
            });
        }
        Ok(())
    }
}

impl From<&Curve> for CurveRecord {
    fn from(curve: &Curve) -> Self {
        Self {
            points: curve.control_points().to_vec(),
        }
    }
}

impl From<Curve> for CurveRecord {
    fn from(curve: Curve) -> Self {
        Self::from(&curve)
    }
}

impl TryFrom<CurveRecord> for Curve {
    type Error = Error;

    fn try_from(record: CurveRecord) -> Result<Self> {
        record.validate()?;
        debug!("loaded curve with {} control points", record.points.len());
        // Already ordered, so each insertion lands at the end and equal-X
        // points keep their stored order.
        Ok(Self::from_control_points(record.points))
    }
}

impl Serialize for Curve {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CurveRecord::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Curve {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = CurveRecord::deserialize(deserializer)?;
        Self::try_from(record).map_err(de::Error::custom)
    }
}

/// Serialize a curve to compact JSON.
pub fn to_json(curve: &Curve) -> Result<String> {
    Ok(serde_json::to_string(curve)?)
}

/// Serialize a curve to indented JSON.
pub fn to_json_pretty(curve: &Curve) -> Result<String> {
    Ok(serde_json::to_string_pretty(curve)?)
}

/// Parse a curve from JSON, rejecting out-of-order points.
pub fn from_json(json: &str) -> Result<Curve> {
    let record: CurveRecord = serde_json::from_str(json)?;
    Curve::try_from(record)
}

/// Write a curve as indented JSON to `writer`.
pub fn write_json<W: Write>(curve: &Curve, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, curve)?;
    Ok(())
}

/// Read a curve as JSON from `reader`.
pub fn read_json<R: Read>(reader: R) -> Result<Curve> {
    let record: CurveRecord = serde_json::from_reader(reader)?;
    Curve::try_from(record)
}

/// Save a curve as indented JSON at `path`, replacing any existing file.
pub fn save(curve: &Curve, path: impl AsRef<Path>) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_json(curve, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Load a curve from the JSON file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Curve> {
    let path = path.as_ref();
    debug!("reading curve from {}", path.display());
    read_json(BufReader::new(File::open(path)?))
}
