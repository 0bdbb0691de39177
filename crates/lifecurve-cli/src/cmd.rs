//! Command handlers for the `lifecurve` CLI.
//!
//! Each handler renders its report to a `String` so that `main` only has to
//! print it.

use std::{fmt::Write, path::Path};

use anyhow::{Context, Result, bail};
use lifecurve::{Curve, Vec2, persist, preset_from_name, registry};
use log::info;

/// Where a curve is read from.
#[derive(Clone, Copy, Debug)]
pub enum Source<'a> {
    /// A preset from the registry.
    Preset(&'a str),
    /// A JSON file written by `export` or by [`persist::save`].
    File(&'a Path),
}

/// Output format for `sample`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SampleFormat {
    /// Tab separated `x` and `y` columns.
    #[default]
    Tsv,
    /// A JSON array of `[x, y]` pairs. Non-finite values are written as
    /// `null`.
    Json,
}

/// Load the curve named by `source`.
pub fn load(source: Source<'_>) -> Result<Curve> {
    let curve = match source {
        Source::Preset(name) => preset_from_name(name)?,
        Source::File(path) => persist::load(path)
            .with_context(|| format!("failed to load curve from {}", path.display()))?,
    };
    info!("loaded curve with {} control points", curve.len());
    Ok(curve)
}

/// Format a float with fixed precision, keeping output stable across runs.
fn num(v: f32) -> String {
    format!("{v:.6}")
}

/// Format an optional tangent.
fn tangent(t: Option<Vec2>) -> String {
    t.map_or_else(|| "-".to_string(), |t| format!("({}, {})", num(t.x), num(t.y)))
}

/// List the control points of a curve, one per line, with the kind of the
/// segment leaving each point.
pub fn show(curve: &Curve) -> Result<String> {
    let mut out = String::new();
    let points = curve.control_points();
    for (i, p) in points.iter().enumerate() {
        let segment = match points.get(i + 1) {
            None => "end",
            Some(next) if p.is_straight_to(next) => "line",
            Some(_) => "cubic",
        };
        writeln!(
            out,
            "{i}\tanchor ({}, {})\tin {}\tout {}\t{segment}",
            num(p.x()),
            num(p.y()),
            tangent(p.tangent_in),
            tangent(p.tangent_out),
        )?;
    }
    Ok(out)
}

/// Evaluate the curve at each position, one `x\ty` line per position.
pub fn eval(curve: &Curve, positions: &[f32]) -> Result<String> {
    let mut out = String::new();
    for &x in positions {
        writeln!(out, "{}\t{}", num(x), num(curve.value(x)))?;
    }
    Ok(out)
}

/// Sample the curve evenly across its domain.
pub fn sample(curve: &Curve, steps: usize, format: SampleFormat) -> Result<String> {
    if curve.is_empty() {
        bail!("curve has no control points");
    }
    let samples = curve.sample(steps);
    let mut out = String::new();
    match format {
        SampleFormat::Tsv => {
            for s in samples {
                writeln!(out, "{}\t{}", num(s.x), num(s.y))?;
            }
        }
        SampleFormat::Json => writeln!(out, "{}", serde_json::to_string(&samples)?)?,
    }
    Ok(out)
}

/// Serialize the curve as pretty JSON, writing to `output` when given and
/// returning the JSON otherwise.
pub fn export(curve: &Curve, output: Option<&Path>) -> Result<Option<String>> {
    match output {
        Some(path) => {
            persist::save(curve, path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            Ok(None)
        }
        None => Ok(Some(persist::to_json_pretty(curve)?)),
    }
}

/// Describe every registered preset.
pub fn presets() -> String {
    let mut out = String::from("Presets (key — display — shape):\n");
    for entry in registry::REGISTRY {
        out.push_str(&format!("- {} — {} — {}\n", entry.key, entry.display, entry.info));
    }
    out
}
