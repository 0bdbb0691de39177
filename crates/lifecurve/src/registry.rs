//! Named preset curves over the unit interval.
//!
//! Every preset starts at `x = 0` and ends at `x = 1`, matching the usual
//! convention of X as fractional particle life.

use crate::{
    Curve,
    error::{Error, Result},
};

/// Metadata and constructor for a preset.
#[derive(Debug, Clone, Copy)]
pub struct PresetEntry {
    /// Lookup key used by [`construct`] and the CLI.
    pub key: &'static str,
    /// Human-readable name.
    pub display: &'static str,
    /// Short description of the shape.
    pub info: &'static str,
    /// Builds a fresh copy of the curve.
    pub build: fn() -> Curve,
}

/// All presets, in display order.
pub const REGISTRY: &[PresetEntry] = &[
    PresetEntry {
        key: "linear",
        display: "Linear",
        info: "Straight rise from 0 to 1.",
        build: linear,
    },
    PresetEntry {
        key: "constant",
        display: "Constant",
        info: "Holds 1 for the whole lifetime.",
        build: constant,
    },
    PresetEntry {
        key: "ease-in",
        display: "Ease In",
        info: "Starts flat and accelerates; follows t².",
        build: ease_in,
    },
    PresetEntry {
        key: "ease-out",
        display: "Ease Out",
        info: "Starts fast and settles; follows 1 - (1 - t)².",
        build: ease_out,
    },
    PresetEntry {
        key: "ease-in-out",
        display: "Ease In-Out",
        info: "Flat at both ends; follows the smoothstep 3t² - 2t³.",
        build: ease_in_out,
    },
    PresetEntry {
        key: "fade",
        display: "Fade",
        info: "Rises over the first fifth, holds, and falls over the last fifth.",
        build: fade,
    },
    PresetEntry {
        key: "pulse",
        display: "Pulse",
        info: "Smooth swell up to 1 at mid-life and back down to 0.",
        build: pulse,
    },
];

/// Keys of all presets, in display order.
pub const PRESET_NAMES: &[&str] = &[
    "linear",
    "constant",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "fade",
    "pulse",
];

/// Look up a preset entry by key.
pub fn find(name: &str) -> Option<&'static PresetEntry> {
    REGISTRY.iter().find(|e| e.key == name)
}

/// Build the preset named `name`.
pub fn construct(name: &str) -> Result<Curve> {
    find(name)
        .map(|entry| (entry.build)())
        .ok_or_else(|| Error::UnknownPreset(name.to_string()))
}

/// Straight rise from 0 to 1.
fn linear() -> Curve {
    Curve::builder()
        .anchor_point((0.0, 0.0))
        .anchor_point((1.0, 1.0))
        .build()
}

/// Flat line at 1.
fn constant() -> Curve {
    Curve::builder()
        .anchor_point((0.0, 1.0))
        .anchor_point((1.0, 1.0))
        .build()
}

/// Quadratic ease in.
fn ease_in() -> Curve {
    Curve::builder()
        .anchor_point((0.0, 0.0))
        .control_point1((1.0 / 3.0, 0.0))
        .control_point2((2.0 / 3.0, 1.0 / 3.0))
        .anchor_point((1.0, 1.0))
        .build()
}

/// Quadratic ease out.
fn ease_out() -> Curve {
    Curve::builder()
        .anchor_point((0.0, 0.0))
        .control_point1((1.0 / 3.0, 2.0 / 3.0))
        .control_point2((2.0 / 3.0, 1.0))
        .anchor_point((1.0, 1.0))
        .build()
}

/// Smoothstep.
fn ease_in_out() -> Curve {
    Curve::builder()
        .anchor_point((0.0, 0.0))
        .control_point1((1.0 / 3.0, 0.0))
        .control_point2((2.0 / 3.0, 1.0))
        .anchor_point((1.0, 1.0))
        .build()
}

/// Trapezoid: rise, hold, fall.
fn fade() -> Curve {
    Curve::builder()
        .anchor_point((0.0, 0.0))
        .anchor_point((0.2, 1.0))
        .anchor_point((0.8, 1.0))
        .anchor_point((1.0, 0.0))
        .build()
}

/// Two smoothsteps meeting at the peak.
fn pulse() -> Curve {
    Curve::builder()
        .anchor_point((0.0, 0.0))
        .control_point1((1.0 / 6.0, 0.0))
        .control_point2((1.0 / 3.0, 1.0))
        .anchor_point((0.5, 1.0))
        .control_point1((2.0 / 3.0, 1.0))
        .control_point2((5.0 / 6.0, 0.0))
        .anchor_point((1.0, 0.0))
        .build()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn names_match_registry() {
        let keys: Vec<&str> = REGISTRY.iter().map(|e| e.key).collect();
        assert_eq!(keys, PRESET_NAMES);
    }

    #[test]
    fn unknown_preset_is_an_error() {
        assert!(matches!(
            construct("wobble"),
            Err(Error::UnknownPreset(name)) if name == "wobble"
        ));
    }

    #[test]
    fn presets_span_unit_interval() -> Result<()> {
        for name in PRESET_NAMES {
            let curve = construct(name)?;
            assert_eq!(curve.domain(), Some((0.0, 1.0)), "{name}");
        }
        Ok(())
    }

    #[test]
    fn easing_shapes() -> Result<()> {
        let ease_in = construct("ease-in")?;
        let ease_out = construct("ease-out")?;
        let ease_in_out = construct("ease-in-out")?;
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            assert_relative_eq!(ease_in.value(t), t * t, epsilon = 1e-5);
            assert_relative_eq!(ease_out.value(t), 1.0 - (1.0 - t) * (1.0 - t), epsilon = 1e-5);
            assert_relative_eq!(ease_in_out.value(t), t * t * (3.0 - 2.0 * t), epsilon = 1e-5);
        }
        Ok(())
    }

    #[test]
    fn fade_and_pulse_shapes() -> Result<()> {
        let fade = construct("fade")?;
        assert_relative_eq!(fade.value(0.1), 0.5, epsilon = 1e-5);
        assert_relative_eq!(fade.value(0.5), 1.0, epsilon = 1e-5);
        assert_relative_eq!(fade.value(0.9), 0.5, epsilon = 1e-5);

        let pulse = construct("pulse")?;
        assert_relative_eq!(pulse.value(0.0), 0.0, epsilon = 1e-6);
        assert_relative_eq!(pulse.value(0.5), 1.0, epsilon = 1e-6);
        assert_relative_eq!(pulse.value(0.25), pulse.value(0.75), epsilon = 1e-6);
        Ok(())
    }
}
