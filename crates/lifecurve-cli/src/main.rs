//! Command‑line entry point for the `lifecurve` tool.
//!
//! Provides subcommands to list presets, inspect curves, evaluate or sample
//! them, and export curves as JSON.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
    process,
};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use lifecurve::registry;
use log::LevelFilter;

/// CLI command implementations.
mod cmd;

use crate::cmd::{SampleFormat, Source};

/// Validate a preset name against the registry.
fn parse_preset_name(s: &str) -> Result<String, String> {
    if registry::PRESET_NAMES.contains(&s) {
        Ok(s.to_string())
    } else {
        Err(format!(
            "Invalid preset name '{}'. Valid options: {}",
            s,
            registry::PRESET_NAMES.join(", ")
        ))
    }
}

#[derive(Parser)]
#[command(name = "lifecurve")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, global = true, action = clap::ArgAction::Count, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

/// The curve a subcommand operates on: a preset or a JSON file.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct CurveArgs {
    #[arg(
        short = 'p',
        long = "preset",
        value_parser = parse_preset_name,
        help = &format!("Preset name (options: {})", registry::PRESET_NAMES.join(", "))
    )]
    /// Preset to load.
    preset: Option<String>,

    #[arg(help = "Curve JSON file")]
    /// JSON file to load.
    file: Option<PathBuf>,
}

impl CurveArgs {
    /// The source these arguments select.
    fn source(&self) -> Source<'_> {
        match (&self.preset, &self.file) {
            (Some(name), _) => Source::Preset(name),
            (None, Some(path)) => Source::File(path),
            (None, None) => unreachable!("clap requires one of --preset or FILE"),
        }
    }
}

#[derive(Subcommand)]
/// Subcommands supported by the `lifecurve` tool.
enum Commands {
    #[command(about = "List preset curves")]
    /// List the preset registry.
    Presets,

    #[command(about = "Show the control points of a curve")]
    /// Show the control points of a curve.
    Show {
        /// Curve to show.
        #[command(flatten)]
        curve: CurveArgs,
    },

    #[command(about = "Evaluate a curve at one or more positions")]
    /// Evaluate a curve at the given positions.
    Eval {
        /// Curve to evaluate.
        #[command(flatten)]
        curve: CurveArgs,

        #[arg(
            short = 'x',
            long = "at",
            required = true,
            num_args = 1..,
            allow_negative_numbers = true,
            help = "Positions to evaluate"
        )]
        /// Positions along the independent axis.
        positions: Vec<f32>,
    },

    #[command(about = "Sample a curve evenly across its domain")]
    /// Sample a curve at evenly spaced positions.
    Sample {
        /// Curve to sample.
        #[command(flatten)]
        curve: CurveArgs,

        #[arg(
            short = 'n',
            long = "steps",
            default_value_t = 11,
            value_parser = clap::value_parser!(u32).range(1..=100_000),
            help = "Number of samples, including both ends"
        )]
        /// Number of samples.
        steps: u32,

        #[arg(long = "format", value_enum, default_value_t = SampleFormat::Tsv)]
        /// Output format.
        format: SampleFormat,
    },

    #[command(about = "Write a curve as JSON")]
    /// Export a curve as JSON.
    Export {
        /// Curve to export.
        #[command(flatten)]
        curve: CurveArgs,

        #[arg(short = 'o', long = "output", help = "Output file; prints to stdout when omitted")]
        /// Optional output path.
        output: Option<PathBuf>,
    },
}

/// Print a report or exit with an error.
fn report<E: Display>(result: Result<String, E>) {
    match result {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    }
}

/// Map the `-v` count to a log level.
fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Handle the `show` subcommand.
fn handle_show(curve: &CurveArgs) -> Result<String> {
    cmd::show(&cmd::load(curve.source())?)
}

/// Handle the `eval` subcommand.
fn handle_eval(curve: &CurveArgs, positions: &[f32]) -> Result<String> {
    cmd::eval(&cmd::load(curve.source())?, positions)
}

/// Handle the `sample` subcommand.
fn handle_sample(curve: &CurveArgs, steps: u32, format: SampleFormat) -> Result<String> {
    cmd::sample(&cmd::load(curve.source())?, steps as usize, format)
}

/// Handle the `export` subcommand.
fn handle_export(curve: &CurveArgs, output: Option<&Path>) -> Result<String> {
    let written = cmd::export(&cmd::load(curve.source())?, output)?;
    Ok(match (written, output) {
        (Some(json), _) => format!("{json}\n"),
        (None, Some(path)) => format!("Wrote {}\n", path.display()),
        (None, None) => String::new(),
    })
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(log_level(cli.v))
        .init();

    match cli.command {
        Commands::Presets => print!("{}", cmd::presets()),
        Commands::Show { curve } => report(handle_show(&curve)),
        Commands::Eval { curve, positions } => report(handle_eval(&curve, &positions)),
        Commands::Sample {
            curve,
            steps,
            format,
        } => report(handle_sample(&curve, steps, format)),
        Commands::Export { curve, output } => {
            report(handle_export(&curve, output.as_deref()));
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn rejects_unknown_presets() {
        assert!(parse_preset_name("fade").is_ok());
        assert!(parse_preset_name("wobble").is_err());
    }

    #[test]
    fn preset_and_file_are_exclusive() {
        assert!(Cli::try_parse_from(["lifecurve", "show", "-p", "fade", "curve.json"]).is_err());
        assert!(Cli::try_parse_from(["lifecurve", "show"]).is_err());
        assert!(Cli::try_parse_from(["lifecurve", "show", "-p", "fade"]).is_ok());
        assert!(Cli::try_parse_from(["lifecurve", "show", "curve.json"]).is_ok());
    }

    #[test]
    fn source_follows_the_given_argument() {
        let preset = CurveArgs {
            preset: Some("fade".to_string()),
            file: None,
        };
        assert!(matches!(preset.source(), Source::Preset("fade")));

        let file = CurveArgs {
            preset: None,
            file: Some(PathBuf::from("curve.json")),
        };
        assert!(matches!(file.source(), Source::File(p) if p == Path::new("curve.json")));
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(log_level(0), LevelFilter::Warn);
        assert_eq!(log_level(3), LevelFilter::Trace);
        assert_eq!(log_level(9), LevelFilter::Trace);
    }
}
