//! `squircle-studio`: print squircle outlines and exercise the incremental engine.

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use squircle_engine::logging::{init_logging, LoggingConfig};
use squircle_engine::params::normalize_size;
use squircle_engine::{
    compute_squircle_path_with,
    css_clip_path,
    svg_document,
    DynamicSquircle,
    RadiusSpec,
    SquircleArgs,
    SquircleConfig,
    SquircleUpdate,
};

#[derive(Parser)]
#[command(name = "squircle-studio", version, about = "Smoothed-corner rectangle outlines as SVG path data")]
struct Cli {
    /// Log engine decisions (shortcuts, clamps) at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the outline for one set of parameters
    Path {
        #[command(flatten)]
        shape: ShapeArgs,

        /// Output form
        #[arg(long, value_enum, default_value_t = Format::D)]
        format: Format,

        /// Fill color for `--format svg`
        #[arg(long, default_value = "black")]
        fill: String,
    },

    /// Animate the radius through an incremental engine and check every frame
    Sweep {
        #[command(flatten)]
        shape: ShapeArgs,

        /// Number of radius updates
        #[arg(long, default_value = "60")]
        steps: u32,

        /// Radius reached on the last step
        #[arg(long, allow_hyphen_values = true)]
        to_radius: f64,
    },

    /// Print the engine state after construction as JSON
    State {
        #[command(flatten)]
        shape: ShapeArgs,
    },
}

#[derive(Args)]
struct ShapeArgs {
    #[arg(long, allow_hyphen_values = true)]
    height: f64,

    #[arg(long, allow_hyphen_values = true)]
    width: f64,

    /// Single radius ("24") or per-corner pairs ("default=8,tl=24,br=0")
    #[arg(short, long, default_value = "0")]
    radius: RadiusSpec,

    /// Corner smoothing, 0 (plain arc) to 1
    #[arg(short, long, default_value = "0.6", allow_hyphen_values = true)]
    smoothing: f64,

    /// Decimal places for non-integral coordinates
    #[arg(long, default_value = "4")]
    precision: usize,
}

impl ShapeArgs {
    fn args(&self) -> SquircleArgs {
        SquircleArgs::new(self.height, self.width)
            .with_radius(self.radius)
            .with_smoothing(self.smoothing)
    }

    fn config(&self) -> SquircleConfig {
        SquircleConfig { precision: self.precision, ..SquircleConfig::default() }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Bare path data
    D,
    /// CSS `clip-path` value
    Css,
    /// Standalone SVG document
    Svg,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose { LoggingConfig::verbose() } else { LoggingConfig::default() });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Path { shape, format, fill } => print_path(&mut out, &shape, format, &fill),
        Command::Sweep { shape, steps, to_radius } => sweep(&mut out, &shape, steps, to_radius),
        Command::State { shape } => print_state(&mut out, &shape),
    }
}

fn print_path(out: &mut impl Write, shape: &ShapeArgs, format: Format, fill: &str) -> Result<()> {
    let d = compute_squircle_path_with(&shape.args(), &shape.config());
    let text = match format {
        Format::D => d,
        Format::Css => css_clip_path(&d),
        Format::Svg => {
            let size = normalize_size(shape.height, shape.width);
            svg_document(&d, size.height, size.width, fill)
        }
    };
    writeln!(out, "{text}").context("failed to write path")
}

/// Steps a uniform radius from the starting spec's top-left value to `to_radius`.
fn sweep(out: &mut impl Write, shape: &ShapeArgs, steps: u32, to_radius: f64) -> Result<()> {
    let args = shape.args();
    let config = shape.config();
    let mut engine = DynamicSquircle::with_config(&args, config);
    engine.manual_draw();

    let from = args.radius.raw_radii().top_left;
    let (mut redraws, mut unchanged, mut mismatches) = (0u32, 0u32, 0u32);

    for step in 1..=steps {
        let radius = from + (to_radius - from) * f64::from(step) / f64::from(steps);
        let Some(d) = engine.update(SquircleUpdate::new().with_radius(radius)) else {
            unchanged += 1;
            continue;
        };
        redraws += 1;

        let expected = compute_squircle_path_with(engine.args(), &config);
        if d != expected {
            mismatches += 1;
            log::warn!("step {step} (radius {radius}): incremental path differs from a fresh build");
            log::debug!("incremental: {d}");
            log::debug!("fresh:       {expected}");
        }
    }

    writeln!(out, "steps: {steps}, redraws: {redraws}, unchanged: {unchanged}, mismatches: {mismatches}")
        .context("failed to write sweep report")?;
    if mismatches > 0 {
        bail!("{mismatches} of {redraws} incremental redraws differ from a fresh build");
    }
    Ok(())
}

fn print_state(out: &mut impl Write, shape: &ShapeArgs) -> Result<()> {
    let engine = DynamicSquircle::with_config(&shape.args(), shape.config());
    let json = serde_json::to_string_pretty(&engine.read()).context("failed to serialize engine state")?;
    writeln!(out, "{json}").context("failed to write engine state")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("squircle-studio").chain(args.iter().copied())).unwrap()
    }

    fn run(args: &[&str]) -> Result<String> {
        let cli = parse(args);
        let mut out = Vec::new();
        match cli.command {
            Command::Path { shape, format, fill } => print_path(&mut out, &shape, format, &fill)?,
            Command::Sweep { shape, steps, to_radius } => sweep(&mut out, &shape, steps, to_radius)?,
            Command::State { shape } => print_state(&mut out, &shape)?,
        }
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn radius_spec_is_parsed() {
        let cli = parse(&["path", "--height", "10", "--width", "20", "-r", "default=2,tl=4"]);
        let Command::Path { shape, .. } = cli.command else { panic!("expected path") };
        assert_eq!(shape.radius, RadiusSpec::with_default(2.0).corner(squircle_engine::Corner::TopLeft, 4.0));
    }

    #[test]
    fn bad_radius_spec_is_rejected() {
        let result = Cli::try_parse_from(["squircle-studio", "path", "--height", "1", "--width", "1", "-r", "tl=x"]);
        assert!(result.is_err());
    }

    #[test]
    fn path_prints_circle() {
        let text = run(&["path", "--height", "200", "--width", "200", "-r", "100"]).unwrap();
        assert_eq!(text, "M 100 0 a 100 100 0 0 0 0 200 a 100 100 0 0 0 0 -200 Z\n");
    }

    #[test]
    fn path_formats() {
        let css = run(&["path", "--height", "0", "--width", "10", "--format", "css"]).unwrap();
        assert_eq!(css, "none\n");
        let svg = run(&["path", "--height", "10", "--width", "20", "--format", "svg", "--fill", "red"]).unwrap();
        assert!(svg.starts_with("<svg height=\"10\" width=\"20\""));
        assert!(svg.contains("fill=\"red\""));
    }

    #[test]
    fn sweep_reports_no_mismatches() {
        let text = run(&["sweep", "--height", "200", "--width", "300", "-r", "0", "--to-radius", "120", "--steps", "24"])
            .unwrap();
        assert!(text.ends_with("mismatches: 0\n"), "{text}");
    }

    #[test]
    fn state_is_json() {
        let text = run(&["state", "--height", "100", "--width", "160", "-r", "30"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["geometry"]["size"]["width"], 160.0);
        assert_eq!(value["stale"], false);
    }
}
