use clap::Parser;
use std::path::PathBuf;
use stroke2bez::kurbo::Point;
use stroke2bez::output::svg::DEFAULT_FILE_NAME;
use stroke2bez::{LineWidth, SketchConfig, Spacing, StrokeError, Surface, DEFAULT_STROKE_WIDTH};
use tracing::Level;

#[derive(Parser)]
#[command(name = "stroke2bez", about = "Freehand stroke to smooth bezier SVG")]
struct Cli {
    /// Recorded stroke: JSON array of {"x": .., "y": ..} in surface pixels
    #[arg(short, long)]
    input: PathBuf,

    /// Output SVG path
    #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
    output: PathBuf,

    /// Drawing surface width in pixels
    #[arg(long, default_value = "800")]
    surface_width: f64,

    /// Drawing surface height in pixels
    #[arg(long, default_value = "400")]
    surface_height: f64,

    /// Curve stroke width (1-20)
    #[arg(short = 'w', long, default_value_t = DEFAULT_STROKE_WIDTH)]
    stroke_width: f64,

    /// Scale the curve width with the surface instead of using --stroke-width
    #[arg(long)]
    adaptive_width: bool,

    /// Fixed minimum sample spacing (adaptive to surface width if omitted)
    #[arg(long)]
    spacing: Option<f64>,

    /// Point to classify against the fitted curves, as X,Y (repeatable)
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    probe: Vec<Point>,

    /// Also render a PNG preview of the surface
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Leave the raw sample polyline out of the preview
    #[arg(long)]
    hide_raw: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x '{}': {}", x, e))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y '{}': {}", y, e))?;
    Ok(Point::new(x, y))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = SketchConfig {
        spacing: cli.spacing.map_or(Spacing::Adaptive, Spacing::Fixed),
        curve_width: if cli.adaptive_width {
            LineWidth::Adaptive
        } else {
            LineWidth::Fixed(cli.stroke_width)
        },
        show_raw_stroke: !cli.hide_raw,
    };
    let surface = Surface::new(cli.surface_width, cli.surface_height)?;

    let samples: Vec<Point> = serde_json::from_slice(&std::fs::read(&cli.input)?)
        .map_err(StrokeError::from)?;

    eprintln!();
    eprintln!("  stroke2bez \u{00b7} {}", cli.input.display());
    eprintln!();

    let mut sketch = stroke2bez::replay(&samples, surface, config)?;
    eprintln!(
        "  Sample      {} recorded \u{2192} {} accepted  (spacing {:.1})",
        samples.len(),
        sketch.samples().len(),
        sketch.min_spacing(),
    );
    eprintln!("  Fit         {} segments", sketch.curves().len());

    if !cli.probe.is_empty() {
        sketch.toggle_probe_mode();
        for &point in &cli.probe {
            if let Some(probe) = sketch.click(point) {
                eprintln!(
                    "  Probe       ({}, {}) \u{2192} winding {} ({:?})",
                    point.x,
                    point.y,
                    probe.winding,
                    probe.containment(),
                );
            }
        }
    }

    match sketch.export() {
        Ok(doc) => {
            doc.write_to(&cli.output)?;
            eprintln!("  Export      {}x{}  \u{2713} {}", doc.width, doc.height, cli.output.display());
        }
        Err(StrokeError::EmptyCurveSet) => {
            eprintln!("  Export      nothing to export (fewer than 2 accepted samples)");
        }
        Err(e) => return Err(e.into()),
    }

    if let Some(preview) = &cli.preview {
        stroke2bez::render::render_png(&sketch, preview)?;
        eprintln!("  Preview     {}", preview.display());
    }

    eprintln!();
    Ok(())
}
