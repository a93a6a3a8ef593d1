//! stroke2bez: freehand strokes → smooth cubic bezier paths.
//!
//! Samples a pointer stroke at a minimum spacing, smooths it, fits
//! chained cubic beziers through it, and exports the result as a
//! single-path SVG. A winding-number probe answers whether a point lies
//! inside the traced shape.
//!
//! # Example
//!
//! ```no_run
//! use stroke2bez::{replay, SketchConfig, Surface};
//! use stroke2bez::kurbo::Point;
//!
//! let samples = [Point::new(0.0, 0.0), Point::new(40.0, 10.0), Point::new(80.0, 0.0)];
//! let sketch = replay(&samples, Surface::new(800.0, 400.0)?, SketchConfig::default())?;
//! let svg = sketch.export()?;
//! svg.write_to(std::path::Path::new("curve.svg"))?;
//! # Ok::<(), stroke2bez::StrokeError>(())
//! ```

#![forbid(unsafe_code)]

mod config;
mod geom;
mod sketch;
mod surface;

pub mod error;
pub mod eval;
pub mod fit;
pub mod output;
pub mod render;
pub mod sample;
pub mod smooth;
pub mod winding;

// Re-export kurbo so downstream users get the same Point/CubicBez types.
pub use kurbo;

pub use config::{
    raw_stroke_width, LineWidth, SketchConfig, Spacing, DEFAULT_STROKE_WIDTH, MAX_STROKE_WIDTH,
    MIN_STROKE_WIDTH,
};
pub use error::StrokeError;
pub use eval::evaluate;
pub use fit::{fit, CurveSet};
pub use output::svg::{export, SvgDocument};
pub use sample::add_point;
pub use sketch::{Probe, Sketch};
pub use smooth::smooth;
pub use surface::Surface;
pub use winding::{classify, Containment};

use kurbo::Point;
use tracing::debug;

/// Replay recorded samples as one stroke (press, drags, release).
///
/// Samples are rate-limited exactly as live input would be, and the
/// curve set is refitted after every accepted sample.
pub fn replay(samples: &[Point], surface: Surface, config: SketchConfig) -> Result<Sketch, StrokeError> {
    let mut sketch = Sketch::new(surface, config)?;
    if let Some((&first, rest)) = samples.split_first() {
        sketch.press(first);
        for &p in rest {
            sketch.drag(p);
        }
        sketch.release();
    }
    debug!(
        recorded = samples.len(),
        accepted = sketch.samples().len(),
        segments = sketch.curves().len(),
        "replayed stroke"
    );
    Ok(sketch)
}
