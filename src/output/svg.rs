//! SVG export of a fitted curve set.
//!
//! The document is framed on the control-point bounding box plus a
//! fixed margin, with every coordinate moved into that local frame so
//! the file's own origin is its top-left corner.

use std::fmt;
use std::path::Path;

use kurbo::Point;
use tracing::debug;

use crate::error::StrokeError;
use crate::fit::CurveSet;

/// Space added on every side of the control-point bounding box.
pub const EXPORT_MARGIN: f64 = 10.0;

/// Stroke color of the exported path.
pub const STROKE_COLOR: &str = "#2563eb";

/// Suggested file name for the saved document.
pub const DEFAULT_FILE_NAME: &str = "curve.svg";

/// A self-contained single-path SVG document.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    /// Document width, margin included.
    pub width: f64,
    /// Document height, margin included.
    pub height: f64,
    /// Path data (`M` followed by one `C` per segment), in document coordinates.
    pub path_data: String,
    /// Stroke width of the path.
    pub stroke_width: f64,
}

/// Build the SVG document for `curves` drawn with `stroke_width`.
///
/// Fails with [`StrokeError::EmptyCurveSet`] when there is nothing to draw.
pub fn export(curves: &CurveSet, stroke_width: f64) -> Result<SvgDocument, StrokeError> {
    let bbox = curves
        .control_bounds()
        .ok_or(StrokeError::EmptyCurveSet)?
        .inflate(EXPORT_MARGIN, EXPORT_MARGIN);
    let shift = -bbox.origin().to_vec2();
    let local = |p: Point| p + shift;

    let start = local(curves.segments()[0].p0);
    let mut path_data = format!("M {} {}", start.x, start.y);
    for c in curves {
        path_data += &curve_command(local(c.p1), local(c.p2), local(c.p3));
    }

    debug!(
        segments = curves.len(),
        width = bbox.width(),
        height = bbox.height(),
        "exported svg"
    );
    Ok(SvgDocument {
        width: bbox.width(),
        height: bbox.height(),
        path_data,
        stroke_width,
    })
}

fn curve_command(c1: Point, c2: Point, p: Point) -> String {
    format!(" C {} {}, {} {}, {} {}", c1.x, c1.y, c2.x, c2.y, p.x, p.y)
}

impl SvgDocument {
    /// Write the document to `path` as UTF-8.
    pub fn write_to(&self, path: &Path) -> Result<(), StrokeError> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#)?;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        )?;
        writeln!(
            f,
            r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            self.path_data, STROKE_COLOR, self.stroke_width,
        )?;
        write!(f, "</svg>")
    }
}
