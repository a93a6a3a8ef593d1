//! Drawing the sketch: a backend-neutral list of draw calls, and a
//! tiny-skia rasterizer for PNG previews.

use std::fmt;
use std::path::Path;

use kurbo::{CubicBez, Point};

use crate::config::raw_stroke_width;
use crate::error::StrokeError;
use crate::sketch::Sketch;
use crate::winding::Containment;

/// Radius of the probe marker.
const PROBE_RADIUS: f64 = 6.0;
/// Offset of the probe label from the probed point.
const LABEL_OFFSET: (f64, f64) = (10.0, -10.0);

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RAW_STROKE: Rgb = Rgb(0x93, 0xc5, 0xfd);
    pub const CURVE: Rgb = Rgb(0x25, 0x63, 0xeb);
    pub const INSIDE: Rgb = Rgb(0x22, 0xc5, 0x5e);
    pub const OUTSIDE: Rgb = Rgb(0xef, 0x44, 0x44);
    pub const LABEL: Rgb = Rgb(0, 0, 0);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// One primitive for a render sink, in surface coordinates.
///
/// All strokes use round caps and joins.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    /// The raw samples as a polyline.
    Polyline {
        points: Vec<Point>,
        width: f64,
        color: Rgb,
    },
    /// One fitted segment.
    Cubic {
        segment: CubicBez,
        width: f64,
        color: Rgb,
    },
    /// Filled disc marking the probed point.
    Marker {
        center: Point,
        radius: f64,
        color: Rgb,
    },
    /// Winding-number text next to the probe marker.
    Label {
        anchor: Point,
        text: String,
        color: Rgb,
    },
}

// ── Draw plan ────────────────────────────────────────────

/// Draw calls for the sketch's current state, bottom layer first:
/// raw polyline (when enabled), one cubic per segment, probe marker.
pub fn plan(sketch: &Sketch) -> Vec<DrawCall> {
    let width = sketch.surface().width();
    let samples = sketch.samples();
    let mut calls = Vec::new();

    if sketch.config().show_raw_stroke && samples.len() > 1 {
        calls.push(DrawCall::Polyline {
            points: samples.to_vec(),
            width: raw_stroke_width(width),
            color: Rgb::RAW_STROKE,
        });
    }

    let curve_width = sketch.stroke_width();
    calls.extend(sketch.curves().iter().map(|&segment| DrawCall::Cubic {
        segment,
        width: curve_width,
        color: Rgb::CURVE,
    }));

    if let Some(probe) = sketch.probe() {
        let color = match probe.containment() {
            Containment::Inside => Rgb::INSIDE,
            Containment::Outside => Rgb::OUTSIDE,
        };
        calls.push(DrawCall::Marker {
            center: probe.point,
            radius: PROBE_RADIUS,
            color,
        });
        calls.push(DrawCall::Label {
            anchor: Point::new(probe.point.x + LABEL_OFFSET.0, probe.point.y + LABEL_OFFSET.1),
            text: format!("Index: {}", probe.winding),
            color: Rgb::LABEL,
        });
    }

    calls
}

// ── Raster preview ───────────────────────────────────────

/// Rasterize `calls` onto a white `width × height` canvas.
///
/// Labels are skipped; tiny-skia has no text support.
pub fn rasterize(calls: &[DrawCall], width: u32, height: u32) -> Result<tiny_skia::Pixmap, StrokeError> {
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| StrokeError::Render(format!("cannot allocate {}x{} canvas", width, height)))?;
    pixmap.fill(tiny_skia::Color::WHITE);

    for call in calls {
        match call {
            DrawCall::Polyline { points, width, color } => {
                let mut pb = tiny_skia::PathBuilder::new();
                if let Some((first, rest)) = points.split_first() {
                    pb.move_to(first.x as f32, first.y as f32);
                    for p in rest {
                        pb.line_to(p.x as f32, p.y as f32);
                    }
                }
                stroke(&mut pixmap, pb.finish(), *width, *color);
            }
            DrawCall::Cubic { segment, width, color } => {
                let mut pb = tiny_skia::PathBuilder::new();
                pb.move_to(segment.p0.x as f32, segment.p0.y as f32);
                pb.cubic_to(
                    segment.p1.x as f32,
                    segment.p1.y as f32,
                    segment.p2.x as f32,
                    segment.p2.y as f32,
                    segment.p3.x as f32,
                    segment.p3.y as f32,
                );
                stroke(&mut pixmap, pb.finish(), *width, *color);
            }
            DrawCall::Marker { center, radius, color } => {
                let circle =
                    tiny_skia::PathBuilder::from_circle(center.x as f32, center.y as f32, *radius as f32);
                if let Some(path) = circle {
                    pixmap.fill_path(
                        &path,
                        &paint(*color),
                        tiny_skia::FillRule::Winding,
                        tiny_skia::Transform::identity(),
                        None,
                    );
                }
            }
            DrawCall::Label { .. } => {}
        }
    }

    Ok(pixmap)
}

/// Rasterize the sketch at its surface size and write a PNG.
pub fn render_png(sketch: &Sketch, output_path: &Path) -> Result<(), StrokeError> {
    let surface = sketch.surface();
    let width = surface.width().round().max(1.0) as u32;
    let height = surface.height().round().max(1.0) as u32;
    let pixmap = rasterize(&plan(sketch), width, height)?;
    std::fs::write(output_path, encode_png(&pixmap)?)?;
    Ok(())
}

fn paint(color: Rgb) -> tiny_skia::Paint<'static> {
    let mut paint = tiny_skia::Paint::default();
    paint.set_color_rgba8(color.0, color.1, color.2, 255);
    paint.anti_alias = true;
    paint
}

/// Stroke `path` with round caps and joins. Degenerate paths draw nothing.
fn stroke(pixmap: &mut tiny_skia::Pixmap, path: Option<tiny_skia::Path>, width: f64, color: Rgb) {
    let Some(path) = path else {
        return;
    };
    let stroke = tiny_skia::Stroke {
        width: width as f32,
        line_cap: tiny_skia::LineCap::Round,
        line_join: tiny_skia::LineJoin::Round,
        ..tiny_skia::Stroke::default()
    };
    pixmap.stroke_path(&path, &paint(color), &stroke, tiny_skia::Transform::identity(), None);
}

/// Encode a pixmap to PNG bytes.
fn encode_png(pixmap: &tiny_skia::Pixmap) -> Result<Vec<u8>, StrokeError> {
    let mut buf = Vec::new();
    let mut encoder = png::Encoder::new(&mut buf, pixmap.width(), pixmap.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(pixmap.data())?;
    writer.finish()?;
    Ok(buf)
}
