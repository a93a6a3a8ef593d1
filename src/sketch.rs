//! Stroke lifecycle: press / drag / release, clearing, and the
//! point-probe mode.
//!
//! Every accepted sample replaces the sample list and re-fits the whole
//! curve set. Nothing is patched in place.

use kurbo::Point;
use tracing::debug;

use crate::config::{check_stroke_width, LineWidth, SketchConfig};
use crate::error::StrokeError;
use crate::fit::{fit, CurveSet};
use crate::output::svg::{self, SvgDocument};
use crate::sample::add_point;
use crate::surface::Surface;
use crate::winding::{classify, Containment};

/// A probed location and its winding number against the current curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probe {
    pub point: Point,
    pub winding: i32,
}

impl Probe {
    pub fn containment(&self) -> Containment {
        Containment::from_winding(self.winding)
    }
}

/// State of one drawing surface and the stroke on it.
#[derive(Debug, Clone)]
pub struct Sketch {
    surface: Surface,
    config: SketchConfig,
    samples: Vec<Point>,
    curves: CurveSet,
    probe: Option<Probe>,
    drawing: bool,
    probe_mode: bool,
}

impl Sketch {
    pub fn new(surface: Surface, config: SketchConfig) -> Result<Self, StrokeError> {
        config.validate()?;
        Ok(Self {
            surface,
            config,
            samples: Vec::new(),
            curves: CurveSet::new(),
            probe: None,
            drawing: false,
            probe_mode: false,
        })
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// Raw accepted samples of the current stroke.
    pub fn samples(&self) -> &[Point] {
        &self.samples
    }

    pub fn curves(&self) -> &CurveSet {
        &self.curves
    }

    pub fn probe(&self) -> Option<&Probe> {
        self.probe.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn in_probe_mode(&self) -> bool {
        self.probe_mode
    }

    /// Minimum sample spacing for the current surface size.
    pub fn min_spacing(&self) -> f64 {
        self.config.spacing.resolve(self.surface.width())
    }

    /// Line width of the fitted curve for the current surface size.
    pub fn stroke_width(&self) -> f64 {
        self.config.curve_width.resolve(self.surface.width())
    }

    /// Pointer or touch down: start a new stroke at `point`.
    ///
    /// Ignored while probing.
    pub fn press(&mut self, point: Point) {
        if self.probe_mode || !point.is_finite() {
            return;
        }
        self.samples = vec![point];
        self.curves = fit(&self.samples);
        self.probe = None;
        self.drawing = true;
    }

    /// Pointer or touch move. Returns whether the sample was accepted.
    pub fn drag(&mut self, point: Point) -> bool {
        if !self.drawing || self.probe_mode {
            return false;
        }
        let samples = add_point(point, &self.samples, self.min_spacing());
        if samples.len() == self.samples.len() {
            return false;
        }
        self.curves = fit(&samples);
        self.samples = samples;
        true
    }

    /// Pointer up, pointer leave or touch end.
    pub fn release(&mut self) {
        self.drawing = false;
    }

    /// Click while probing: classify `point` against the curves.
    pub fn click(&mut self, point: Point) -> Option<Probe> {
        if !self.probe_mode {
            return None;
        }
        let probe = Probe {
            point,
            winding: classify(point, &self.curves),
        };
        debug!(x = point.x, y = point.y, winding = probe.winding, "probe");
        self.probe = Some(probe);
        self.probe
    }

    /// Switch probe mode; entering it forgets the previous probe.
    pub fn toggle_probe_mode(&mut self) -> bool {
        self.probe_mode = !self.probe_mode;
        if self.probe_mode {
            self.probe = None;
        }
        self.probe_mode
    }

    pub fn toggle_raw_stroke(&mut self) -> bool {
        self.config.show_raw_stroke = !self.config.show_raw_stroke;
        self.config.show_raw_stroke
    }

    /// Set a fixed curve width from the 1..=20 slider range.
    pub fn set_stroke_width(&mut self, width: f64) -> Result<(), StrokeError> {
        self.config.curve_width = LineWidth::Fixed(check_stroke_width(width)?);
        Ok(())
    }

    /// Discard the stroke, its curves and any probe.
    pub fn clear(&mut self) {
        self.samples = Vec::new();
        self.curves = CurveSet::new();
        self.probe = None;
        self.probe_mode = false;
    }

    /// Resize for a new container; recorded samples are untouched.
    pub fn resize(&mut self, container_width: f64, viewport_height: f64) -> Result<(), StrokeError> {
        self.surface = Surface::fit_container(container_width, viewport_height)?;
        Ok(())
    }

    /// SVG document for the current curves.
    pub fn export(&self) -> Result<SvgDocument, StrokeError> {
        svg::export(&self.curves, self.stroke_width())
    }
}
