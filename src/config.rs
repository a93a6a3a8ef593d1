use serde::{Deserialize, Serialize};

use crate::error::StrokeError;

/// Smallest curve stroke width accepted by the width slider.
pub const MIN_STROKE_WIDTH: f64 = 1.0;
/// Largest curve stroke width accepted by the width slider.
pub const MAX_STROKE_WIDTH: f64 = 20.0;
/// Curve stroke width used until the user picks another one.
pub const DEFAULT_STROKE_WIDTH: f64 = 3.0;

/// All sketching parameters in one struct.
/// Serializable (for saving presets) and adjustable at runtime
/// (for editor toggles and sliders).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchConfig {
    /// Minimum distance between consecutive accepted samples.
    pub spacing: Spacing,
    /// Line width of the fitted curve, on screen and in the export.
    pub curve_width: LineWidth,
    /// Draw the raw (unsmoothed) polyline beneath the fitted curve.
    pub show_raw_stroke: bool,
}

/// Rule for the minimum distance between accepted samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Spacing {
    /// Constant spacing in surface pixels.
    Fixed(f64),
    /// `max(4, surface_width / 150)`: follows the device scale.
    Adaptive,
}

/// Rule for the fitted curve's line width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LineWidth {
    /// User-chosen width in 1..=20.
    Fixed(f64),
    /// `max(3, surface_width / 200)`.
    Adaptive,
}

impl Spacing {
    /// Minimum spacing for a surface of the given width.
    pub fn resolve(self, surface_width: f64) -> f64 {
        match self {
            Spacing::Fixed(d) => d,
            Spacing::Adaptive => (surface_width / 150.0).max(4.0),
        }
    }
}

impl LineWidth {
    /// Line width for a surface of the given width.
    pub fn resolve(self, surface_width: f64) -> f64 {
        match self {
            LineWidth::Fixed(w) => w,
            LineWidth::Adaptive => (surface_width / 200.0).max(3.0),
        }
    }
}

/// Width of the raw sample polyline drawn under the curve.
pub fn raw_stroke_width(surface_width: f64) -> f64 {
    (surface_width / 240.0).max(2.5)
}

/// Check a user-supplied stroke width against the slider range.
pub fn check_stroke_width(width: f64) -> Result<f64, StrokeError> {
    if width.is_finite() && (MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH).contains(&width) {
        Ok(width)
    } else {
        Err(StrokeError::InvalidStrokeWidth(width))
    }
}

impl SketchConfig {
    /// Reject settings the pipeline cannot honour.
    pub fn validate(&self) -> Result<(), StrokeError> {
        if let Spacing::Fixed(d) = self.spacing {
            if !d.is_finite() || d < 0.0 {
                return Err(StrokeError::InvalidSpacing(d));
            }
        }
        if let LineWidth::Fixed(w) = self.curve_width {
            check_stroke_width(w)?;
        }
        Ok(())
    }
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            spacing: Spacing::Adaptive,
            curve_width: LineWidth::Fixed(DEFAULT_STROKE_WIDTH),
            show_raw_stroke: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adaptive_spacing_has_floor() {
        assert_eq!(Spacing::Adaptive.resolve(300.0), 4.0);
        assert_eq!(Spacing::Adaptive.resolve(1500.0), 10.0);
        assert_eq!(Spacing::Fixed(2.5).resolve(1500.0), 2.5);
    }

    #[test]
    fn line_widths_follow_surface() {
        assert_eq!(LineWidth::Adaptive.resolve(400.0), 3.0);
        assert_eq!(LineWidth::Adaptive.resolve(1000.0), 5.0);
        assert_eq!(LineWidth::Fixed(7.0).resolve(1000.0), 7.0);
        assert_eq!(raw_stroke_width(240.0), 2.5);
        assert_eq!(raw_stroke_width(1200.0), 5.0);
    }

    #[test]
    fn validate_rejects_out_of_range_width() {
        let config = SketchConfig {
            curve_width: LineWidth::Fixed(25.0),
            ..SketchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(StrokeError::InvalidStrokeWidth(w)) if w == 25.0
        ));
        assert!(SketchConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_spacing() {
        let config = SketchConfig {
            spacing: Spacing::Fixed(-1.0),
            ..SketchConfig::default()
        };
        assert!(matches!(config.validate(), Err(StrokeError::InvalidSpacing(_))));
    }
}
