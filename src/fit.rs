//! Curve fitting: stroke samples → chained cubic beziers.
//!
//! Per stroke:
//! 1. Smooth the samples (5-tap weighted window)
//! 2. Estimate a tangent at each anchor from its neighbours (Catmull-Rom style)
//! 3. Place both handles along those tangents at 30% of the chord length

use std::slice;

use kurbo::{BezPath, CubicBez, Point, Rect};
use tracing::debug;

use crate::geom::{control_bounds, unit_or_zero};
use crate::smooth::smooth;

/// Handle length as a fraction of the segment's chord.
pub const HANDLE_FRACTION: f64 = 0.3;

/// The fitted curves of one stroke, in stroke order.
///
/// Adjacent segments share anchors: `segments[i].p3 == segments[i + 1].p0`.
/// A set is always rebuilt from samples as a whole, never edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveSet {
    segments: Vec<CubicBez>,
}

impl CurveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[CubicBez] {
        &self.segments
    }

    pub fn iter(&self) -> slice::Iter<'_, CubicBez> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Box over every anchor and control point; `None` when empty.
    pub fn control_bounds(&self) -> Option<Rect> {
        control_bounds(&self.segments)
    }

    /// The set as a single open kurbo path (one move, one curve per segment).
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        if let Some(first) = self.segments.first() {
            path.move_to(first.p0);
            for c in &self.segments {
                path.curve_to(c.p1, c.p2, c.p3);
            }
        }
        path
    }
}

impl<'a> IntoIterator for &'a CurveSet {
    type Item = &'a CubicBez;
    type IntoIter = slice::Iter<'a, CubicBez>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Fit chained cubic beziers through the raw stroke samples.
///
/// Returns an empty set for fewer than two samples, otherwise one
/// segment per consecutive pair of smoothed samples.
pub fn fit(raw_points: &[Point]) -> CurveSet {
    if raw_points.len() < 2 {
        return CurveSet::new();
    }

    let points = smooth(raw_points);
    let last = points.len() - 1;
    let segments: Vec<CubicBez> = (0..last)
        .map(|i| {
            let p0 = points[i];
            let p3 = points[i + 1];
            let prev = if i > 0 { points[i - 1] } else { p0 };
            let next = if i + 1 < last { points[i + 2] } else { p3 };
            segment(prev, p0, p3, next)
        })
        .collect();

    debug!(samples = raw_points.len(), segments = segments.len(), "fitted stroke");
    CurveSet { segments }
}

/// Build the segment from `p0` to `p3` given the samples on either side.
///
/// A neighbour that coincides with the opposite anchor leaves no tangent
/// direction; that handle collapses onto its anchor.
fn segment(prev: Point, p0: Point, p3: Point, next: Point) -> CubicBez {
    let tangent1 = unit_or_zero(p3 - prev);
    let tangent2 = unit_or_zero(next - p0);
    let control_len = (p3 - p0).hypot() * HANDLE_FRACTION;
    CubicBez::new(
        p0,
        p0 + tangent1 * control_len,
        p3 - tangent2 * control_len,
        p3,
    )
}
