//! Cubic bezier evaluation and flattening.

use kurbo::{CubicBez, Point};

/// Number of straight pieces each segment is cut into for geometric queries.
pub const FLATTEN_STEPS: usize = 50;

/// Evaluate the cubic with control points `p0..p3` at `t`.
///
/// Uses the Bernstein form
/// `(1−t)³p0 + 3(1−t)²t·p1 + 3(1−t)t²·p2 + t³p3`.
/// `t` is not clamped: values outside `[0, 1]` extrapolate.
pub fn evaluate(t: f64, p0: Point, p1: Point, p2: Point, p3: Point) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

/// Evaluate a kurbo cubic at `t`.
pub fn evaluate_segment(segment: &CubicBez, t: f64) -> Point {
    evaluate(t, segment.p0, segment.p1, segment.p2, segment.p3)
}

/// Cut `segment` into `steps` directed chords between `t = i/steps`
/// and `t = (i+1)/steps`.
pub fn flatten(segment: &CubicBez, steps: usize) -> Vec<(Point, Point)> {
    let n = steps as f64;
    (0..steps)
        .map(|i| {
            let start = evaluate_segment(segment, i as f64 / n);
            let end = evaluate_segment(segment, (i + 1) as f64 / n);
            (start, end)
        })
        .collect()
}
