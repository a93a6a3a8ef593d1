//! Sliding-window smoothing of an open polyline.

use kurbo::Point;

/// Window weights, centered on the smoothed sample.
const WEIGHTS: [f64; 5] = [0.1, 0.2, 0.4, 0.2, 0.1];

/// Smooth an open polyline with a 5-tap weighted moving average.
///
/// The first two and last two points are kept verbatim so the stroke
/// keeps its exact endpoints. Inputs shorter than four points have no
/// interior and come back unchanged. Output length always equals input
/// length.
pub fn smooth(points: &[Point]) -> Vec<Point> {
    let n = points.len();
    if n < 4 {
        return points.to_vec();
    }
    let half = WEIGHTS.len() / 2;
    let mut smoothed = Vec::with_capacity(n);
    smoothed.extend_from_slice(&points[..2]);
    for i in 2..n - 2 {
        let (x, y) = points[i - half..=i + half]
            .iter()
            .zip(WEIGHTS)
            .fold((0.0, 0.0), |(x, y), (p, w)| (x + p.x * w, y + p.y * w));
        smoothed.push(Point::new(x, y));
    }
    smoothed.extend_from_slice(&points[n - 2..]);
    smoothed
}
