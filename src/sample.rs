//! Point-rate limiting for incoming pointer samples.
//!
//! Samples that land closer than the minimum spacing to the last
//! accepted point are dropped. This is what keeps zero-length chords
//! out of the fitter.

use kurbo::Point;
use tracing::trace;

/// Append `point` to `prior` unless it is within `min_spacing` of the
/// last accepted sample.
///
/// Returns the new sequence; when the sample is dropped the result is
/// equal to `prior`. Non-finite samples are always dropped.
pub fn add_point(point: Point, prior: &[Point], min_spacing: f64) -> Vec<Point> {
    if !point.is_finite() {
        trace!(x = point.x, y = point.y, "non-finite sample dropped");
        return prior.to_vec();
    }
    if let Some(&last) = prior.last() {
        let dist_squared = (point - last).hypot2();
        if dist_squared < min_spacing * min_spacing {
            trace!(x = point.x, y = point.y, min_spacing, "sample dropped");
            return prior.to_vec();
        }
    }
    let mut accepted = Vec::with_capacity(prior.len() + 1);
    accepted.extend_from_slice(prior);
    accepted.push(point);
    accepted
}
