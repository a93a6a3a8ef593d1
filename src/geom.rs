//! Shared geometry utilities.

use kurbo::{CubicBez, Point, Rect, Vec2};

/// Unit vector along `v`, or the zero vector when `v` has no usable
/// direction (zero length or non-finite components).
pub fn unit_or_zero(v: Vec2) -> Vec2 {
    let len = v.hypot();
    if len > 0.0 && len.is_finite() {
        v / len
    } else {
        Vec2::ZERO
    }
}

/// Axis-aligned box over every anchor and control point.
///
/// Returns `None` for an empty slice.
pub fn control_bounds(segments: &[CubicBez]) -> Option<Rect> {
    let mut points = segments.iter().flat_map(|c| [c.p0, c.p1, c.p2, c.p3]);
    let first = points.next()?;
    Some(points.fold(Rect::from_points(first, first), |bbox, p: Point| {
        bbox.union_pt(p)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_vector_has_no_direction() {
        assert_eq!(unit_or_zero(Vec2::ZERO), Vec2::ZERO);
        assert_eq!(unit_or_zero(Vec2::new(f64::NAN, 1.0)), Vec2::ZERO);
    }

    #[test]
    fn unit_has_length_one() {
        let u = unit_or_zero(Vec2::new(3.0, -4.0));
        assert!((u.hypot() - 1.0).abs() < 1e-12);
        assert!((u.x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn bounds_include_control_points() {
        let c = CubicBez::new((0.0, 0.0), (-5.0, 20.0), (40.0, -7.0), (30.0, 10.0));
        let bbox = control_bounds(&[c]).unwrap();
        assert_eq!(bbox, Rect::new(-5.0, -7.0, 40.0, 20.0));
        assert!(control_bounds(&[]).is_none());
    }
}
