//! The drawing surface: its pixel size and the mapping from client
//! (displayed) coordinates into surface coordinates.

use kurbo::{Point, Rect, Size};

use crate::error::StrokeError;

/// Surface height as a fraction of its width.
const ASPECT: f64 = 0.5;
/// Largest share of the viewport height the surface may take.
const MAX_VIEWPORT_SHARE: f64 = 0.7;

/// Pixel dimensions of the drawing surface.
///
/// Samples live in this coordinate space. Resizing changes only
/// scale-dependent values (sample spacing, line widths), never samples
/// that were already recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    size: Size,
}

impl Surface {
    pub fn new(width: f64, height: f64) -> Result<Self, StrokeError> {
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(StrokeError::InvalidSurface { width, height });
        }
        Ok(Self {
            size: Size::new(width, height),
        })
    }

    /// Size the surface for its container: full container width, height
    /// `min(width × 0.5, viewport_height × 0.7)`.
    pub fn fit_container(container_width: f64, viewport_height: f64) -> Result<Self, StrokeError> {
        let height = (container_width * ASPECT).min(viewport_height * MAX_VIEWPORT_SHARE);
        Self::new(container_width, height)
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Map a client-space position into surface coordinates, given where
    /// (and how large) the surface is currently displayed.
    ///
    /// `local = (client − displayed.origin) × (surface / displayed)` per axis.
    /// A zero-sized display leaves that axis unscaled.
    pub fn to_local(&self, client: Point, displayed: Rect) -> Point {
        let scale = |surface: f64, shown: f64| if shown > 0.0 { surface / shown } else { 1.0 };
        Point::new(
            (client.x - displayed.x0) * scale(self.size.width, displayed.width()),
            (client.y - displayed.y0) * scale(self.size.height, displayed.height()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_sizing() {
        let wide = Surface::fit_container(1000.0, 2000.0).unwrap();
        assert_eq!(wide.size(), Size::new(1000.0, 500.0));
        let short = Surface::fit_container(1000.0, 500.0).unwrap();
        assert_eq!(short.height(), 350.0);
    }

    #[test]
    fn resize_is_idempotent() {
        let a = Surface::fit_container(640.0, 900.0).unwrap();
        let b = Surface::fit_container(640.0, 900.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn client_to_local_scales_by_display_ratio() {
        let surface = Surface::new(800.0, 400.0).unwrap();
        let displayed = Rect::new(100.0, 50.0, 500.0, 250.0);
        let p = surface.to_local(Point::new(300.0, 150.0), displayed);
        assert_eq!(p, Point::new(400.0, 200.0));
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert!(matches!(
            Surface::new(f64::NAN, 10.0),
            Err(StrokeError::InvalidSurface { .. })
        ));
        assert!(Surface::new(-1.0, 10.0).is_err());
    }
}
