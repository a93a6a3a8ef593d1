use stroke2bez::kurbo::{ParamCurve, Point};
use stroke2bez::{
    add_point, classify, evaluate, export, fit, replay, smooth, CurveSet, SketchConfig, Spacing,
    StrokeError, Surface,
};

/// A hand-like loop: wobbly circle, closed back onto its start.
fn loop_stroke() -> Vec<Point> {
    let n = 120;
    (0..=n)
        .map(|i| {
            let a = i as f64 / n as f64 * std::f64::consts::TAU;
            let wobble = 1.0 + 0.04 * (a * 7.0).sin();
            if i == n {
                Point::new(400.0 + 150.0, 200.0)
            } else {
                Point::new(400.0 + 150.0 * wobble * a.cos(), 200.0 + 120.0 * wobble * a.sin())
            }
        })
        .collect()
}

#[test]
fn sampled_fitted_and_exported() {
    let raw = loop_stroke();
    let mut samples = Vec::new();
    for &p in &raw {
        samples = add_point(p, &samples, 6.0);
    }
    for pair in samples.windows(2) {
        assert!(pair[0].distance(pair[1]) >= 6.0);
    }

    let curves = fit(&samples);
    assert_eq!(curves.len(), samples.len() - 1);
    for pair in curves.segments().windows(2) {
        assert_eq!(pair[0].p3, pair[1].p0);
    }

    assert_ne!(classify(Point::new(400.0, 150.0), &curves), 0);
    assert_eq!(classify(Point::new(10.0, 10.0), &curves), 0);
    assert_eq!(classify(Point::new(700.0, 200.0), &curves), 0);

    let doc = export(&curves, 3.0).unwrap();
    let bbox = curves.control_bounds().unwrap();
    assert!((doc.width - (bbox.width() + 20.0)).abs() < 1e-9);
    assert!((doc.height - (bbox.height() + 20.0)).abs() < 1e-9);
    assert_eq!(doc.path_data.matches('C').count(), curves.len());
}

#[test]
fn replay_matches_manual_pipeline() {
    let raw = loop_stroke();
    let config = SketchConfig {
        spacing: Spacing::Fixed(6.0),
        ..SketchConfig::default()
    };
    let sketch = replay(&raw, Surface::new(800.0, 400.0).unwrap(), config).unwrap();

    let mut samples = Vec::new();
    for &p in &raw {
        samples = add_point(p, &samples, 6.0);
    }
    assert_eq!(sketch.samples(), samples.as_slice());
    assert_eq!(sketch.curves(), &fit(&samples));
}

#[test]
fn adaptive_spacing_follows_surface_width() {
    let raw: Vec<Point> = (0..100).map(|i| Point::new(i as f64 * 5.0, 50.0)).collect();
    let narrow = replay(&raw, Surface::new(600.0, 300.0).unwrap(), SketchConfig::default()).unwrap();
    let wide = replay(&raw, Surface::new(1500.0, 750.0).unwrap(), SketchConfig::default()).unwrap();
    assert_eq!(narrow.min_spacing(), 4.0);
    assert_eq!(wide.min_spacing(), 10.0);
    assert_eq!(narrow.samples().len(), 100);
    assert_eq!(wide.samples().len(), 50);
}

#[test]
fn evaluator_matches_fitted_segments() {
    let curves = fit(&loop_stroke());
    for c in curves.iter().take(10) {
        assert_eq!(evaluate(0.0, c.p0, c.p1, c.p2, c.p3), c.p0);
        assert_eq!(evaluate(1.0, c.p0, c.p1, c.p2, c.p3), c.p3);
        let mid = evaluate(0.5, c.p0, c.p1, c.p2, c.p3);
        assert!((mid - c.eval(0.5)).hypot() < 1e-9);
    }
}

#[test]
fn smoothing_keeps_stroke_ends() {
    let raw = loop_stroke();
    let smoothed = smooth(&raw);
    assert_eq!(smoothed.len(), raw.len());
    assert_eq!(&smoothed[..2], &raw[..2]);
    assert_eq!(&smoothed[raw.len() - 2..], &raw[raw.len() - 2..]);
}

#[test]
fn empty_inputs_have_defined_outputs() {
    let empty = CurveSet::new();
    assert_eq!(classify(Point::new(0.0, 0.0), &empty), 0);
    assert!(matches!(export(&empty, 3.0), Err(StrokeError::EmptyCurveSet)));
    assert!(fit(&[]).is_empty());

    let sketch = replay(&[], Surface::new(100.0, 50.0).unwrap(), SketchConfig::default()).unwrap();
    assert!(sketch.samples().is_empty());
    assert!(matches!(sketch.export(), Err(StrokeError::EmptyCurveSet)));
}

#[test]
fn svg_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("curve.svg");
    let curves = fit(&[Point::new(0.0, 0.0), Point::new(50.0, 50.0)]);
    export(&curves, 3.0).unwrap().write_to(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains(r#"viewBox="0 0 70 70""#));
    assert!(written.contains(r#"d="M 10 10 C "#));
}

#[test]
fn preview_png_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preview.png");
    let config = SketchConfig {
        spacing: Spacing::Fixed(6.0),
        ..SketchConfig::default()
    };
    let sketch = replay(&loop_stroke(), Surface::new(800.0, 400.0).unwrap(), config).unwrap();
    stroke2bez::render::render_png(&sketch, &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..4], b"\x89PNG");
}
