use thiserror::Error;

/// Errors that can occur while fitting, exporting or rendering a stroke.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StrokeError {
    #[error("no curves to export")]
    EmptyCurveSet,

    #[error("stroke width {0} outside 1..=20")]
    InvalidStrokeWidth(f64),

    #[error("invalid minimum sample spacing: {0}")]
    InvalidSpacing(f64),

    #[error("invalid surface size {width}x{height}")]
    InvalidSurface { width: f64, height: f64 },

    #[error("render error: {0}")]
    Render(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read stroke samples: {0}")]
    Json(#[from] serde_json::Error),

    #[error("png encoding error: {0}")]
    Png(#[from] png::EncodingError),
}
