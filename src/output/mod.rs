//! Export backends for fitted strokes.

pub mod svg;
