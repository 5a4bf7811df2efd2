use std::path::PathBuf;

use thiserror::Error;

use crate::quantize::Axis;

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("a closed shape needs at least 2 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("interpolation density must be at least 1")]
    ZeroDensity,

    #[error("{vertices} vertices at density {density} exceed the {limit}-point table limit")]
    TooManyPoints {
        vertices: usize,
        density: usize,
        limit: usize,
    },

    #[error("max scale must be a positive finite number, got {value}")]
    InvalidScale { value: f64 },

    #[error("offset must be a finite number, got {value}")]
    InvalidOffset { value: f64 },

    #[error("degenerate shape: every point lies on the origin (normalization divisor {divisor})")]
    DegenerateShape { divisor: f64 },

    #[error("{axis} coordinate {value} at index {index} does not fit in 0..=255")]
    OutOfRange { axis: Axis, index: usize, value: f64 },

    #[error("failed to read shape file {path}: {source}")]
    ReadShape {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse shape file {path}: {source}")]
    ParseShape {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("wav export failed: {0}")]
    Wav(#[from] hound::Error),

    #[error("plot rendering failed: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
