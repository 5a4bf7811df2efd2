pub mod cli;
pub mod diagnostics;
pub mod emit;
pub mod error;
pub mod interpolate;
pub mod normalize;
pub mod pipeline;
pub mod point;
pub mod quantize;
pub mod shape;
pub mod xy_wav;

pub use error::ShapeError;
pub use pipeline::{generate_table, render_table, GenerateConfig, OutputFormat, ShapeTable};
pub use shape::{Vertex, VertexList};
