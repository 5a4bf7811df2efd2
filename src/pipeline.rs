use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::emit::{num_points_c, num_points_rust, OutputArray};
use crate::error::ShapeError;
use crate::interpolate::interpolate;
use crate::normalize::{norm_max, normalize, offset, scale};
use crate::point::Polyline;
use crate::quantize::{quantize_axis, Axis, OverflowPolicy};
use crate::shape::VertexList;

pub const DEFAULT_DENSITY: usize = 15;
pub const DEFAULT_MAX_SCALE: f64 = 255.0;
/// Upper bound on `vertices * density`.
pub const MAX_POINTS: usize = 1 << 24;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    C,
    Rust,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" => Ok(OutputFormat::C),
            "rust" => Ok(OutputFormat::Rust),
            other => Err(format!("unknown output format: {} (expected c or rust)", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Points generated per edge.
    pub density: usize,
    /// Value the largest coordinate magnitude is scaled to.
    pub max_scale: f64,
    /// Added to both axes after scaling.
    pub offset: f64,
    pub overflow: OverflowPolicy,
    pub format: OutputFormat,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        GenerateConfig {
            density: DEFAULT_DENSITY,
            max_scale: DEFAULT_MAX_SCALE,
            offset: 0.0,
            overflow: OverflowPolicy::Reject,
            format: OutputFormat::C,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShapeTable {
    pub norm_max: f64,
    /// Scaled and offset points before rounding.
    pub scaled: Polyline,
    pub xs: Vec<u8>,
    pub ys: Vec<u8>,
}

impl ShapeTable {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

pub fn generate_table(vertices: &VertexList, config: &GenerateConfig) -> Result<ShapeTable, ShapeError> {
    if config.density == 0 {
        return Err(ShapeError::ZeroDensity);
    }
    match vertices.len().checked_mul(config.density) {
        Some(total) if total <= MAX_POINTS => {}
        _ => {
            return Err(ShapeError::TooManyPoints {
                vertices: vertices.len(),
                density: config.density,
                limit: MAX_POINTS,
            })
        }
    }
    if !config.max_scale.is_finite() || config.max_scale <= 0.0 {
        return Err(ShapeError::InvalidScale {
            value: config.max_scale,
        });
    }
    if !config.offset.is_finite() {
        return Err(ShapeError::InvalidOffset {
            value: config.offset,
        });
    }

    let dense = interpolate(vertices.to_polyline().points(), config.density);
    let divisor = norm_max(&dense);
    log::debug!(
        "interpolated {} vertices into {} points, norm_max = {}",
        vertices.len(),
        dense.len(),
        divisor
    );

    let normed = normalize(&dense, divisor)?;
    let scaled = offset(&scale(&normed, config.max_scale), config.offset);

    let xs = quantize_axis(&scaled.xs(), Axis::X, config.overflow)?;
    let ys = quantize_axis(&scaled.ys(), Axis::Y, config.overflow)?;

    Ok(ShapeTable {
        norm_max: divisor,
        scaled,
        xs,
        ys,
    })
}

/// Renders the point count followed by the integer and float coordinate arrays.
pub fn render_table(table: &ShapeTable, format: OutputFormat) -> String {
    let float_xs = table.scaled.xs();
    let float_ys = table.scaled.ys();

    let blocks = match format {
        OutputFormat::C => [
            num_points_c(table.len()),
            OutputArray::new("xs", "uint8_t", &table.xs).render_c(),
            OutputArray::new("ys", "uint8_t", &table.ys).render_c(),
            OutputArray::new("xs", "float", &float_xs).render_c(),
            OutputArray::new("ys", "float", &float_ys).render_c(),
        ],
        OutputFormat::Rust => [
            num_points_rust(table.len()),
            OutputArray::new("xs", "u8", &table.xs).render_rust(),
            OutputArray::new("ys", "u8", &table.ys).render_rust(),
            OutputArray::new("xs_f32", "f32", &float_xs).render_rust(),
            OutputArray::new("ys_f32", "f32", &float_ys).render_rust(),
        ],
    };

    let mut out = String::new();
    for block in blocks {
        out.push_str(&block);
        out.push('\n');
    }
    out
}
