use crate::error::ShapeError;
use crate::point::Polyline;

/// Largest absolute coordinate across every point, or 0 for an empty path.
pub fn norm_max(line: &Polyline) -> f64 {
    line.points()
        .iter()
        .fold(0.0f64, |acc, p| acc.max(p.max_abs()))
}

/// Divides every coordinate by `divisor`. A zero divisor means all points sit on
/// the origin and there is nothing to scale.
pub fn normalize(line: &Polyline, divisor: f64) -> Result<Polyline, ShapeError> {
    if divisor == 0.0 || !divisor.is_finite() {
        return Err(ShapeError::DegenerateShape { divisor });
    }
    Ok(line.map_coords(|v| v / divisor))
}

pub fn scale(line: &Polyline, factor: f64) -> Polyline {
    line.map_coords(|v| v * factor)
}

pub fn offset(line: &Polyline, amount: f64) -> Polyline {
    line.map_coords(|v| v + amount)
}
