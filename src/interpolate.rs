use crate::point::{Point, Polyline};

pub fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + (b - a) * t
}

/// Walks the closed path `points` and emits `density` evenly spaced points per
/// edge, starting at each edge's first vertex. The closing edge runs from the
/// last point back to the first.
///
/// The end vertex of an edge is never emitted by that edge; it shows up as the
/// `t = 0` point of the next one. The result therefore has exactly
/// `density * points.len()` points, and `density == 0` yields nothing.
pub fn interpolate(points: &[Point], density: usize) -> Polyline {
    points
        .iter()
        .enumerate()
        .flat_map(|(i, &from)| {
            let to = points[(i + 1) % points.len()];
            (0..density).map(move |step| {
                let t = step as f64 / density as f64;
                Point::new(lerp(t, from.x, to.x), lerp(t, from.y, to.y))
            })
        })
        .collect()
}
