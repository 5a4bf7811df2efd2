use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn map<F>(self, mut f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        Point {
            x: f(self.x),
            y: f(self.y),
        }
    }

    /// Largest absolute value of either coordinate.
    pub fn max_abs(self) -> f64 {
        self.x.abs().max(self.y.abs())
    }
}

/// Ordered points of a closed path. The last point connects back to the first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline(Vec<Point>);

impl Polyline {
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.0.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.0.iter().map(|p| p.y).collect()
    }

    /// Applies `f` to every coordinate of every point.
    pub fn map_coords<F>(&self, mut f: F) -> Polyline
    where
        F: FnMut(f64) -> f64,
    {
        Polyline(self.0.iter().map(|p| p.map(&mut f)).collect())
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Polyline(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_abs_looks_at_both_axes() {
        assert_eq!(Point::new(-3.0, 2.0).max_abs(), 3.0);
        assert_eq!(Point::new(1.0, -7.5).max_abs(), 7.5);
    }

    #[test]
    fn map_coords_keeps_order() {
        let line: Polyline = [Point::new(1.0, 2.0), Point::new(3.0, 4.0)]
            .into_iter()
            .collect();
        let doubled = line.map_coords(|v| v * 2.0);
        assert_eq!(doubled.xs(), vec![2.0, 6.0]);
        assert_eq!(doubled.ys(), vec![4.0, 8.0]);
    }
}
