use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ShapeError;
use crate::point::{Point, Polyline};

/// Hand-drawn control point, serialized as `[x, y]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

impl Vertex {
    pub const fn new(x: i32, y: i32) -> Self {
        Vertex { x, y }
    }
}

impl From<[i32; 2]> for Vertex {
    fn from([x, y]: [i32; 2]) -> Self {
        Vertex { x, y }
    }
}

impl From<Vertex> for [i32; 2] {
    fn from(v: Vertex) -> Self {
        [v.x, v.y]
    }
}

impl From<Vertex> for Point {
    fn from(v: Vertex) -> Self {
        Point::new(f64::from(v.x), f64::from(v.y))
    }
}

const BUILTIN_VERTICES: [Vertex; 18] = [
    Vertex::new(2, 7),
    Vertex::new(5, 7),
    Vertex::new(6, 6),
    Vertex::new(6, 3),
    Vertex::new(3, 3),
    Vertex::new(2, 4),
    Vertex::new(2, 7),
    Vertex::new(3, 6),
    Vertex::new(6, 6),
    Vertex::new(5, 7),
    Vertex::new(5, 4),
    Vertex::new(6, 3),
    Vertex::new(3, 3),
    Vertex::new(3, 6),
    Vertex::new(3, 3),
    Vertex::new(2, 4),
    Vertex::new(5, 4),
    Vertex::new(5, 7),
];

/// Closed shape outline. Always holds at least two vertices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VertexList(Vec<Vertex>);

impl VertexList {
    pub fn new(vertices: Vec<Vertex>) -> Result<Self, ShapeError> {
        if vertices.len() < 2 {
            return Err(ShapeError::TooFewVertices {
                count: vertices.len(),
            });
        }
        Ok(VertexList(vertices))
    }

    /// The wireframe cube the firmware draws out of the box.
    pub fn builtin() -> Self {
        VertexList(BUILTIN_VERTICES.to_vec())
    }

    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        let vertices: Vec<Vertex> = serde_json::from_str(raw)?;
        VertexList::new(vertices).map_err(serde::de::Error::custom)
    }

    pub fn load(path: &Path) -> Result<Self, ShapeError> {
        let raw = fs::read_to_string(path).map_err(|source| ShapeError::ReadShape {
            path: path.to_path_buf(),
            source,
        })?;
        VertexList::from_json_str(&raw).map_err(|source| ShapeError::ParseShape {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_polyline(&self) -> Polyline {
        self.0.iter().copied().map(Point::from).collect()
    }
}
