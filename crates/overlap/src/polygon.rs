//! Polygon entity: named, ordered vertex list with edge access.
//!
//! - Edge `i` runs from vertex `i` to vertex `(i + 1) % sides`.
//! - Vertices are expected in one winding order (CW or CCW), convex and simple.
//!   Only the rectangle strategy in `shape` checks any of that.

use nalgebra::Vector2;
use std::fmt;

use crate::shape::{ShapeError, ShapeKind};

/// Errors from building a `Polygon` out of raw input.
#[derive(Debug, Clone, PartialEq)]
pub enum PolygonError {
    TooFewVertices { got: usize },
    OddCoordinateCount { got: usize },
    NonFinite { vertex: usize },
    Shape(ShapeError),
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewVertices { got } => {
                write!(f, "polygon needs at least 3 vertices, got {got}")
            }
            Self::OddCoordinateCount { got } => {
                write!(f, "expected (x, y) pairs, got {got} coordinates")
            }
            Self::NonFinite { vertex } => write!(f, "vertex {vertex} has a non-finite coordinate"),
            Self::Shape(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PolygonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Shape(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ShapeError> for PolygonError {
    fn from(e: ShapeError) -> Self {
        Self::Shape(e)
    }
}

/// Convex polygon with a display name.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    name: String,
    vertices: Vec<Vector2<f32>>,
}

impl Polygon {
    pub fn new(name: impl Into<String>, vertices: Vec<Vector2<f32>>) -> Result<Self, PolygonError> {
        if vertices.len() < 3 {
            return Err(PolygonError::TooFewVertices {
                got: vertices.len(),
            });
        }
        if let Some(vertex) = vertices
            .iter()
            .position(|v| !(v.x.is_finite() && v.y.is_finite()))
        {
            return Err(PolygonError::NonFinite { vertex });
        }
        Ok(Self {
            name: name.into(),
            vertices,
        })
    }

    /// Build from `x1 y1 x2 y2 ...`.
    pub fn from_flat(name: impl Into<String>, coords: &[f32]) -> Result<Self, PolygonError> {
        if coords.len() % 2 != 0 {
            return Err(PolygonError::OddCoordinateCount { got: coords.len() });
        }
        let vertices = coords
            .chunks_exact(2)
            .map(|c| Vector2::new(c[0], c[1]))
            .collect();
        Self::new(name, vertices)
    }

    /// Build and run the validation strategy for `kind`.
    pub fn with_kind(
        name: impl Into<String>,
        vertices: Vec<Vector2<f32>>,
        kind: ShapeKind,
    ) -> Result<Self, PolygonError> {
        let poly = Self::new(name, vertices)?;
        kind.check(&poly)?;
        Ok(poly)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn sides(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f32>] {
        &self.vertices
    }

    /// Endpoints of edge `index`; the last edge wraps back to vertex 0.
    #[inline]
    pub fn edge(&self, index: usize) -> (Vector2<f32>, Vector2<f32>) {
        let n = self.vertices.len();
        (self.vertices[index % n], self.vertices[(index + 1) % n])
    }

    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f32>, Vector2<f32>)> + '_ {
        (0..self.sides()).map(move |i| self.edge(i))
    }

    /// Whether `p`, assumed to be on the line through edge `index`, lies within
    /// the edge's bounding box (inclusive).
    pub fn lies_on_edge(&self, p: Vector2<f32>, index: usize) -> bool {
        let (p1, p2) = self.edge(index);
        within(p.x, p1.x, p2.x) && within(p.y, p1.y, p2.y)
    }
}

#[inline]
fn within(v: f32, a: f32, b: f32) -> bool {
    (v >= a && v <= b) || (v >= b && v <= a)
}
