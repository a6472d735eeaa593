//! Shape kinds: validation strategies applied when a polygon is built from input.
//!
//! The geometric core never looks at the kind; it only guards what reaches it.

use std::fmt;

use crate::polygon::Polygon;

/// Validation failures for a specific shape kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    WrongSideCount { kind: ShapeKind, expected: usize, got: usize },
    OppositeNotParallel { edge: usize },
    AdjacentNotPerpendicular,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongSideCount {
                kind,
                expected,
                got,
            } => write!(f, "{kind} needs {expected} sides, got {got}"),
            Self::OppositeNotParallel { edge } => write!(
                f,
                "ill-formed rectangle: edges {edge} and {} are not parallel",
                edge + 2
            ),
            Self::AdjacentNotPerpendicular => {
                write!(f, "ill-formed rectangle: adjacent edges are not perpendicular")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// Which validation strategy a polygon goes through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShapeKind {
    /// Any convex polygon; only structural checks.
    #[default]
    Polygon,
    /// Four sides, opposite edges parallel, adjacent edges perpendicular.
    Rectangle,
}

impl ShapeKind {
    pub fn check(self, poly: &Polygon) -> Result<(), ShapeError> {
        match self {
            ShapeKind::Polygon => Ok(()),
            ShapeKind::Rectangle => check_rectangle(poly),
        }
    }

    /// Display label used when the input gives no name.
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Polygon => "Polygon",
            ShapeKind::Rectangle => "Rectangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Slope of an edge, with the axis-aligned cases split out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Slope {
    Vertical,
    Horizontal,
    Angled(f32),
}

impl Slope {
    pub fn of_edge(poly: &Polygon, index: usize) -> Slope {
        let (p1, p2) = poly.edge(index);
        if p1.x == p2.x {
            Slope::Vertical
        } else if p1.y == p2.y {
            Slope::Horizontal
        } else {
            Slope::Angled((p1.y - p2.y) / (p1.x - p2.x))
        }
    }
}

// Exact comparisons throughout; a rotated rectangle whose slope product rounds
// away from -1 is rejected.
fn check_rectangle(poly: &Polygon) -> Result<(), ShapeError> {
    if poly.sides() != 4 {
        return Err(ShapeError::WrongSideCount {
            kind: ShapeKind::Rectangle,
            expected: 4,
            got: poly.sides(),
        });
    }
    let s: [Slope; 4] = std::array::from_fn(|i| Slope::of_edge(poly, i));
    for edge in 0..2 {
        if s[edge] != s[edge + 2] {
            return Err(ShapeError::OppositeNotParallel { edge });
        }
    }
    let perpendicular = match (s[0], s[1]) {
        (Slope::Horizontal, second) => second == Slope::Vertical,
        (Slope::Vertical, second) => second == Slope::Horizontal,
        (Slope::Angled(_), Slope::Horizontal | Slope::Vertical) => false,
        (Slope::Angled(m0), Slope::Angled(m1)) => m0 * m1 == -1.0,
    };
    if perpendicular {
        Ok(())
    } else {
        Err(ShapeError::AdjacentNotPerpendicular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::PolygonError;

    fn rect(coords: &[f32]) -> Result<(), ShapeError> {
        ShapeKind::Rectangle.check(&Polygon::from_flat("Rectangle", coords).unwrap())
    }

    #[test]
    fn accepts_axis_aligned_rectangle() {
        assert_eq!(rect(&[0.0, 0.0, 2.0, 0.0, 2.0, 1.0, 0.0, 1.0]), Ok(()));
        // Same rectangle listed clockwise from another corner.
        assert_eq!(rect(&[2.0, 1.0, 2.0, 0.0, 0.0, 0.0, 0.0, 1.0]), Ok(()));
    }

    #[test]
    fn accepts_rotated_rectangle() {
        // Slopes 0.5 and -2.
        assert_eq!(rect(&[0.0, 0.0, 2.0, 1.0, 1.0, 3.0, -1.0, 2.0]), Ok(()));
    }

    #[test]
    fn rejects_non_rectangular_quadrilateral() {
        assert_eq!(
            rect(&[0.0, 0.0, 1.0, 0.0, 1.0, 2.0, 0.0, 1.0]),
            Err(ShapeError::OppositeNotParallel { edge: 0 })
        );
    }

    #[test]
    fn rejects_parallelogram() {
        // Opposite sides parallel, corners not square.
        assert_eq!(
            rect(&[0.0, 0.0, 2.0, 0.0, 3.0, 1.0, 1.0, 1.0]),
            Err(ShapeError::AdjacentNotPerpendicular)
        );
        assert_eq!(
            rect(&[0.0, 0.0, 2.0, 1.0, 2.0, 3.0, 0.0, 2.0]),
            Err(ShapeError::AdjacentNotPerpendicular)
        );
    }

    #[test]
    fn rejects_out_of_order_vertices() {
        // Crossed ordering of a valid rectangle's corners.
        assert!(rect(&[0.0, 0.0, 2.0, 1.0, 2.0, 0.0, 0.0, 1.0]).is_err());
    }

    #[test]
    fn rectangle_needs_four_sides() {
        let tri = Polygon::from_flat("t", &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0]).unwrap();
        assert!(matches!(
            ShapeKind::Rectangle.check(&tri),
            Err(ShapeError::WrongSideCount { got: 3, .. })
        ));
        assert_eq!(ShapeKind::Polygon.check(&tri), Ok(()));
    }

    #[test]
    fn with_kind_surfaces_shape_error() {
        let verts = Polygon::from_flat("q", &[0.0, 0.0, 1.0, 0.0, 1.0, 2.0, 0.0, 1.0])
            .unwrap()
            .vertices()
            .to_vec();
        let err = Polygon::with_kind("q", verts, ShapeKind::Rectangle).unwrap_err();
        assert!(matches!(err, PolygonError::Shape(_)));
    }
}
