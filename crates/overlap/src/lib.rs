//! Overlap analysis for pairs of convex polygons in the plane.
//!
//! Pipeline
//! - `classify`: separating-edge sweep of one polygon's edges against the other.
//! - `resolve`: runs the sweep for (A, B) and, if inconclusive, for (B, A).
//! - `intersect`: crossing points of the edges both sweeps left undecided.
//!
//! Numerics
//! - Coordinates are `f32`. "On the line" and "parallel" are exact float
//!   comparisons; near-degenerate inputs can flip between verdicts.
//!
//! API Policy
//! - No stable public API yet; the CLI in `crates/cli` is the only consumer.

pub mod classify;
pub mod intersect;
pub mod polygon;
pub mod rand;
pub mod resolve;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use classify::{classify, CandidateEdges, Classification, CollisionType};
pub use intersect::{find_intersections, Intersection, Intersections, Line};
pub use nalgebra::Vector2 as Vec2;
pub use polygon::{Polygon, PolygonError};
pub use resolve::{resolve, Relation, Resolution, Which};
pub use shape::{ShapeError, ShapeKind, Slope};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::classify::{classify, CandidateEdges, CollisionType};
    pub use crate::intersect::{find_intersections, Intersection};
    pub use crate::polygon::Polygon;
    pub use crate::rand::{draw_convex, CircleCfg, Draw, Sides};
    pub use crate::resolve::{resolve, Relation, Resolution, Which};
    pub use crate::shape::ShapeKind;
    pub use nalgebra::Vector2 as Vec2;
}

#[cfg(test)]
mod tests;
