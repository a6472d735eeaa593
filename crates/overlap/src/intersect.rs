//! Crossing points between the candidate edges of two intersecting polygons.
//!
//! Lines are kept in slope/intercept form with the axis-aligned cases split out,
//! so vertical edges never divide by zero. Parallel pairs (including collinear
//! overlapping edges) produce no point.

use nalgebra::Vector2;
use std::fmt;

use crate::classify::CandidateEdges;
use crate::polygon::Polygon;

/// Infinite line through an edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Line {
    Vertical { x: f32 },
    Horizontal { y: f32 },
    Sloped { slope: f32, intercept: f32 },
}

impl Line {
    pub fn through(p1: Vector2<f32>, p2: Vector2<f32>) -> Line {
        if p1.x == p2.x {
            Line::Vertical { x: p1.x }
        } else if p1.y == p2.y {
            Line::Horizontal { y: p1.y }
        } else {
            let slope = (p1.y - p2.y) / (p1.x - p2.x);
            Line::Sloped {
                slope,
                intercept: p1.y - slope * p1.x,
            }
        }
    }
}

/// How a crossing was obtained; axis-aligned perpendicular pairs skip the
/// end-vertex filter.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Crossing {
    Aligned(Vector2<f32>),
    Solved(Vector2<f32>),
}

fn crossing(a: Line, b: Line) -> Option<Crossing> {
    use Line::*;
    let solved = |x: f32, y: f32| Some(Crossing::Solved(Vector2::new(x, y)));
    match (a, b) {
        (Vertical { .. }, Vertical { .. }) | (Horizontal { .. }, Horizontal { .. }) => None,
        (Vertical { x }, Horizontal { y }) | (Horizontal { y }, Vertical { x }) => {
            Some(Crossing::Aligned(Vector2::new(x, y)))
        }
        (Vertical { x }, Sloped { slope, intercept })
        | (Sloped { slope, intercept }, Vertical { x }) => solved(x, slope * x + intercept),
        (Horizontal { y }, Sloped { slope, intercept })
        | (Sloped { slope, intercept }, Horizontal { y }) => solved((y - intercept) / slope, y),
        (
            Sloped {
                slope: ma,
                intercept: ca,
            },
            Sloped {
                slope: mb,
                intercept: cb,
            },
        ) => {
            if ma == mb {
                return None;
            }
            let x = (cb - ca) / (ma - mb);
            solved(x, ma * x + ca)
        }
    }
}

/// One accepted crossing between edge `edge_a` of A and edge `edge_b` of B.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub point: Vector2<f32>,
    pub edge_a: usize,
    pub edge_b: usize,
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}, {} )", self.point.x, self.point.y)
    }
}

/// Lazy iterator over crossings, A's candidates outer, B's inner.
///
/// Finite and single-pass: call `find_intersections` again to recompute.
#[derive(Debug)]
pub struct Intersections<'a> {
    a: &'a Polygon,
    b: &'a Polygon,
    cand_a: &'a [usize],
    cand_b: &'a [usize],
    i: usize,
    j: usize,
}

pub fn find_intersections<'a>(
    a: &'a Polygon,
    cand_a: &'a CandidateEdges,
    b: &'a Polygon,
    cand_b: &'a CandidateEdges,
) -> Intersections<'a> {
    Intersections {
        a,
        b,
        cand_a: cand_a.as_slice(),
        cand_b: cand_b.as_slice(),
        i: 0,
        j: 0,
    }
}

impl Intersections<'_> {
    fn check_pair(&self, edge_a: usize, edge_b: usize) -> Option<Intersection> {
        let (a1, a2) = self.a.edge(edge_a);
        let (b1, b2) = self.b.edge(edge_b);
        let point = match crossing(Line::through(a1, a2), Line::through(b1, b2))? {
            Crossing::Aligned(p) => p,
            Crossing::Solved(p) => {
                // A vertex shared by two consecutive candidate edges is reported once.
                if p == a2 || p == b2 {
                    return None;
                }
                p
            }
        };
        (self.a.lies_on_edge(point, edge_a) && self.b.lies_on_edge(point, edge_b)).then_some(
            Intersection {
                point,
                edge_a,
                edge_b,
            },
        )
    }
}

impl Iterator for Intersections<'_> {
    type Item = Intersection;

    fn next(&mut self) -> Option<Intersection> {
        while self.i < self.cand_a.len() {
            if self.j >= self.cand_b.len() {
                self.i += 1;
                self.j = 0;
                continue;
            }
            let (ea, eb) = (self.cand_a[self.i], self.cand_b[self.j]);
            self.j += 1;
            if let Some(hit) = self.check_pair(ea, eb) {
                return Some(hit);
            }
        }
        None
    }
}
