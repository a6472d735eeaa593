//! Two-pass resolution of the relation between polygons A and B.
//!
//! A's edges are swept against B first; only an undetermined first pass runs B's
//! edges against A. Two undetermined passes mean the boundaries cross, and the
//! candidate edges of both passes feed the intersection solver.

use std::fmt;
use tracing::debug;

use crate::classify::{classify, CandidateEdges, CollisionType};
use crate::intersect::{find_intersections, Intersections};
use crate::polygon::Polygon;

/// One of the two polygons handed to `resolve`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Which {
    A,
    B,
}

impl Which {
    #[inline]
    pub fn other(self) -> Which {
        match self {
            Which::A => Which::B,
            Which::B => Which::A,
        }
    }
}

impl fmt::Display for Which {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Which::A => "A",
            Which::B => "B",
        })
    }
}

/// Final relation between A and B.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    Apart,
    Adjacent,
    Contains { outer: Which },
    Intersecting,
}

impl Relation {
    /// Same relation seen from the swapped pair (B, A).
    pub fn swapped(self) -> Relation {
        match self {
            Relation::Contains { outer } => Relation::Contains {
                outer: outer.other(),
            },
            r => r,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Apart => f.write_str("apart"),
            Relation::Adjacent => f.write_str("adjacent"),
            Relation::Contains { outer } => write!(f, "contains (outer {outer})"),
            Relation::Intersecting => f.write_str("intersecting"),
        }
    }
}

/// Outcome of `resolve`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub relation: Relation,
    /// Polygon whose edges produced the verdict; `B` also when both passes
    /// were undetermined.
    pub decided_by: Which,
    pub candidates_a: CandidateEdges,
    pub candidates_b: CandidateEdges,
}

impl Resolution {
    /// Crossing points when the polygons intersect; empty otherwise.
    ///
    /// `a` and `b` must be the polygons this resolution came from.
    pub fn intersections<'a>(&'a self, a: &'a Polygon, b: &'a Polygon) -> Intersections<'a> {
        if self.relation == Relation::Intersecting {
            find_intersections(a, &self.candidates_a, b, &self.candidates_b)
        } else {
            find_intersections(a, &NO_EDGES, b, &NO_EDGES)
        }
    }
}

static NO_EDGES: CandidateEdges = CandidateEdges::new();

fn settled(verdict: CollisionType, by: Which) -> Option<Relation> {
    match verdict {
        CollisionType::Apart => Some(Relation::Apart),
        CollisionType::Adjacent => Some(Relation::Adjacent),
        CollisionType::Contains => Some(Relation::Contains { outer: by }),
        CollisionType::Undetermined => None,
    }
}

/// Classify (A, B), falling back to (B, A) when A's edges are inconclusive.
pub fn resolve(a: &Polygon, b: &Polygon) -> Resolution {
    let first = classify(a, b);
    debug!(pass = "A", verdict = %first.verdict, candidates = first.candidates.len(), "classify");
    if let Some(relation) = settled(first.verdict, Which::A) {
        return Resolution {
            relation,
            decided_by: Which::A,
            candidates_a: first.candidates,
            candidates_b: CandidateEdges::default(),
        };
    }

    let second = classify(b, a);
    debug!(pass = "B", verdict = %second.verdict, candidates = second.candidates.len(), "classify");
    let relation = settled(second.verdict, Which::B).unwrap_or(Relation::Intersecting);
    Resolution {
        relation,
        decided_by: Which::B,
        candidates_a: first.candidates,
        candidates_b: second.candidates,
    }
}
