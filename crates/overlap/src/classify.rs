//! Separating-edge sweep of one polygon's edges against another polygon.
//!
//! For each edge of `subject`, the edge is rotated by 90° and every vertex of both
//! polygons is projected on that normal (relative to the edge start). The sign of
//! the subject's own projections fixes its side of the line, which makes the test
//! independent of winding order. The other polygon's signs then decide whether the
//! edge separates, is shared, votes for containment, or is left for the
//! intersection solver.

use nalgebra::Vector2;
use std::fmt;
use tracing::trace;

use crate::polygon::Polygon;

/// Verdict of a single classify pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionType {
    Apart,
    Adjacent,
    /// The count of edges with `other` strictly on the inner side equals
    /// `other.sides()`. Exact for polygons with equal side counts.
    Contains,
    /// No conclusion from this polygon's edges.
    Undetermined,
}

impl fmt::Display for CollisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CollisionType::Apart => "apart",
            CollisionType::Adjacent => "adjacent",
            CollisionType::Contains => "contains",
            CollisionType::Undetermined => "undetermined",
        })
    }
}

/// Ascending edge indices of one polygon that no verdict could be drawn from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateEdges(Vec<usize>);

impl CandidateEdges {
    pub const fn new() -> Self {
        Self(Vec::new())
    }
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }
    #[inline]
    fn push(&mut self, edge: usize) {
        debug_assert!(self.0.last().is_none_or(|&last| last < edge));
        self.0.push(edge);
    }
}

/// Sorted and deduplicated, for feeding the solver hand-picked edges.
impl FromIterator<usize> for CandidateEdges {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut edges: Vec<usize> = iter.into_iter().collect();
        edges.sort_unstable();
        edges.dedup();
        Self(edges)
    }
}

impl<'a> IntoIterator for &'a CandidateEdges {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Result of `classify`: verdict plus the edges collected along the way.
///
/// On an early `Apart`/`Adjacent` stop the candidate list only covers the edges
/// visited before the stop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub verdict: CollisionType,
    pub candidates: CandidateEdges,
}

/// What one edge of `subject` says about `other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EdgeVote {
    Separating,
    Shared,
    Inside,
    Candidate,
}

/// Sweep every edge of `subject` against the vertices of `other`.
pub fn classify(subject: &Polygon, other: &Polygon) -> Classification {
    let mut candidates = CandidateEdges::default();
    let mut inside_votes = 0usize;
    for i in 0..subject.sides() {
        let vote = edge_vote(subject, other, i);
        trace!(subject = subject.name(), edge = i, ?vote, "edge vote");
        match vote {
            EdgeVote::Separating => {
                return Classification {
                    verdict: CollisionType::Apart,
                    candidates,
                }
            }
            EdgeVote::Shared => {
                return Classification {
                    verdict: CollisionType::Adjacent,
                    candidates,
                }
            }
            EdgeVote::Inside => inside_votes += 1,
            EdgeVote::Candidate => candidates.push(i),
        }
    }
    let verdict = if inside_votes == other.sides() {
        CollisionType::Contains
    } else {
        CollisionType::Undetermined
    };
    Classification {
        verdict,
        candidates,
    }
}

fn edge_vote(subject: &Polygon, other: &Polygon, i: usize) -> EdgeVote {
    let (p1, p2) = subject.edge(i);
    let rot = Vector2::new(p2.y - p1.y, p1.x - p2.x);
    let project = |v: &Vector2<f32>| rot.dot(&(v - p1));

    let own: f32 = subject.vertices().iter().map(project).sum();
    let side_a: i64 = if own > 0.0 { 1 } else { -1 };

    let mut sum_b: i64 = 0;
    let mut on_edge = 0usize;
    for v in other.vertices() {
        let d = project(v);
        if d > 0.0 {
            sum_b += 1;
        } else if d < 0.0 {
            sum_b -= 1;
        } else if subject.lies_on_edge(*v, i) {
            on_edge += 1;
        }
    }

    let n_other = other.sides() as i64;
    if sum_b == -side_a * n_other {
        EdgeVote::Separating
    } else if on_edge == 2 {
        if sum_b.signum() == -side_a {
            EdgeVote::Shared
        } else {
            EdgeVote::Candidate
        }
    } else if sum_b == side_a * n_other {
        EdgeVote::Inside
    } else {
        EdgeVote::Candidate
    }
}
