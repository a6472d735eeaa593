//! End-to-end scenarios and randomized properties over `resolve`.

use super::prelude::*;
use super::{shape::ShapeError, PolygonError};
use nalgebra::vector;
use proptest::prelude::*;

fn square(name: &str, x0: f32, y0: f32, side: f32) -> Polygon {
    Polygon::from_flat(
        name,
        &[x0, y0, x0 + side, y0, x0 + side, y0 + side, x0, y0 + side],
    )
    .unwrap()
}

#[test]
fn scenario_shared_edge() {
    let a = square("A", 0.0, 0.0, 1.0);
    let b = square("B", 1.0, 0.0, 1.0);
    assert_eq!(resolve(&a, &b).relation, Relation::Adjacent);
    assert_eq!(resolve(&b, &a).relation, Relation::Adjacent);
}

#[test]
fn scenario_containment() {
    let a = square("A", 0.0, 0.0, 4.0);
    let b = square("B", 1.0, 1.0, 1.0);
    let r = resolve(&a, &b);
    assert_eq!(r.relation, Relation::Contains { outer: Which::A });
    assert_eq!(r.decided_by, Which::A);
    assert_eq!(
        resolve(&b, &a).relation,
        Relation::Contains { outer: Which::B }
    );
}

#[test]
fn scenario_apart() {
    let a = square("A", 0.0, 0.0, 2.0);
    let b = square("B", 10.0, 10.0, 2.0);
    assert_eq!(resolve(&a, &b).relation, Relation::Apart);
    assert_eq!(resolve(&b, &a).relation, Relation::Apart);
}

#[test]
fn scenario_overlapping_squares() {
    let a = square("A", 0.0, 0.0, 2.0);
    let b = square("B", 1.0, 1.0, 2.0);
    let r = resolve(&a, &b);
    assert_eq!(r.relation, Relation::Intersecting);
    let pts: Vec<_> = r.intersections(&a, &b).map(|h| h.point).collect();
    assert_eq!(pts, vec![vector![2.0, 1.0], vector![1.0, 2.0]]);
}

#[test]
fn rotated_square_over_axis_square() {
    // Diamond with corners poking through all four sides of the square.
    let a = square("A", -1.0, -1.0, 2.0);
    let b = Polygon::from_flat(
        "B",
        &[0.0, -1.5, 1.5, 0.0, 0.0, 1.5, -1.5, 0.0],
    )
    .unwrap();
    let r = resolve(&a, &b);
    assert_eq!(r.relation, Relation::Intersecting);
    let pts: Vec<_> = r.intersections(&a, &b).map(|h| h.point).collect();
    assert_eq!(pts.len(), 8);
    for p in [
        vector![0.5, -1.0],
        vector![1.0, -0.5],
        vector![1.0, 0.5],
        vector![0.5, 1.0],
        vector![-0.5, 1.0],
        vector![-1.0, 0.5],
        vector![-1.0, -0.5],
        vector![-0.5, -1.0],
    ] {
        assert!(pts.contains(&p), "missing {p:?}");
    }
}

#[test]
fn rectangle_input_check() {
    let bad = vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 2.0],
        vector![0.0, 1.0],
    ];
    assert!(matches!(
        Polygon::with_kind("Rectangle", bad, ShapeKind::Rectangle),
        Err(PolygonError::Shape(ShapeError::OppositeNotParallel { .. }))
    ));
    let good = vec![
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 1.0],
        vector![0.0, 1.0],
    ];
    assert!(Polygon::with_kind("Rectangle", good, ShapeKind::Rectangle).is_ok());
}

#[test]
fn triangle_around_square_is_left_to_the_solver() {
    let tri = Polygon::from_flat("T", &[0.0, 0.0, 10.0, 0.0, 0.0, 10.0]).unwrap();
    let sq = square("S", 1.0, 1.0, 1.0);
    for (a, b) in [(&tri, &sq), (&sq, &tri)] {
        let r = resolve(a, b);
        assert_eq!(r.relation, Relation::Intersecting);
        assert_eq!(r.decided_by, Which::B);
        assert_eq!(r.intersections(a, b).count(), 0);
    }
    let r = resolve(&tri, &sq);
    assert!(r.candidates_a.is_empty());
    assert_eq!(r.candidates_b.as_slice(), &[0, 1, 2, 3]);
}

#[test]
fn reusing_a_polygon_across_analyses() {
    let a = square("A", 0.0, 0.0, 2.0);
    let b = square("B", 1.0, 1.0, 2.0);
    let c = square("C", 0.5, -0.5, 1.0);
    let first: Vec<_> = resolve(&a, &b).intersections(&a, &b).collect();
    let r_ac = resolve(&a, &c);
    let again: Vec<_> = resolve(&a, &b).intersections(&a, &b).collect();
    assert_eq!(first, again);
    assert_eq!(r_ac.relation, Relation::Intersecting);
    let hits: Vec<_> = r_ac.intersections(&a, &c).collect();
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|h| h.edge_a == 0));
}

fn polygon_with(name: &'static str, sides: Sides) -> impl Strategy<Value = Polygon> {
    (any::<u64>(), -2.0f32..2.0, -2.0f32..2.0, 0.2f32..1.5).prop_map(
        move |(seed, cx, cy, radius)| {
            let cfg = CircleCfg {
                sides,
                radius,
                ..CircleCfg::default()
            };
            draw_convex(cfg, Draw { seed, index: 0 }, vector![cx, cy], name).unwrap()
        },
    )
}

fn polygon_strategy(name: &'static str) -> impl Strategy<Value = Polygon> {
    polygon_with(name, Sides::Between(3, 8))
}

/// Two polygons with the same number of sides.
fn matched_pair() -> impl Strategy<Value = (Polygon, Polygon)> {
    (3usize..=8).prop_flat_map(|n| {
        (
            polygon_with("A", Sides::Exactly(n)),
            polygon_with("B", Sides::Exactly(n)),
        )
    })
}

proptest! {
    #[test]
    fn resolve_is_symmetric((a, b) in matched_pair()) {
        let ab = resolve(&a, &b).relation;
        let ba = resolve(&b, &a).relation;
        prop_assert_eq!(ab, ba.swapped());
    }

    #[test]
    fn apart_excludes_containment((a, b) in matched_pair()) {
        let from_a = classify(&a, &b).verdict;
        let from_b = classify(&b, &a).verdict;
        if from_a == CollisionType::Apart {
            prop_assert_ne!(from_b, CollisionType::Contains);
        }
        if from_b == CollisionType::Apart {
            prop_assert_ne!(from_a, CollisionType::Contains);
        }
    }

    #[test]
    fn crossings_lie_on_both_edges(a in polygon_strategy("A"), b in polygon_strategy("B")) {
        let r = resolve(&a, &b);
        for hit in r.intersections(&a, &b) {
            prop_assert!(r.candidates_a.as_slice().contains(&hit.edge_a));
            prop_assert!(r.candidates_b.as_slice().contains(&hit.edge_b));
            prop_assert!(a.lies_on_edge(hit.point, hit.edge_a));
            prop_assert!(b.lies_on_edge(hit.point, hit.edge_b));
        }
    }

    #[test]
    fn lies_on_edge_ignores_endpoint_order(
        p in (-5.0f32..5.0, -5.0f32..5.0),
        q in (-5.0f32..5.0, -5.0f32..5.0),
        r in (-5.0f32..5.0, -5.0f32..5.0),
        t in (-5.0f32..5.0, -5.0f32..5.0),
    ) {
        let fwd = Polygon::from_flat("f", &[p.0, p.1, q.0, q.1, r.0, r.1]).unwrap();
        let rev = Polygon::from_flat("r", &[r.0, r.1, q.0, q.1, p.0, p.1]).unwrap();
        let pt = vector![t.0, t.1];
        // Edge 0 of `fwd` is p→q; edge 1 of `rev` is q→p.
        prop_assert_eq!(fwd.lies_on_edge(pt, 0), rev.lies_on_edge(pt, 1));
        prop_assert_eq!(fwd.lies_on_edge(pt, 0), fwd.lies_on_edge(pt, 0));
    }
}
