//! Human-readable and JSON renderings of a resolution.

use overlap::{Polygon, Relation, Resolution, Which};
use serde::Serialize;

/// Message block for the terminal, one `( x, y )` line per crossing.
pub fn render(a: &Polygon, b: &Polygon, r: &Resolution) -> String {
    let (na, nb) = (a.name(), b.name());
    let mut out = match r.relation {
        Relation::Apart => format!("{na} A and {nb} B are well separated.\n"),
        Relation::Adjacent => format!("{na} A and {nb} B are adjacent.\n"),
        Relation::Contains { outer: Which::A } => {
            format!("{nb} B is wholly contained within {na} A.\n")
        }
        Relation::Contains { outer: Which::B } => {
            format!("{na} A is wholly contained within {nb} B.\n")
        }
        Relation::Intersecting => {
            format!("{na} A and {nb} B intersect. The points of intersection are:\n")
        }
    };
    out.extend(r.intersections(a, b).map(|hit| format!("{hit}\n")));
    out
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Report {
    pub relation: &'static str,
    pub outer: Option<String>,
    pub points: Vec<[f32; 2]>,
}

impl Report {
    pub fn new(a: &Polygon, b: &Polygon, r: &Resolution) -> Self {
        let (relation, outer) = match r.relation {
            Relation::Apart => ("apart", None),
            Relation::Adjacent => ("adjacent", None),
            Relation::Contains { outer } => ("contains", Some(outer.to_string())),
            Relation::Intersecting => ("intersecting", None),
        };
        Self {
            relation,
            outer,
            points: r.intersections(a, b).map(|h| [h.point.x, h.point.y]).collect(),
        }
    }
}
