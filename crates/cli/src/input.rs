//! Turning user text and JSON files into checked polygons.

use anyhow::{Context, Result};
use overlap::{Polygon, PolygonError, ShapeKind, Vec2};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Shape kind as spelled on the command line and in JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindArg {
    #[default]
    Polygon,
    Rectangle,
}

impl From<KindArg> for ShapeKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Polygon => ShapeKind::Polygon,
            KindArg::Rectangle => ShapeKind::Rectangle,
        }
    }
}

#[derive(Debug)]
pub enum InputError {
    NotANumber { token: String },
    Polygon(PolygonError),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber { token } => write!(f, "not a number: {token:?}"),
            Self::Polygon(_) => f.write_str("invalid polygon"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotANumber { .. } => None,
            Self::Polygon(e) => Some(e),
        }
    }
}

impl From<PolygonError> for InputError {
    fn from(e: PolygonError) -> Self {
        Self::Polygon(e)
    }
}

/// Whitespace- or comma-separated floats.
pub fn parse_coords(text: &str) -> Result<Vec<f32>, InputError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<f32>().map_err(|_| InputError::NotANumber {
                token: t.to_string(),
            })
        })
        .collect()
}

pub fn polygon_from_coords(
    name: &str,
    coords: &[f32],
    kind: ShapeKind,
) -> Result<Polygon, InputError> {
    let flat = Polygon::from_flat(name, coords)?;
    kind.check(&flat).map_err(PolygonError::from)?;
    Ok(flat)
}

pub fn polygon_from_text(name: &str, text: &str, kind: ShapeKind) -> Result<Polygon, InputError> {
    polygon_from_coords(name, &parse_coords(text)?, kind)
}

/// One polygon in a pair file.
#[derive(Debug, Deserialize)]
pub struct ShapeSpec {
    pub name: Option<String>,
    #[serde(default)]
    pub kind: KindArg,
    pub vertices: Vec<[f32; 2]>,
}

impl ShapeSpec {
    pub fn build(self) -> Result<Polygon, PolygonError> {
        let kind = ShapeKind::from(self.kind);
        let name = self.name.unwrap_or_else(|| kind.label().to_string());
        let vertices = self
            .vertices
            .into_iter()
            .map(|[x, y]| Vec2::new(x, y))
            .collect();
        Polygon::with_kind(name, vertices, kind)
    }
}

/// `{ "a": ShapeSpec, "b": ShapeSpec }`
#[derive(Debug, Deserialize)]
pub struct PairSpec {
    pub a: ShapeSpec,
    pub b: ShapeSpec,
}

impl PairSpec {
    pub fn build(self) -> Result<(Polygon, Polygon)> {
        let a = self.a.build().context("polygon a")?;
        let b = self.b.build().context("polygon b")?;
        Ok((a, b))
    }
}

pub fn read_pair(path: &Path) -> Result<(Polygon, Polygon)> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let spec: PairSpec = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {}", path.display()))?;
    spec.build()
}
