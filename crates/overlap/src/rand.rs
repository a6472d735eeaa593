//! Seeded random convex polygons for property tests and benchmarks.
//!
//! Vertices sit on a circle around `center` at jittered angles. The jitter
//! stays under half the angular spacing, so the angles never reorder and the
//! polygon is strictly convex and counter-clockwise.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

use crate::polygon::Polygon;

const MAX_JITTER: f64 = 0.45;

/// How many sides a drawn polygon gets. Values below 3 are raised to 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sides {
    Exactly(usize),
    /// Inclusive range.
    Between(usize, usize),
}

impl Sides {
    fn pick(self, rng: &mut StdRng) -> usize {
        match self {
            Sides::Exactly(n) => n.max(3),
            Sides::Between(lo, hi) => {
                let lo = lo.max(3);
                rng.gen_range(lo..=hi.max(lo))
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CircleCfg {
    pub sides: Sides,
    pub radius: f32,
    /// Angle jitter as a fraction of `2π / sides`.
    pub jitter: f64,
}

impl Default for CircleCfg {
    fn default() -> Self {
        Self {
            sides: Sides::Between(3, 8),
            radius: 1.0,
            jitter: 0.3,
        }
    }
}

/// `(seed, index)` names one draw; the same pair always yields the same polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Draw {
    pub seed: u64,
    pub index: u64,
}

impl Draw {
    fn rng(self) -> StdRng {
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[8..16].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(key)
    }
}

/// `None` if the radius is not positive or a vertex is not finite.
pub fn draw_convex(
    cfg: CircleCfg,
    draw: Draw,
    center: Vector2<f32>,
    name: impl Into<String>,
) -> Option<Polygon> {
    if !cfg.radius.is_finite() || cfg.radius <= 0.0 {
        return None;
    }
    let mut rng = draw.rng();
    let n = cfg.sides.pick(&mut rng);
    let step = TAU / n as f64;
    let jitter = cfg.jitter.clamp(0.0, MAX_JITTER) * step;
    let phase = rng.gen_range(0.0..TAU);
    let radius = f64::from(cfg.radius);
    let vertices = (0..n)
        .map(|k| {
            let theta = phase + k as f64 * step + rng.gen_range(-1.0..=1.0) * jitter;
            center
                + Vector2::new(
                    (theta.cos() * radius) as f32,
                    (theta.sin() * radius) as f32,
                )
        })
        .collect();
    Polygon::new(name, vertices).ok()
}
