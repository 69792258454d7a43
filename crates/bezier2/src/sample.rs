//! Deterministic samplers for points and control nets (replay tokens).
//!
//! Purpose
//! - Provide small, reproducible generators for the inputs the tests and
//!   benches need: jittered point clouds for hulls and collision, and
//!   jittered simplex control nets that stay valid Bézier triangles.
//! - Determinism uses a replay token `(seed, index)` mixed into a single
//!   RNG, so any draw can be reproduced from two integers.

use nalgebra::{Matrix2xX, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::triangle::num_nodes;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Disk point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct DiskCfg {
    pub count: usize,
    /// Disk radius; draws are area-uniform.
    pub radius: f64,
}

impl Default for DiskCfg {
    fn default() -> Self {
        Self {
            count: 16,
            radius: 1.0,
        }
    }
}

/// Control-net sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct NetCfg {
    /// Per-node jitter amplitude relative to the node spacing `1/degree`.
    /// Small values keep the triangle map injective.
    pub jitter: f64,
}

impl Default for NetCfg {
    fn default() -> Self {
        Self { jitter: 0.15 }
    }
}

/// Draw an area-uniform point cloud inside a disk around the origin.
pub fn draw_points_disk(cfg: DiskCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    (0..cfg.count)
        .map(|_| {
            let r = cfg.radius * rng.gen::<f64>().sqrt();
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            Vector2::new(r * th.cos(), r * th.sin())
        })
        .collect()
}

/// Draw a degree-`degree` control net: the standard simplex net with nodes
/// at `(j/d, k/d)`, each perturbed by bounded jitter.
///
/// With the default jitter the net stays close to the identity chart, so the
/// resulting triangle is injective and well suited for locate/refine tests.
pub fn draw_triangle_nodes(degree: usize, cfg: NetCfg, tok: ReplayToken) -> Matrix2xX<f64> {
    debug_assert!(degree >= 1);
    let mut rng = tok.to_std_rng();
    let d = degree as f64;
    let amp = cfg.jitter.max(0.0) / d;
    let mut nodes = Matrix2xX::zeros(num_nodes(degree));
    let mut idx = 0;
    for k in 0..=degree {
        for j in 0..=(degree - k) {
            let jx = (rng.gen::<f64>() * 2.0 - 1.0) * amp;
            let jy = (rng.gen::<f64>() * 2.0 - 1.0) * amp;
            nodes.set_column(
                idx,
                &Vector2::new(j as f64 / d + jx, k as f64 / d + jy),
            );
            idx += 1;
        }
    }
    nodes
}
