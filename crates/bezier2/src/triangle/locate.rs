//! Newton refinement and geometric point location on a Bézier triangle.
//!
//! Purpose
//! - Invert `B(s, t) = (x, y)`: recursively subdivide, reject sub-triangles
//!   whose bounding box misses the point, then polish the surviving
//!   candidates' mean centroid with Newton's method.
//!
//! Code cross-refs: `eval::{evaluate_barycentric, jacobian_both}`,
//! `subdivide::subdivide_nodes`, `helpers::{bbox, vector_close_eps}`

use nalgebra::{Matrix2xX, Vector2};

use crate::helpers::{bbox, cross_product, vector_close_eps};

use super::eval::{evaluate_barycentric, jacobian_both};
use super::subdivide::subdivide_nodes;

/// Subdivision rounds before falling back to Newton polishing.
pub const MAX_LOCATE_SUBDIVISIONS: usize = 20;

/// Relative tolerance for accepting a located parameter pair.
pub const LOCATE_EPS: f64 = 7.105_427_357_601_002e-15; // 0.5^47

/// Candidate sub-triangle during location. The centroid is tracked tripled
/// to put off division by three until the final average; the width keeps its
/// sign so the inverted middle child stays distinguishable.
struct Candidate {
    centroid_x3: f64,
    centroid_y3: f64,
    width: f64,
    nodes: Matrix2xX<f64>,
}

/// Direct solve of the 2×2 Newton system
/// `[B_s  B_t] [Δs, Δt]ᵀ = (x, y) − B(s, t)`.
fn newton_refine_solve(
    b_s: Vector2<f64>,
    b_t: Vector2<f64>,
    x_val: f64,
    surf_x: f64,
    y_val: f64,
    surf_y: f64,
) -> (f64, f64) {
    let e_val = x_val - surf_x;
    let f_val = y_val - surf_y;
    let denom = cross_product(b_s, b_t);
    let delta_s = (b_t.y * e_val - b_t.x * f_val) / denom;
    let delta_t = (b_s.x * f_val - b_s.y * e_val) / denom;
    (delta_s, delta_t)
}

/// One Newton step refining a solution of `B(s, t) = (x, y)`.
///
/// Evaluates the triangle and its Jacobian at `(s, t)` and solves the 2×2
/// update directly. When the residual is exactly zero the input is already a
/// solution and is returned unchanged.
pub fn newton_refine(
    nodes: &Matrix2xX<f64>,
    degree: usize,
    x_val: f64,
    y_val: f64,
    s: f64,
    t: f64,
) -> (f64, f64) {
    let lambda1 = 1.0 - s - t;
    let surf = evaluate_barycentric(nodes, degree, lambda1, s, t);
    if surf.x == x_val && surf.y == y_val {
        return (s, t);
    }
    let (jac_s, jac_t) = jacobian_both(nodes, degree);
    let b_s = evaluate_barycentric(&jac_s, degree - 1, lambda1, s, t);
    let b_t = evaluate_barycentric(&jac_t, degree - 1, lambda1, s, t);
    let (delta_s, delta_t) = newton_refine_solve(b_s, b_t, x_val, surf.x, y_val, surf.y);
    (s + delta_s, t + delta_t)
}

/// Keep `candidate` if its bounding box contains the point; if so, push its
/// four children with the tripled-centroid/signed-width bookkeeping.
fn update_candidates(
    candidate: Candidate,
    next_candidates: &mut Vec<Candidate>,
    point: Vector2<f64>,
    degree: usize,
) {
    if !bbox(&candidate.nodes).contains(point) {
        return;
    }
    let [nodes_a, nodes_b, nodes_c, nodes_d] = subdivide_nodes(&candidate.nodes, degree);
    let half_width = 0.5 * candidate.width;
    let Candidate {
        centroid_x3,
        centroid_y3,
        width,
        ..
    } = candidate;
    next_candidates.push(Candidate {
        centroid_x3: centroid_x3 - half_width,
        centroid_y3: centroid_y3 - half_width,
        width: half_width,
        nodes: nodes_a,
    });
    next_candidates.push(Candidate {
        centroid_x3,
        centroid_y3,
        width: -half_width,
        nodes: nodes_b,
    });
    next_candidates.push(Candidate {
        centroid_x3: centroid_x3 + width,
        centroid_y3: centroid_y3 - half_width,
        width: half_width,
        nodes: nodes_c,
    });
    next_candidates.push(Candidate {
        centroid_x3: centroid_x3 - half_width,
        centroid_y3: centroid_y3 + width,
        width: half_width,
        nodes: nodes_d,
    });
}

/// Mean of the candidates' centroids; the tripled sums defer the division
/// by three to this single point.
fn mean_centroid(candidates: &[Candidate]) -> (f64, f64) {
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    for candidate in candidates {
        sum_x += candidate.centroid_x3;
        sum_y += candidate.centroid_y3;
    }
    let denom = 3.0 * candidates.len() as f64;
    (sum_x / denom, sum_y / denom)
}

/// Locate the parameter preimage of `(x, y)` on the triangle.
///
/// Subdivides [`MAX_LOCATE_SUBDIVISIONS`] rounds, pruning sub-triangles
/// whose bounding box misses the point, then refines the surviving
/// candidates' mean centroid with [`newton_refine`] — twice when the first
/// pass does not land within [`LOCATE_EPS`] of the target. Returns `None`
/// when no candidate survives, i.e. the point is not on the triangle.
pub fn locate_point(
    nodes: &Matrix2xX<f64>,
    degree: usize,
    x_val: f64,
    y_val: f64,
) -> Option<(f64, f64)> {
    let point = Vector2::new(x_val, y_val);
    // Tripled centroid (1, 1) and width 1 describe the full unit triangle.
    let mut candidates = vec![Candidate {
        centroid_x3: 1.0,
        centroid_y3: 1.0,
        width: 1.0,
        nodes: nodes.clone(),
    }];
    for _ in 0..=MAX_LOCATE_SUBDIVISIONS {
        let mut next_candidates = Vec::with_capacity(4 * candidates.len());
        for candidate in candidates {
            update_candidates(candidate, &mut next_candidates, point, degree);
        }
        candidates = next_candidates;
    }
    if candidates.is_empty() {
        return None;
    }
    let (s_approx, t_approx) = mean_centroid(&candidates);
    let (s, t) = newton_refine(nodes, degree, x_val, y_val, s_approx, t_approx);
    let actual = evaluate_barycentric(nodes, degree, 1.0 - s - t, s, t);
    if vector_close_eps(actual, point, LOCATE_EPS) {
        Some((s, t))
    } else {
        Some(newton_refine(nodes, degree, x_val, y_val, s, t))
    }
}
