//! Bézier triangles over the plane.
//!
//! Purpose
//! - Represent a degree-d Bézier triangle by its control net — a 2×N
//!   column-major node matrix with N = (d+1)(d+2)/2 — and provide the
//!   operations point location needs: de Casteljau evaluation, Jacobian
//!   nets, midpoint subdivision, and Newton refinement.
//!
//! Node ordering
//! - Columns are ordered by ascending k (the t-direction index), then
//!   ascending j (the s-direction index); the barycentric index is
//!   (i, j, k) with i = d - j - k. For degree 2:
//!   (2,0,0), (1,1,0), (0,2,0), (1,0,1), (0,1,1), (0,0,2).
//!
//! Code cross-refs: `helpers::{bbox, vector_close_eps}`

mod eval;
mod locate;
mod nodes;
mod subdivide;

pub use eval::{evaluate_barycentric, evaluate_cartesian, jacobian_both};
pub use locate::{locate_point, newton_refine, LOCATE_EPS, MAX_LOCATE_SUBDIVISIONS};
pub use nodes::num_nodes;
pub use subdivide::subdivide_nodes;

#[cfg(test)]
mod tests;
