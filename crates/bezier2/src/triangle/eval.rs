//! De Casteljau evaluation and Jacobian control nets.

use nalgebra::{Matrix2xX, Vector2};

use super::nodes::{de_casteljau_step, node_index, num_nodes};

/// Evaluate the triangle at barycentric coordinates `(λ1, λ2, λ3)`.
///
/// Repeated de Casteljau reduction; `λ1 + λ2 + λ3 = 1` is assumed for points
/// on the triangle but not required (the de Casteljau recurrence evaluates
/// the polynomial blossom either way).
pub fn evaluate_barycentric(
    nodes: &Matrix2xX<f64>,
    degree: usize,
    lambda1: f64,
    lambda2: f64,
    lambda3: f64,
) -> Vector2<f64> {
    debug_assert_eq!(nodes.ncols(), num_nodes(degree));
    let mut net = nodes.clone();
    let mut d = degree;
    while d > 0 {
        net = de_casteljau_step(&net, d, lambda1, lambda2, lambda3);
        d -= 1;
    }
    Vector2::new(net[(0, 0)], net[(1, 0)])
}

/// Evaluate the triangle at cartesian parameters `(s, t)`,
/// i.e. at barycentric `(1 - s - t, s, t)`.
#[inline]
pub fn evaluate_cartesian(nodes: &Matrix2xX<f64>, degree: usize, s: f64, t: f64) -> Vector2<f64> {
    evaluate_barycentric(nodes, degree, 1.0 - s - t, s, t)
}

/// Control nets (degree d−1) of the partial derivatives `B_s` and `B_t`.
///
/// `B_s` nodes are `d·(b_{i,j+1,k} − b_{i+1,j,k})`, `B_t` nodes are
/// `d·(b_{i,j,k+1} − b_{i+1,j,k})`; evaluate them with
/// [`evaluate_barycentric`] at degree d−1 to obtain the Jacobian columns.
pub fn jacobian_both(nodes: &Matrix2xX<f64>, degree: usize) -> (Matrix2xX<f64>, Matrix2xX<f64>) {
    debug_assert!(degree >= 1);
    debug_assert_eq!(nodes.ncols(), num_nodes(degree));
    let d = degree as f64;
    let mut jac_s = Matrix2xX::zeros(num_nodes(degree - 1));
    let mut jac_t = Matrix2xX::zeros(num_nodes(degree - 1));
    let mut idx = 0;
    for k in 0..degree {
        for j in 0..(degree - k) {
            let base = nodes.column(node_index(degree, j, k));
            let next_s = nodes.column(node_index(degree, j + 1, k));
            let next_t = nodes.column(node_index(degree, j, k + 1));
            jac_s.set_column(idx, &((next_s - base) * d));
            jac_t.set_column(idx, &((next_t - base) * d));
            idx += 1;
        }
    }
    (jac_s, jac_t)
}
