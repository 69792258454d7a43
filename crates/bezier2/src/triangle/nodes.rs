//! Control-net indexing and the de Casteljau reduction step.

use nalgebra::Matrix2xX;

/// Number of control points of a degree-`degree` Bézier triangle.
#[inline]
pub fn num_nodes(degree: usize) -> usize {
    (degree + 1) * (degree + 2) / 2
}

/// Column index of the control point with barycentric index `(i, j, k)`,
/// `i = degree - j - k`, under the k-major ordering.
#[inline]
pub(crate) fn node_index(degree: usize, j: usize, k: usize) -> usize {
    // Rows k' < k hold (degree + 1 - k') nodes each.
    k * (2 * degree + 3 - k) / 2 + j
}

/// One de Casteljau reduction: collapse a degree-`degree` net to the
/// degree-`degree - 1` net of the same triangle evaluated against
/// `(lambda1, lambda2, lambda3)`:
/// `b'_{ijk} = λ1·b_{i+1,j,k} + λ2·b_{i,j+1,k} + λ3·b_{i,j,k+1}`.
pub(crate) fn de_casteljau_step(
    nodes: &Matrix2xX<f64>,
    degree: usize,
    lambda1: f64,
    lambda2: f64,
    lambda3: f64,
) -> Matrix2xX<f64> {
    debug_assert!(degree >= 1);
    debug_assert_eq!(nodes.ncols(), num_nodes(degree));
    let mut out = Matrix2xX::zeros(num_nodes(degree - 1));
    let mut new_idx = 0;
    for k in 0..degree {
        for j in 0..(degree - k) {
            let b1 = nodes.column(node_index(degree, j, k));
            let b2 = nodes.column(node_index(degree, j + 1, k));
            let b3 = nodes.column(node_index(degree, j, k + 1));
            out.set_column(new_idx, &(b1 * lambda1 + b2 * lambda2 + b3 * lambda3));
            new_idx += 1;
        }
    }
    out
}
