//! Midpoint subdivision of a Bézier triangle into four sub-triangles.

use nalgebra::Matrix2xX;

use super::nodes::{de_casteljau_step, num_nodes};

// Corner barycentric coordinates of the four half-scale sub-triangles,
// each row one corner (local (s,t) = (0,0), (1,0), (0,1)).
const SUB_A: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.5, 0.5, 0.0], [0.5, 0.0, 0.5]];
const SUB_B: [[f64; 3]; 3] = [[0.0, 0.5, 0.5], [0.5, 0.0, 0.5], [0.5, 0.5, 0.0]];
const SUB_C: [[f64; 3]; 3] = [[0.5, 0.5, 0.0], [0.0, 1.0, 0.0], [0.0, 0.5, 0.5]];
const SUB_D: [[f64; 3]; 3] = [[0.5, 0.0, 0.5], [0.0, 0.5, 0.5], [0.0, 0.0, 1.0]];

/// Control net of the sub-triangle with corner barycentric coordinates
/// `corners`, via blossoming: the local node at `(i, j, k)` is the blossom
/// of the parent evaluated at corner 0 taken i times, corner 1 j times and
/// corner 2 k times. The blossom is symmetric, so the reduction order is
/// immaterial; each reduction is one de Casteljau step.
fn blossom_net(nodes: &Matrix2xX<f64>, degree: usize, corners: &[[f64; 3]; 3]) -> Matrix2xX<f64> {
    let mut out = Matrix2xX::zeros(num_nodes(degree));
    let mut idx = 0;
    for k in 0..=degree {
        for j in 0..=(degree - k) {
            let i = degree - j - k;
            let mut net = nodes.clone();
            let mut d = degree;
            for (count, corner) in [(i, &corners[0]), (j, &corners[1]), (k, &corners[2])] {
                for _ in 0..count {
                    net = de_casteljau_step(&net, d, corner[0], corner[1], corner[2]);
                    d -= 1;
                }
            }
            out.set_column(idx, &net.column(0).into_owned());
            idx += 1;
        }
    }
    out
}

/// Subdivide a degree-`degree` triangle into its four half-scale children:
/// lower-left A, inverted middle B, lower-right C, top D.
///
/// In parent cartesian parameters the children cover
/// A: (0,0)-(½,0)-(0,½), B: (½,½)-(0,½)-(½,0),
/// C: (½,0)-(1,0)-(½,½), D: (0,½)-(½,½)-(0,1).
pub fn subdivide_nodes(nodes: &Matrix2xX<f64>, degree: usize) -> [Matrix2xX<f64>; 4] {
    debug_assert_eq!(nodes.ncols(), num_nodes(degree));
    [
        blossom_net(nodes, degree, &SUB_A),
        blossom_net(nodes, degree, &SUB_B),
        blossom_net(nodes, degree, &SUB_C),
        blossom_net(nodes, degree, &SUB_D),
    ]
}
