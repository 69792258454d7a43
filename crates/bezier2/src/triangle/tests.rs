use super::*;
use crate::sample::{draw_triangle_nodes, NetCfg, ReplayToken};
use nalgebra::{Matrix2xX, Vector2};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Degree-2 net with a curved hypotenuse: corners (0,0), (2,0), (0,2).
fn curved_net() -> Matrix2xX<f64> {
    Matrix2xX::from_column_slice(&[
        0.0, 0.0, 1.0, 0.0, 2.0, 0.0, 2.0, 1.0, 2.0, 2.0, 0.0, 2.0,
    ])
}

#[test]
fn num_nodes_small_degrees() {
    assert_eq!(num_nodes(0), 1);
    assert_eq!(num_nodes(1), 3);
    assert_eq!(num_nodes(2), 6);
    assert_eq!(num_nodes(3), 10);
    assert_eq!(num_nodes(4), 15);
}

#[test]
fn evaluate_linear_identity() {
    // Degree-1 net of the identity chart: B(s, t) = (s, t).
    let nodes = Matrix2xX::from_column_slice(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
    let p = evaluate_cartesian(&nodes, 1, 0.3, 0.4);
    assert!((p - Vector2::new(0.3, 0.4)).norm() < 1e-15);
    // Corners map to corner nodes exactly.
    assert_eq!(evaluate_cartesian(&nodes, 1, 0.0, 0.0), Vector2::new(0.0, 0.0));
    assert_eq!(evaluate_cartesian(&nodes, 1, 1.0, 0.0), Vector2::new(1.0, 0.0));
    assert_eq!(evaluate_cartesian(&nodes, 1, 0.0, 1.0), Vector2::new(0.0, 1.0));
}

#[test]
fn evaluate_curved_quadratic() {
    let nodes = curved_net();
    let p = evaluate_cartesian(&nodes, 2, 0.25, 0.5);
    assert_eq!(p, Vector2::new(1.25, 1.25));
}

#[test]
fn jacobian_linear_is_constant() {
    let nodes = Matrix2xX::from_column_slice(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
    let (jac_s, jac_t) = jacobian_both(&nodes, 1);
    assert_eq!(jac_s.ncols(), 1);
    assert_eq!(jac_t.ncols(), 1);
    assert_eq!(jac_s.column(0).into_owned(), Vector2::new(1.0, 0.0));
    assert_eq!(jac_t.column(0).into_owned(), Vector2::new(0.0, 1.0));
}

#[test]
fn jacobian_matches_finite_differences() {
    let nodes = curved_net();
    let (jac_s, jac_t) = jacobian_both(&nodes, 2);
    let (s, t) = (0.2, 0.3);
    let h = 1e-7;
    let b_s = evaluate_barycentric(&jac_s, 1, 1.0 - s - t, s, t);
    let b_t = evaluate_barycentric(&jac_t, 1, 1.0 - s - t, s, t);
    let fd_s = (evaluate_cartesian(&nodes, 2, s + h, t) - evaluate_cartesian(&nodes, 2, s - h, t))
        / (2.0 * h);
    let fd_t = (evaluate_cartesian(&nodes, 2, s, t + h) - evaluate_cartesian(&nodes, 2, s, t - h))
        / (2.0 * h);
    assert!((b_s - fd_s).norm() < 1e-6);
    assert!((b_t - fd_t).norm() < 1e-6);
}

#[test]
fn newton_refine_worked_example() {
    // From the wrong start (1/2, 1/4), one Newton step toward
    // B(1/4, 1/2) = (5/4, 5/4) moves by exactly (-10/32, 7/32).
    let nodes = curved_net();
    let (s, t) = (0.5, 0.25);
    let (new_s, new_t) = newton_refine(&nodes, 2, 1.25, 1.25, s, t);
    assert!((32.0 * (new_s - s) + 10.0).abs() < 1e-12);
    assert!((32.0 * (new_t - t) - 7.0).abs() < 1e-12);
}

#[test]
fn newton_refine_exact_residual_is_identity() {
    let nodes = curved_net();
    let (s, t) = newton_refine(&nodes, 2, 1.25, 1.25, 0.25, 0.5);
    assert_eq!((s, t), (0.25, 0.5));
}

#[test]
fn subdivide_matches_parent_parameterization() {
    let nodes = curved_net();
    let [sub_a, sub_b, sub_c, sub_d] = subdivide_nodes(&nodes, 2);
    // Local (u, v) on each child against the parent chart it covers.
    let samples = [(0.0, 0.0), (0.5, 0.0), (0.0, 0.5), (0.25, 0.25), (0.3, 0.6)];
    for &(u, v) in &samples {
        let pa = evaluate_cartesian(&sub_a, 2, u, v);
        assert!((pa - evaluate_cartesian(&nodes, 2, 0.5 * u, 0.5 * v)).norm() < 1e-12);
        let pb = evaluate_cartesian(&sub_b, 2, u, v);
        let expect_b = evaluate_cartesian(&nodes, 2, 0.5 * (1.0 - u), 0.5 * (1.0 - v));
        assert!((pb - expect_b).norm() < 1e-12);
        let pc = evaluate_cartesian(&sub_c, 2, u, v);
        assert!((pc - evaluate_cartesian(&nodes, 2, 0.5 * (1.0 + u), 0.5 * v)).norm() < 1e-12);
        let pd = evaluate_cartesian(&sub_d, 2, u, v);
        assert!((pd - evaluate_cartesian(&nodes, 2, 0.5 * u, 0.5 * (1.0 + v))).norm() < 1e-12);
    }
}

#[test]
fn subdivide_identity_corners() {
    // The lower-left child of the identity chart is the half-scale chart.
    let nodes = Matrix2xX::from_column_slice(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
    let [sub_a, _, _, _] = subdivide_nodes(&nodes, 1);
    assert_eq!(sub_a.column(0).into_owned(), Vector2::new(0.0, 0.0));
    assert_eq!(sub_a.column(1).into_owned(), Vector2::new(0.5, 0.0));
    assert_eq!(sub_a.column(2).into_owned(), Vector2::new(0.0, 0.5));
}

#[test]
fn locate_interior_points() {
    let nodes = curved_net();
    let (s, t) = locate_point(&nodes, 2, 1.25, 1.25).expect("point is on the triangle");
    assert!((s - 0.25).abs() < 1e-9);
    assert!((t - 0.5).abs() < 1e-9);

    let target = evaluate_cartesian(&nodes, 2, 0.5, 0.25);
    let (s, t) = locate_point(&nodes, 2, target.x, target.y).expect("point is on the triangle");
    assert!((s - 0.5).abs() < 1e-9);
    assert!((t - 0.25).abs() < 1e-9);
}

#[test]
fn locate_rejects_points_off_the_triangle() {
    let nodes = curved_net();
    assert_eq!(locate_point(&nodes, 2, -5.0, -5.0), None);
    assert_eq!(locate_point(&nodes, 2, 10.0, 0.5), None);
}

#[test]
fn locate_inverts_evaluate_on_jittered_nets() {
    let mut rng = StdRng::seed_from_u64(1729);
    for degree in 1..=4usize {
        for index in 0..4u64 {
            let nodes = draw_triangle_nodes(
                degree,
                NetCfg::default(),
                ReplayToken { seed: 99, index },
            );
            let s = rng.gen_range(0.1..0.7);
            let t = rng.gen_range(0.1..(0.9 - s));
            let target = evaluate_cartesian(&nodes, degree, s, t);
            let (s_located, t_located) =
                locate_point(&nodes, degree, target.x, target.y).expect("interior point");
            assert!(
                (s_located - s).abs() < 1e-6 && (t_located - t).abs() < 1e-6,
                "degree {degree}: located ({s_located}, {t_located}), expected ({s}, {t})"
            );
        }
    }
}
