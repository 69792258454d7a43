//! Point-location timing probe for a single curved triangle.
//!
//! Purpose
//! - Provide a reproducible, code-backed data point for "how long does it
//!   take to invert a point on a quadratic Bézier triangle?"
//!
//! Why this shape
//! - The degree-2 net with a curved hypotenuse is the smallest net where the
//!   parameter chart is genuinely nonlinear, so both the subdivision filter
//!   and the Newton polish do real work.

use std::time::Instant;

use bezier2::triangle::{evaluate_cartesian, locate_point};
use nalgebra::Matrix2xX;

fn main() {
    let nodes = Matrix2xX::from_column_slice(&[
        0.0, 0.0, 1.0, 0.0, 2.0, 0.0, 2.0, 1.0, 2.0, 2.0, 0.0, 2.0,
    ]);
    let params = [(0.25, 0.5), (0.125, 0.25), (0.6, 0.3), (0.05, 0.9)];

    for (s, t) in params {
        let target = evaluate_cartesian(&nodes, 2, s, t);
        let start = Instant::now();
        let located = locate_point(&nodes, 2, target.x, target.y);
        let elapsed_us = start.elapsed().as_secs_f64() * 1e6;
        match located {
            Some((s_hat, t_hat)) => {
                let err = ((s_hat - s).powi(2) + (t_hat - t).powi(2)).sqrt();
                println!(
                    "s={s:.4} t={t:.4} located_s={s_hat:.12} located_t={t_hat:.12} \
                     param_err={err:.3e} time_us={elapsed_us:.1}"
                );
            }
            None => println!("s={s:.4} t={t:.4} located=none time_us={elapsed_us:.1}"),
        }
    }

    // A point clearly off the triangle exercises the rejection path.
    let start = Instant::now();
    let off = locate_point(&nodes, 2, 10.0, 10.0);
    let elapsed_us = start.elapsed().as_secs_f64() * 1e6;
    println!("off_triangle_located={} time_us={elapsed_us:.1}", off.is_some());
}
