//! Planar Bézier geometry kernel.
//!
//! Purpose
//! - Elementary geometric predicates and operations for curves and Bézier
//!   triangles in the plane: cross products, bounding boxes, tolerance-based
//!   interval snapping, convex hulls, and point location on triangles.
//! - Inputs are borrowed `nalgebra` value types; every operation is a
//!   synchronous pure function that returns a freshly built value. No shared
//!   mutable state exists anywhere in the crate.
//!
//! Conventions
//! - Control nets are 2×N column-major node matrices (`Matrix2xX<f64>`),
//!   one control point per column.
//! - Numerical tolerances are fixed named constants owned by the module that
//!   uses them; `_eps` variants expose the knob where callers need it.

pub mod helpers;
pub mod intersection;
pub mod sample;
pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports so call sites read like the math.
pub use helpers::{BoundingBox, BoxIntersection};
pub use nalgebra::{Matrix2xX, Vector2 as Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::helpers::{
        bbox, bbox_intersect, cross_product, in_interval, polygon_collide, simple_convex_hull,
        vector_close, wiggle_interval, BoundingBox, BoxIntersection,
    };
    pub use crate::intersection::{same_intersection, verify_duplicates, Intersection};
    pub use crate::sample::{draw_points_disk, draw_triangle_nodes, DiskCfg, NetCfg, ReplayToken};
    pub use crate::triangle::{
        evaluate_barycentric, evaluate_cartesian, jacobian_both, locate_point, newton_refine,
        num_nodes, subdivide_nodes,
    };
    pub use nalgebra::{Matrix2xX, Vector2 as Vec2};
}
