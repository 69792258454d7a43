//! Core geometric helpers in the plane.
//!
//! Purpose
//! - Provide the elementary operations the rest of the crate is built on:
//!   cross products, bounding boxes, closed-interval predicates with
//!   tolerance-based boundary snapping, convex hulls, and convex polygon
//!   collision.
//! - Keep the API minimal and numerically explicit: fixed named tolerances,
//!   `_eps` variants where the knob matters, `Option` for the one recognized
//!   failure (a value that cannot be reconciled with [0, 1]).
//!
//! Conventions
//! - Point sets for hulls and polygons are slices of `Vector2<f64>`; control
//!   nets are 2×N column-major `Matrix2xX<f64>` with one point per column.
//! - Predicates are inclusive at boundaries unless stated otherwise.

mod bbox;
mod hull;
mod interval;
mod vector;

pub use bbox::{bbox, bbox_intersect, BoundingBox, BoxIntersection};
pub use hull::{polygon_collide, simple_convex_hull};
pub use interval::{in_interval, wiggle_interval, wiggle_interval_eps, WIGGLE};
pub use vector::{cross_product, vector_close, vector_close_eps, VECTOR_CLOSE_EPS};
