//! Axis-aligned bounding boxes over 2×N node matrices.

use nalgebra::{Matrix2xX, Vector2};

/// Axis-aligned bounding box, returned by value.
///
/// For a non-empty node set `left <= right` and `bottom <= top`. An empty
/// node set produces the inverted infinite box (every `contains` is false);
/// callers pass N >= 1 on all real paths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl BoundingBox {
    /// Inclusive point membership: boundary points are inside.
    #[inline]
    pub fn contains(&self, point: Vector2<f64>) -> bool {
        self.left <= point.x && point.x <= self.right && self.bottom <= point.y && point.y <= self.top
    }
}

/// Classification of two bounding boxes' relationship.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxIntersection {
    /// Separated by a positive gap along some axis.
    Disjoint,
    /// Touching exactly on a boundary coordinate, interiors disjoint.
    Tangent,
    /// Interiors overlap.
    Intersection,
}

/// Bounding box of all control points in a 2×N column-major node matrix.
pub fn bbox(nodes: &Matrix2xX<f64>) -> BoundingBox {
    let mut left = f64::INFINITY;
    let mut right = f64::NEG_INFINITY;
    let mut bottom = f64::INFINITY;
    let mut top = f64::NEG_INFINITY;
    for col in nodes.column_iter() {
        left = left.min(col[0]);
        right = right.max(col[0]);
        bottom = bottom.min(col[1]);
        top = top.max(col[1]);
    }
    BoundingBox {
        left,
        right,
        bottom,
        top,
    }
}

/// Classify the bounding boxes of two node sets.
///
/// A cheap rejection filter for curve/triangle intersection: `Disjoint`
/// means the underlying objects cannot meet, `Tangent` means they can touch
/// only on the shared box boundary.
pub fn bbox_intersect(nodes1: &Matrix2xX<f64>, nodes2: &Matrix2xX<f64>) -> BoxIntersection {
    let b1 = bbox(nodes1);
    let b2 = bbox(nodes2);
    if b2.right < b1.left || b1.right < b2.left || b2.top < b1.bottom || b1.top < b2.bottom {
        return BoxIntersection::Disjoint;
    }
    if b2.right == b1.left || b1.right == b2.left || b2.top == b1.bottom || b1.top == b2.bottom {
        BoxIntersection::Tangent
    } else {
        BoxIntersection::Intersection
    }
}
