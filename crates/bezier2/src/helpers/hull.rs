//! Convex hulls and convex polygon collision.

use nalgebra::Vector2;

use super::vector::cross_product;

/// Turn predicate for the monotone chain: signed area of the triangle
/// `(a, b, c)` via the edge cross product.
#[inline]
fn turn(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    cross_product(b - a, c - a)
}

/// Convex hull of a point set via Andrew's monotone chain.
///
/// Returns hull vertices in counterclockwise order with interior and
/// collinear points removed. Degenerate inputs (fewer than three distinct
/// points) return the distinct points in lexicographic order.
pub fn simple_convex_hull(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut pts: Vec<Vector2<f64>> = points.to_vec();
    pts.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
    });
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && turn(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && turn(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// Project a polygon onto axis `axis`, returning the (min, max) extent.
fn project(polygon: &[Vector2<f64>], axis: Vector2<f64>) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &p in polygon {
        let v = axis.dot(&p);
        lo = lo.min(v);
        hi = hi.max(v);
    }
    (lo, hi)
}

/// True if some edge normal of `polygon1` strictly separates the polygons.
fn edge_normals_separate(polygon1: &[Vector2<f64>], polygon2: &[Vector2<f64>]) -> bool {
    let m = polygon1.len();
    for k in 0..m {
        let p = polygon1[k];
        let q = polygon1[(k + 1) % m];
        let edge = q - p;
        let axis = Vector2::new(-edge.y, edge.x);
        let (min1, max1) = project(polygon1, axis);
        let (min2, max2) = project(polygon2, axis);
        if max1 < min2 || max2 < min1 {
            return true;
        }
    }
    false
}

/// Convex polygon overlap test via separating axes.
///
/// Polygons are vertex lists in counterclockwise order (as produced by
/// [`simple_convex_hull`]). Candidate separating axes are the edge normals
/// of both polygons; convexity makes that set exhaustive. Touching polygons
/// collide, since no strict gap exists between them.
pub fn polygon_collide(polygon1: &[Vector2<f64>], polygon2: &[Vector2<f64>]) -> bool {
    if polygon1.is_empty() || polygon2.is_empty() {
        return false;
    }
    !(edge_normals_separate(polygon1, polygon2) || edge_normals_separate(polygon2, polygon1))
}
