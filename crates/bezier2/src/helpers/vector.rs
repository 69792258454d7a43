//! Cross product and approximate vector equality.

use nalgebra::Vector2;

/// Relative tolerance used by [`vector_close`].
///
/// 2⁻⁴⁰ leaves roughly twelve bits of slack over f64 machine epsilon, enough
/// to absorb the rounding of a short chain of arithmetic without accepting
/// genuinely distinct vectors.
pub const VECTOR_CLOSE_EPS: f64 = 9.094_947_017_729_282e-13; // 0.5^40

/// Signed 2D cross product `vec0.x * vec1.y - vec0.y * vec1.x`.
///
/// Equals the signed area of the parallelogram spanned by the two vectors:
/// positive for vec0→vec1 counterclockwise, negative otherwise, zero for
/// parallel vectors.
#[inline]
pub fn cross_product(vec0: Vector2<f64>, vec1: Vector2<f64>) -> f64 {
    vec0.x * vec1.y - vec0.y * vec1.x
}

/// Approximate vector equality with relative tolerance `eps`.
///
/// `‖v1 - v2‖ <= eps * min(‖v1‖, ‖v2‖)`; when either vector is exactly zero
/// the other's norm is compared against `eps` absolutely, so the predicate
/// stays meaningful near the origin.
pub fn vector_close_eps(vec1: Vector2<f64>, vec2: Vector2<f64>, eps: f64) -> bool {
    let size1 = vec1.norm();
    let size2 = vec2.norm();
    if size1 == 0.0 {
        size2 <= eps
    } else if size2 == 0.0 {
        size1 <= eps
    } else {
        (vec1 - vec2).norm() <= eps * size1.min(size2)
    }
}

/// Shorthand for [`vector_close_eps`] with the default [`VECTOR_CLOSE_EPS`].
#[inline]
pub fn vector_close(vec1: Vector2<f64>, vec2: Vector2<f64>) -> bool {
    vector_close_eps(vec1, vec2, VECTOR_CLOSE_EPS)
}
