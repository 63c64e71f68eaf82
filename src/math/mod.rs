pub mod root_find;

use std::f64::consts::TAU;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2x2 matrix, used for bilinear forms on tangent vectors.
pub type Matrix2 = nalgebra::Matrix2<f64>;

/// 3x3 matrix acting on homogeneous Klein coordinates.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Determinant of the 2x2 matrix `[[a, b], [c, d]]`.
#[must_use]
pub fn det2(a: f64, b: f64, c: f64, d: f64) -> f64 {
    a * d - b * c
}

/// Real roots of `a*x^2 + b*x + c = 0`, in increasing order when `a > 0`.
///
/// A zero discriminant yields a single (tangent) root.
#[must_use]
pub fn solve_poly2(a: f64, b: f64, c: f64) -> Vec<f64> {
    let delta = b * b - 4.0 * a * c;
    if delta < 0.0 {
        Vec::new()
    } else if delta == 0.0 {
        vec![-b / (2.0 * a)]
    } else {
        let sqrt_delta = delta.sqrt();
        vec![(-b - sqrt_delta) / (2.0 * a), (-b + sqrt_delta) / (2.0 * a)]
    }
}

/// Brings an angle into `[0, 2*pi)`.
#[must_use]
pub fn normalize_angle(alpha: f64) -> f64 {
    let normalized = alpha.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if normalized >= TAU {
        0.0
    } else {
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn det2_of_identity() {
        assert_abs_diff_eq!(det2(1.0, 0.0, 0.0, 1.0), 1.0);
        assert_abs_diff_eq!(det2(1.0, 2.0, 2.0, 4.0), 0.0);
    }

    #[test]
    fn quadratic_root_counts() {
        assert!(solve_poly2(1.0, 0.0, 1.0).is_empty());
        assert_eq!(solve_poly2(1.0, -2.0, 1.0), vec![1.0]);
        let roots = solve_poly2(1.0, 0.0, -4.0);
        assert_eq!(roots.len(), 2);
        assert_abs_diff_eq!(roots[0], -2.0);
        assert_abs_diff_eq!(roots[1], 2.0);
    }

    #[test]
    fn angles_wrap_into_one_turn() {
        assert_abs_diff_eq!(normalize_angle(-PI / 2.0), 1.5 * PI, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_angle(5.0 * PI), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_angle(0.25), 0.25);
        assert!(normalize_angle(-1e-18) < TAU);
    }
}
