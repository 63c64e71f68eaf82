//! Euclidean analytic geometry in the plane of the disk models.

mod circle;
mod line;
mod point;

pub use circle::EuCircle;
pub use line::EuLine;
pub use point::EuPoint;

/// Cross-ratio `|ac| |bd| / (|ad| |bc|)` of four points.
///
/// Used as the basis of the Klein-model distance.
#[must_use]
pub fn crossratio(a: &EuPoint, b: &EuPoint, c: &EuPoint, d: &EuPoint) -> f64 {
    ((a.sqdistance(c) * b.sqdistance(d)) / (a.sqdistance(d) * b.sqdistance(c))).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn crossratio_of_collinear_points() {
        let a = EuPoint::new(-1.0, 0.0);
        let b = EuPoint::new(1.0, 0.0);
        let c = EuPoint::new(0.5, 0.0);
        let d = EuPoint::new(0.0, 0.0);
        // |ac| = 1.5, |bd| = 1, |ad| = 1, |bc| = 0.5
        assert_relative_eq!(crossratio(&a, &b, &c, &d), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn crossratio_is_one_when_points_coincide() {
        let a = EuPoint::new(-1.0, 0.0);
        let b = EuPoint::new(1.0, 0.0);
        let c = EuPoint::new(0.3, 0.0);
        assert_relative_eq!(crossratio(&a, &b, &c, &c), 1.0);
    }
}
