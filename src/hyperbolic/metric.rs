use crate::math::{Matrix2, Vector2};

/// Riemannian metric tensor of the Klein model at one point.
///
/// The components are scaled by `1 - |p|^2` with respect to the true
/// Klein metric. The scaling is conformal, so angles between tangent
/// vectors and orthogonality are unaffected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricTensor {
    g: Matrix2,
}

impl MetricTensor {
    /// Metric at Klein coordinates `(x, y)`. Undefined on the boundary.
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        let denom = 1.0 - x * x - y * y;
        let g = Matrix2::new(1.0 - y * y, x * y, x * y, 1.0 - x * x) / denom;
        Self { g }
    }

    /// The symmetric component matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix2 {
        &self.g
    }

    /// Inner product of two tangent vectors.
    #[must_use]
    pub fn inner(&self, u: &Vector2, v: &Vector2) -> f64 {
        u.dot(&(self.g * v))
    }

    /// Length of a tangent vector.
    #[must_use]
    pub fn norm(&self, u: &Vector2) -> f64 {
        self.inner(u, u).sqrt()
    }

    /// Angle in `[0, pi]` between two tangent vectors.
    #[must_use]
    pub fn angle(&self, u: &Vector2, v: &Vector2) -> f64 {
        let cos = self.inner(u, v) / (self.norm(u) * self.norm(v));
        cos.clamp(-1.0, 1.0).acos()
    }

    /// Positively oriented orthonormal basis `(v1, v2)`.
    ///
    /// `v1` lies along the x axis; `v2` is the Gram-Schmidt completion of
    /// the y axis.
    #[must_use]
    pub fn orthonormal_basis(&self) -> (Vector2, Vector2) {
        let v1 = Vector2::x() / self.norm(&Vector2::x());
        let w = Vector2::y() - v1 * self.inner(&v1, &Vector2::y());
        (v1, w / self.norm(&w))
    }
}
