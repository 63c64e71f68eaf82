/// Search interval and stopping rule for [`brent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchBracket {
    /// Lower end of the interval.
    pub min: f64,
    /// Upper end of the interval.
    pub max: f64,
    /// Absolute tolerance on the root.
    pub tolerance: f64,
    /// Iteration cap before giving up.
    pub max_iterations: usize,
}

impl Default for SearchBracket {
    fn default() -> Self {
        Self {
            min: 1e-8,
            max: 10.0,
            tolerance: 1e-12,
            max_iterations: 100,
        }
    }
}

/// Finds a root of `f` inside `bracket` with Brent's method.
///
/// Returns `None` when `f` has the same sign at both ends, when an
/// evaluation is not finite, or when the iteration cap is hit.
#[allow(clippy::many_single_char_names, clippy::float_cmp)]
pub fn brent<F>(mut f: F, bracket: &SearchBracket) -> Option<f64>
where
    F: FnMut(f64) -> f64,
{
    let mut a = bracket.min;
    let mut b = bracket.max;
    let mut fa = f(a);
    let mut fb = f(b);
    if !fa.is_finite() || !fb.is_finite() {
        return None;
    }
    if fa == 0.0 {
        return Some(a);
    }
    if fb == 0.0 {
        return Some(b);
    }
    if fa.signum() == fb.signum() {
        return None;
    }

    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    for _ in 0..bracket.max_iterations {
        if fb.signum() == fc.signum() {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol = 2.0 * f64::EPSILON * b.abs() + 0.5 * bracket.tolerance;
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol || fb == 0.0 {
            return Some(b);
        }

        if e.abs() >= tol && fa.abs() > fb.abs() {
            // Inverse quadratic interpolation, or secant when only two points differ.
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                (2.0 * xm * s, 1.0 - s)
            } else {
                let qa = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * xm * qa * (qa - r) - (b - a) * (r - 1.0)),
                    (qa - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();
            let bound = (3.0 * xm * q - (tol * q).abs()).min((e * q).abs());
            if 2.0 * p < bound {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;
        if d.abs() > tol {
            b += d;
        } else {
            b += tol.copysign(xm);
        }
        fb = f(b);
        if !fb.is_finite() {
            return None;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn bracket(min: f64, max: f64) -> SearchBracket {
        SearchBracket {
            min,
            max,
            ..SearchBracket::default()
        }
    }

    #[test]
    fn finds_square_root() {
        let root = brent(|x| x * x - 2.0, &bracket(0.0, 2.0));
        assert_abs_diff_eq!(root.unwrap_or(f64::NAN), 2.0_f64.sqrt(), epsilon = 1e-11);
    }

    #[test]
    fn finds_root_of_decreasing_function() {
        let root = brent(|x| (-x).exp() - 0.5, &bracket(0.0, 5.0));
        assert_abs_diff_eq!(root.unwrap_or(f64::NAN), 2.0_f64.ln(), epsilon = 1e-11);
    }

    #[test]
    fn unbracketed_root_is_reported() {
        assert!(brent(|x| x * x + 1.0, &bracket(-1.0, 1.0)).is_none());
    }

    #[test]
    fn non_finite_evaluation_is_reported() {
        assert!(brent(|_| f64::NAN, &bracket(0.0, 1.0)).is_none());
    }

    #[test]
    fn endpoint_root_is_returned_directly() {
        assert_eq!(brent(|x| x - 1.0, &bracket(1.0, 3.0)), Some(1.0));
    }
}
