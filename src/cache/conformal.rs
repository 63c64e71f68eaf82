use std::collections::HashSet;

use crate::hyperbolic::{KleinCoords, Point};

use super::PointCache;

type Cell = (i32, i64, i64);

/// Buckets Poincaré coordinates into square cells whose side follows the
/// conformal factor, so that a cell spans roughly the same hyperbolic
/// extent anywhere in the disk.
///
/// The disk is split into annular bands where `1 - |u|^2` lies in
/// `(2^-(b+1), 2^-b]`. Band `b` uses cells of side `epsilon * 2^-(b+1)`.
/// A query inspects the 3x3 neighbourhood in its own band and in both
/// adjacent bands. Points closer than `epsilon` always match. Points more
/// than about `25 * epsilon` apart never do.
#[derive(Debug, Clone)]
pub struct ConformalGridCache {
    epsilon: f64,
    cells: HashSet<Cell>,
}

impl ConformalGridCache {
    #[must_use]
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            cells: HashSet::new(),
        }
    }

    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[allow(clippy::cast_possible_truncation)]
    fn band(u: (f64, f64)) -> i32 {
        let factor = 1.0 - u.0 * u.0 - u.1 * u.1;
        (-factor.log2()).floor().max(0.0) as i32
    }

    #[allow(clippy::cast_possible_truncation)]
    fn cell(&self, u: (f64, f64), band: i32) -> Cell {
        let side = self.epsilon * (-f64::from(band) - 1.0).exp2();
        (
            band,
            (u.0 / side).floor() as i64,
            (u.1 / side).floor() as i64,
        )
    }

    fn coords(point: &Point) -> (f64, f64) {
        let u = point.poincare();
        (u.x, u.y)
    }
}

impl PointCache for ConformalGridCache {
    fn store(&mut self, point: &Point) {
        let u = Self::coords(point);
        let cell = self.cell(u, Self::band(u));
        self.cells.insert(cell);
    }

    fn query(&self, point: &Point) -> bool {
        let u = Self::coords(point);
        let home = Self::band(u);
        (home - 1..=home + 1).filter(|b| *b >= 0).any(|band| {
            let (_, cx, cy) = self.cell(u, band);
            (cx - 1..=cx + 1)
                .flat_map(|x| (cy - 1..=cy + 1).map(move |y| (band, x, y)))
                .any(|cell| self.cells.contains(&cell))
        })
    }

    fn len(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::hyperbolic::PointedVector;

    #[test]
    fn resolution_is_uniform_across_the_disk() {
        let epsilon = 1e-3;
        for (x, y, alpha) in [(0.0, 0.0, 0.3), (0.6, -0.2, 2.0), (0.0, 0.999_99, 0.1)] {
            let frame = PointedVector::new(x, y, alpha).unwrap();
            let mut cache = ConformalGridCache::new(epsilon);
            cache.store(frame.point());
            for step in [0.2, 0.5, 0.9] {
                let near = frame.advance(step * epsilon).unwrap();
                assert!(cache.query(near.point()), "miss at ({x}, {y}) step {step}");
            }
            let far = frame.advance(40.0 * epsilon).unwrap();
            assert!(!cache.query(far.point()), "false hit at ({x}, {y})");
        }
    }

    #[test]
    fn matches_across_band_edges() {
        // 1 - |u|^2 = 1/2 at the first band edge, |k| = 2|u| / (1 + |u|^2).
        let u = std::f64::consts::FRAC_1_SQRT_2;
        let k = 2.0 * u / (1.0 + u * u);
        let epsilon = 1e-3;
        for alpha in [0.0, std::f64::consts::PI] {
            let frame = PointedVector::new(k, 0.0, alpha).unwrap();
            let mut cache = ConformalGridCache::new(epsilon);
            cache.store(frame.advance(0.3 * epsilon).unwrap().point());
            assert!(cache.query(frame.advance(-0.3 * epsilon).unwrap().point()));
        }
    }

    #[test]
    fn bands_grow_toward_the_boundary() {
        assert_eq!(ConformalGridCache::band((0.0, 0.0)), 0);
        assert_eq!(ConformalGridCache::band((0.8, 0.0)), 1);
        assert_eq!(ConformalGridCache::band((0.999, 0.0)), 8);
    }
}
