use std::collections::HashSet;

use crate::hyperbolic::{KleinCoords, Point, Segment};

use super::PointCache;

type Cell = (i64, i64);

fn approximate(epsilon: f64, x: f64, y: f64) -> Cell {
    #[allow(clippy::cast_possible_truncation)]
    let cell = ((x / epsilon).floor() as i64, (y / epsilon).floor() as i64);
    cell
}

fn neighbourhood((x, y): Cell) -> impl Iterator<Item = Cell> {
    (x - 1..=x + 1).flat_map(move |cx| (y - 1..=y + 1).map(move |cy| (cx, cy)))
}

/// Buckets Klein coordinates into square cells of side `epsilon`.
///
/// A query hits when any of the 3x3 cells around the queried cell is
/// occupied, so points up to about `2 * epsilon` apart per axis may match.
#[derive(Debug, Clone)]
pub struct GridPointCache {
    epsilon: f64,
    cells: HashSet<Cell>,
}

impl GridPointCache {
    #[must_use]
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            cells: HashSet::new(),
        }
    }

    fn cell_of(&self, point: &Point) -> Cell {
        approximate(self.epsilon, point.x(), point.y())
    }
}

impl PointCache for GridPointCache {
    fn store(&mut self, point: &Point) {
        self.cells.insert(self.cell_of(point));
    }

    fn query(&self, point: &Point) -> bool {
        neighbourhood(self.cell_of(point)).any(|cell| self.cells.contains(&cell))
    }

    fn len(&self) -> usize {
        self.cells.len()
    }
}

/// Grid bucketing for segments, keyed by the cells of both endpoints.
///
/// Segments are unordered geometrically, so a query matches stored
/// segments in either endpoint order.
#[derive(Debug, Clone)]
pub struct GridSegmentCache {
    epsilon: f64,
    cells: HashSet<(Cell, Cell)>,
}

impl GridSegmentCache {
    #[must_use]
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            cells: HashSet::new(),
        }
    }

    fn cells_of<P: KleinCoords>(&self, segment: &Segment<P>) -> (Cell, Cell) {
        let a = segment.p1().klein();
        let b = segment.p2().klein();
        (
            approximate(self.epsilon, a.x, a.y),
            approximate(self.epsilon, b.x, b.y),
        )
    }

    pub fn store<P: KleinCoords>(&mut self, segment: &Segment<P>) {
        self.cells.insert(self.cells_of(segment));
    }

    #[must_use]
    pub fn query<P: KleinCoords>(&self, segment: &Segment<P>) -> bool {
        let (a, b) = self.cells_of(segment);
        neighbourhood(a).any(|ca| {
            neighbourhood(b).any(|cb| self.cells.contains(&(ca, cb)) || self.cells.contains(&(cb, ca)))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y).unwrap()
    }

    #[test]
    fn nearby_query_hits() {
        let mut cache = GridPointCache::new(0.001);
        cache.store(&p(0.10000, 0.10000));
        assert!(cache.query(&p(0.10005, 0.09998)));
    }

    #[test]
    fn distant_query_misses() {
        let mut cache = GridPointCache::new(0.001);
        cache.store(&p(0.10000, 0.10000));
        assert!(!cache.query(&p(0.20, 0.20)));
        assert!(!cache.query(&p(0.1025, 0.1)));
    }

    #[test]
    fn neighbour_cell_counts_as_hit() {
        let mut cache = GridPointCache::new(0.001);
        cache.store(&p(0.0999, 0.0));
        // Next cell over along x.
        assert!(cache.query(&p(0.1001, 0.0)));
    }

    #[test]
    fn negative_coordinates_floor_correctly() {
        let mut cache = GridPointCache::new(0.01);
        cache.store(&p(-0.005, -0.005));
        assert!(cache.query(&p(-0.001, -0.009)));
        assert!(!cache.query(&p(0.025, 0.0)));
    }

    #[test]
    fn segments_match_in_either_order() {
        let mut cache = GridSegmentCache::new(1e-4);
        let a = p(0.3, 0.1);
        let b = p(-0.2, 0.4);
        cache.store(&a.segment_to(&b).unwrap());
        assert_eq!(cache.len(), 1);
        assert!(cache.query(&a.segment_to(&b).unwrap()));
        assert!(cache.query(&b.segment_to(&a).unwrap()));
        assert!(cache.query(&p(0.30005, 0.1).segment_to(&b).unwrap()));
        assert!(!cache.query(&a.segment_to(&p(0.0, 0.0)).unwrap()));
    }
}
