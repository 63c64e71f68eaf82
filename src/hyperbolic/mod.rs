//! Disk-model entities of the hyperbolic plane.
//!
//! All coordinates are stored in the Klein model, where geodesics are
//! straight chords of the unit disk. Poincaré coordinates are derived on
//! demand for drawing.

mod ideal;
mod isometry;
mod line;
mod metric;
mod point;
mod pointed_vector;
mod segment;

pub use ideal::InfPoint;
pub use isometry::Isometry;
pub use line::Line;
pub use metric::MetricTensor;
pub use point::Point;
pub use pointed_vector::PointedVector;
pub use segment::Segment;

use crate::error::Result;
use crate::euclidean::EuPoint;

/// Anything with a position in (or on the boundary of) the disk.
pub trait KleinCoords {
    /// Position in the Klein model.
    fn klein(&self) -> EuPoint;

    /// Position in the Poincaré model.
    fn poincare(&self) -> EuPoint;
}

/// Entities that can be carried by an [`Isometry`].
///
/// The kind of the entity is preserved: an ideal point maps to an ideal
/// point, a frame maps to a frame.
pub trait Transform: Sized {
    /// Returns the image of `self` under `isometry`.
    ///
    /// # Errors
    ///
    /// Returns an error if the transform is singular at this entity or the
    /// image leaves the open disk through rounding.
    fn transform(&self, isometry: &Isometry) -> Result<Self>;
}
