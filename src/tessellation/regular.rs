use std::f64::consts::TAU;

use slotmap::SlotMap;
use tracing::{debug, info, trace, warn};

use crate::error::{ConstructionError, GeometryError, HyperbolicError, Result};
use crate::hyperbolic::{Isometry, Point, PointedVector};
use crate::operations::{inradius_from_radius, PolygonBuilder};

use super::{TessellationParams, TileData, TileId, Tiling, DEFAULT_GRID_EPSILON};

/// The tile centered at the origin, shared by every tile of a tiling.
struct Prototile {
    /// Vertex frames in walk order.
    frames: Vec<PointedVector>,
    /// For each side, the isometry carrying the prototile onto its
    /// neighbour across that side.
    neighbours: Vec<Isometry>,
    inradius: f64,
}

impl Prototile {
    /// Walks the tile from `PointedVector::origin()` and recenters it.
    ///
    /// Returns the prototile and the placement of the walked tile.
    fn new(builder: &mut PolygonBuilder, sides: usize, angle: f64) -> Result<(Self, Isometry)> {
        let radius = builder.radius_from_angle(sides, angle)?;
        let walked = builder.build_with_angle(sides, angle, &PointedVector::origin())?;
        let to_center = PointedVector::origin().turn(0.5 * angle).advance(radius)?.isometry()?;
        let from_center = to_center.inverse()?;

        let frames = walked
            .iter()
            .map(|f| from_center.map(f))
            .collect::<Result<Vec<_>>>()?;
        let neighbours = walked
            .iter()
            .map(|f| Ok(from_center.compose(&f.isometry()?).compose(&to_center)))
            .collect::<Result<Vec<_>>>()?;
        let prototile = Self {
            frames,
            neighbours,
            inradius: inradius_from_radius(sides, radius)?,
        };
        Ok((prototile, to_center))
    }
}

/// Maps tiles that leave the disk in floating point to `None`.
fn representable<T>(result: Result<T>, depth: usize) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(HyperbolicError::Geometry(
            err @ (GeometryError::OutsideDisk { .. } | GeometryError::SingularTransform),
        )) => {
            debug!(%err, depth, "dropping tile beyond floating-point reach");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Flood-fills the disk with regular `sides`-gons, `valence` around each
/// vertex, starting from the tile walked from `seed`.
///
/// Every tile is the image of one prototile under a placement isometry.
/// A neighbour's placement is its parent's composed with a fixed
/// side-crossing isometry, re-projected onto the isometry group at each
/// step, so positions do not drift with depth.
///
/// Expansion is depth first: the children of a tile are the neighbours
/// across each of its sides, visited in walk order.
pub struct RegularTessellation {
    sides: usize,
    valence: usize,
    seed: PointedVector,
    params: TessellationParams,
}

impl RegularTessellation {
    /// Creates a new `RegularTessellation` operation.
    #[must_use]
    pub fn new(sides: usize, valence: usize, seed: PointedVector, params: TessellationParams) -> Self {
        Self {
            sides,
            valence,
            seed,
            params,
        }
    }

    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn validate(&self) -> Result<()> {
        if self.sides < 3 {
            return Err(ConstructionError::InvalidSideCount(self.sides).into());
        }
        // {p,q} is hyperbolic iff (p - 2)(q - 2) > 4.
        if self.valence < 3 || (self.sides - 2) * (self.valence - 2) <= 4 {
            return Err(ConstructionError::InvalidParameters(format!(
                "{{{},{}}} is not a hyperbolic tessellation",
                self.sides, self.valence
            ))
            .into());
        }
        let far_field_epsilon = self.params.far_field_epsilon;
        if !(far_field_epsilon > 0.0 && far_field_epsilon < 1.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "far_field_epsilon",
                value: far_field_epsilon,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        Ok(())
    }

    /// Tolerance for the visited-center cache.
    ///
    /// Hyperbolic tolerances stay well below the `2 * inradius` spacing of
    /// distinct centers.
    fn cache_epsilon(&self, inradius: f64) -> Result<f64> {
        let hyperbolic = self.params.cache.is_hyperbolic();
        let max = if hyperbolic { inradius.min(1.0) / 16.0 } else { 1.0 };
        match self.params.cache_epsilon {
            None if hyperbolic => Ok(max),
            None => Ok(DEFAULT_GRID_EPSILON),
            Some(epsilon) if epsilon > 0.0 && if hyperbolic { epsilon <= max } else { epsilon < max } => {
                Ok(epsilon)
            }
            Some(epsilon) => Err(GeometryError::ParameterOutOfRange {
                parameter: "cache_epsilon",
                value: epsilon,
                min: 0.0,
                max,
            }
            .into()),
        }
    }

    /// Executes the tessellation.
    ///
    /// # Errors
    ///
    /// Returns an error for non-hyperbolic `{sides, valence}` pairs,
    /// invalid epsilons, or if the prototile cannot be built.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Tiling> {
        self.validate()?;
        let angle = TAU / self.valence as f64;
        let mut builder = PolygonBuilder::new();
        let (prototile, walked) = Prototile::new(&mut builder, self.sides, angle)?;
        let epsilon = self.cache_epsilon(prototile.inradius)?;
        let mut cache = self.params.cache.build(epsilon);
        let mut tiles: SlotMap<TileId, TileData> = SlotMap::with_key();
        let mut truncated = false;

        debug!(
            sides = self.sides,
            valence = self.valence,
            inradius = prototile.inradius,
            epsilon,
            "starting tessellation"
        );

        let seed = self.seed.isometry()?.compose(&walked);
        let mut pending = vec![(seed, None, 0_usize)];
        while let Some((placement, parent, depth)) = pending.pop() {
            let Some(placement) = representable(placement.rectified(), depth)? else {
                continue;
            };
            let Some(center) = representable(placement.map(&Point::origin()), depth)? else {
                continue;
            };
            if cache.query(&center) {
                continue;
            }
            if self.params.max_tiles.is_some_and(|max| tiles.len() >= max) {
                warn!(max_tiles = tiles.len(), pending = pending.len() + 1, "tessellation truncated");
                truncated = true;
                break;
            }
            cache.store(&center);

            let frames = prototile
                .frames
                .iter()
                .map(|f| placement.map(f))
                .collect::<Result<Vec<_>>>();
            let Some(frames) = representable(frames, depth)? else {
                continue;
            };
            let far_field = frames
                .iter()
                .all(|f| f.point().to_eupoint().sqnorm() > 1.0 - self.params.far_field_epsilon);
            trace!(x = center.x(), y = center.y(), depth, far_field, "tile");

            let id = tiles.insert(TileData {
                center,
                frames,
                parent,
                depth,
            });
            if !far_field {
                // Reversed so the first side's neighbour is expanded first.
                pending.extend(
                    prototile
                        .neighbours
                        .iter()
                        .rev()
                        .map(|step| (placement.compose(step), Some(id), depth + 1)),
                );
            }
        }

        info!(
            sides = self.sides,
            valence = self.valence,
            tiles = tiles.len(),
            truncated,
            "tessellation finished"
        );

        Ok(Tiling {
            sides: self.sides,
            valence: self.valence,
            tiles,
            truncated,
        })
    }
}
