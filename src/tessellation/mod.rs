//! Regular {p,q} tilings of the disk.

mod regular;

pub use regular::RegularTessellation;

use slotmap::SlotMap;

use crate::cache::CacheStrategy;
use crate::error::Result;
use crate::hyperbolic::{Point, PointedVector};
use crate::operations::draw_polygon;
use crate::render::{HyperbolicContext, Renderer};

/// Klein-coordinate cell size used by [`CacheStrategy::Grid`] when no
/// tolerance is given.
pub const DEFAULT_GRID_EPSILON: f64 = 1e-7;

/// Parameters controlling how far a tessellation is expanded.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Tolerance under which two tile centers are the same tile.
    ///
    /// `None` derives it from the tile: a sixteenth of the inradius (capped
    /// at `1/16`) for the hyperbolic caches, [`DEFAULT_GRID_EPSILON`] for
    /// [`CacheStrategy::Grid`]. An explicit value for a hyperbolic cache
    /// may not exceed the derived one.
    pub cache_epsilon: Option<f64>,
    /// A tile whose vertices all have squared Klein norm above
    /// `1 - far_field_epsilon` is kept but not expanded further.
    pub far_field_epsilon: f64,
    /// Upper bound on the number of tiles, if any.
    pub max_tiles: Option<usize>,
    /// Which visited-center cache to use.
    pub cache: CacheStrategy,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            cache_epsilon: None,
            far_field_epsilon: 1e-4,
            max_tiles: None,
            cache: CacheStrategy::default(),
        }
    }
}

slotmap::new_key_type! {
    /// Key of a tile in a [`Tiling`].
    pub struct TileId;
}

/// One tile of a tessellation.
#[derive(Debug, Clone)]
pub struct TileData {
    /// Center of the tile.
    pub center: Point,
    /// One frame per vertex, at the vertex and heading back along the side
    /// walked to reach it.
    pub frames: Vec<PointedVector>,
    /// The tile this one was expanded from; `None` for the seed tile.
    pub parent: Option<TileId>,
    /// Number of expansions between the seed tile and this one.
    pub depth: usize,
}

impl TileData {
    /// Vertex positions in walk order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point> {
        self.frames.iter().map(PointedVector::to_point).collect()
    }
}

/// The result of a tessellation: tiles in discovery order.
#[derive(Debug, Clone)]
pub struct Tiling {
    sides: usize,
    valence: usize,
    tiles: SlotMap<TileId, TileData>,
    truncated: bool,
}

impl Tiling {
    #[must_use]
    pub fn sides(&self) -> usize {
        self.sides
    }

    #[must_use]
    pub fn valence(&self) -> usize {
        self.valence
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether expansion stopped at [`TessellationParams::max_tiles`] with
    /// work still pending.
    #[must_use]
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&TileData> {
        self.tiles.get(id)
    }

    /// Iterates over tiles in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (TileId, &TileData)> {
        self.tiles.iter()
    }

    /// Vertex positions of every tile.
    #[must_use]
    pub fn polygons(&self) -> Vec<Vec<Point>> {
        self.tiles.values().map(TileData::vertices).collect()
    }

    /// Strokes the outline of every tile.
    ///
    /// # Errors
    ///
    /// Returns an error if the view cannot map a side.
    pub fn draw<R: Renderer + ?Sized>(&self, ctx: &mut HyperbolicContext<'_, R>) -> Result<()> {
        for tile in self.tiles.values() {
            draw_polygon(ctx, &tile.vertices())?;
        }
        Ok(())
    }
}
