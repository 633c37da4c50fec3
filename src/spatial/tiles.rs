//! Tile sizes, placement offsets and the tile layout they induce on a grid
//!
//! A layout cuts the grid into `nx` by `ny` rectangles whose first boundary is
//! shifted left/up by the offset. Tiles at the grid edges are clipped. Tile
//! positions are visited row-major: tile rows top to bottom, tile columns
//! left to right within each row.

use std::ops::Range;

use crate::io::error::{Result, invalid_parameter};

/// Width and height of a candidate tile in grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileSize {
    /// Tile width (columns)
    pub nx: usize,
    /// Tile height (rows)
    pub ny: usize,
}

impl TileSize {
    /// Create a tile size, rejecting zero extents
    ///
    /// # Errors
    ///
    /// Returns an error if either extent is zero
    pub fn new(nx: usize, ny: usize) -> Result<Self> {
        if nx == 0 {
            return Err(invalid_parameter("nx", &nx, &"tile width must be positive"));
        }
        if ny == 0 {
            return Err(invalid_parameter("ny", &ny, &"tile height must be positive"));
        }
        Ok(Self { nx, ny })
    }

    /// Number of cells in an unclipped tile
    pub const fn area(&self) -> usize {
        self.nx * self.ny
    }

    /// Every distinct offset for this size in enumeration order
    ///
    /// `ioffset` is the outer loop and `joffset` the inner one, both ascending
    /// from `1 - n` to 0. Shifting by a whole tile repeats a tiling, so these
    /// `nx * ny` offsets cover each phase exactly once.
    pub fn offsets(&self) -> impl Iterator<Item = Offset> + use<> {
        let (nx, ny) = (self.nx as i64, self.ny as i64);
        (1 - nx..=0).flat_map(move |ioffset| {
            (1 - ny..=0).map(move |joffset| Offset { ioffset, joffset })
        })
    }
}

/// Shift of the first tile boundary relative to the grid origin
///
/// Both components lie in `[1 - n, 0]` for the matching tile extent; a
/// negative value clips the first tile column (or row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    /// Column shift of the first tile column
    pub ioffset: i64,
    /// Row shift of the first tile row
    pub joffset: i64,
}

impl Offset {
    /// Create an offset
    pub const fn new(ioffset: i64, joffset: i64) -> Self {
        Self { ioffset, joffset }
    }
}

/// A tile slot in the layout with its unclipped origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePosition {
    /// Tile row index
    pub jsub: usize,
    /// Tile column index
    pub isub: usize,
    /// First grid row of the unclipped tile (may be negative)
    pub jstart: i64,
    /// First grid column of the unclipped tile (may be negative)
    pub istart: i64,
}

/// Tiling of a `height` by `width` grid for one size and offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    size: TileSize,
    offset: Offset,
    height: usize,
    width: usize,
}

impl TileLayout {
    /// Create a layout, validating that the offset lies in `[1 - n, 0]`
    ///
    /// # Errors
    ///
    /// Returns an error if either offset component is positive or shifts the
    /// tiling by a whole tile or more
    pub fn new(size: TileSize, offset: Offset, height: usize, width: usize) -> Result<Self> {
        if offset.ioffset > 0 || offset.ioffset <= -(size.nx as i64) {
            return Err(invalid_parameter(
                "ioffset",
                &offset.ioffset,
                &format!("must lie in [{}, 0] for nx = {}", 1 - size.nx as i64, size.nx),
            ));
        }
        if offset.joffset > 0 || offset.joffset <= -(size.ny as i64) {
            return Err(invalid_parameter(
                "joffset",
                &offset.joffset,
                &format!("must lie in [{}, 0] for ny = {}", 1 - size.ny as i64, size.ny),
            ));
        }

        Ok(Self {
            size,
            offset,
            height,
            width,
        })
    }

    /// Tile size of this layout
    pub const fn size(&self) -> TileSize {
        self.size
    }

    /// Offset of this layout
    pub const fn offset(&self) -> Offset {
        self.offset
    }

    /// Grid rows covered
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Grid columns covered
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of tile rows, `ceil((height - joffset) / ny)`
    pub const fn tile_rows(&self) -> usize {
        (self.height + self.offset.joffset.unsigned_abs() as usize).div_ceil(self.size.ny)
    }

    /// Number of tile columns, `ceil((width - ioffset) / nx)`
    pub const fn tile_cols(&self) -> usize {
        (self.width + self.offset.ioffset.unsigned_abs() as usize).div_ceil(self.size.nx)
    }

    /// Unclipped origin of the tile at `(jsub, isub)`
    pub const fn position(&self, jsub: usize, isub: usize) -> TilePosition {
        TilePosition {
            jsub,
            isub,
            jstart: self.offset.joffset + (jsub * self.size.ny) as i64,
            istart: self.offset.ioffset + (isub * self.size.nx) as i64,
        }
    }

    /// Grid rows and columns covered by a tile after clipping
    pub fn cell_span(&self, position: &TilePosition) -> (Range<usize>, Range<usize>) {
        let clip = |start: i64, extent: usize, limit: usize| {
            let first = start.max(0) as usize;
            let end = ((start + extent as i64).max(0) as usize).min(limit);
            first.min(end)..end
        };

        (
            clip(position.jstart, self.size.ny, self.height),
            clip(position.istart, self.size.nx, self.width),
        )
    }

    /// All tile slots in row-major order
    pub fn positions(&self) -> impl Iterator<Item = TilePosition> + '_ {
        (0..self.tile_rows())
            .flat_map(move |jsub| (0..self.tile_cols()).map(move |isub| self.position(jsub, isub)))
    }
}
