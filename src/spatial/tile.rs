//! Identified square tiles and their border fingerprints
//!
//! A border fingerprint packs the pixels of one edge into an integer,
//! first pixel most significant. Left and Right are scanned top to bottom,
//! Top and Bottom left to right. Two touching edges agree exactly when their
//! fingerprints are equal in the orientations they are placed in.

use std::fmt;

use crate::io::configuration::{MAX_TILE_SIDE, MIN_TILE_SIDE};
use crate::io::error::{Result, malformed_tile};
use crate::spatial::grid::Grid;
use crate::spatial::orientation::Orientation;

/// Stable tile identity shared by all orientations of a physical tile
pub type TileId = u64;

/// Numeric encoding of one tile edge
pub type Fingerprint = u64;

/// One of the four edges of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Column 0, scanned top to bottom
    Left,
    /// Row 0, scanned left to right
    Top,
    /// Last column, scanned top to bottom
    Right,
    /// Last row, scanned left to right
    Bottom,
}

impl Edge {
    /// All edges in fingerprint order
    pub const ALL: [Self; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    /// The edge a neighbour touches this one with
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// Fingerprints of all four edges in the tile's current orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Borders {
    /// Left edge fingerprint
    pub left: Fingerprint,
    /// Top edge fingerprint
    pub top: Fingerprint,
    /// Right edge fingerprint
    pub right: Fingerprint,
    /// Bottom edge fingerprint
    pub bottom: Fingerprint,
}

impl Borders {
    /// Compute the four fingerprints of a grid
    pub fn of(grid: &Grid) -> Self {
        let last_row = grid.rows().saturating_sub(1);
        let last_col = grid.cols().saturating_sub(1);
        Self {
            left: fingerprint(grid.column_bits(0)),
            top: fingerprint(grid.row_bits(0)),
            right: fingerprint(grid.column_bits(last_col)),
            bottom: fingerprint(grid.row_bits(last_row)),
        }
    }

    /// Fingerprint of one edge
    pub const fn get(&self, edge: Edge) -> Fingerprint {
        match edge {
            Edge::Left => self.left,
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
        }
    }
}

/// Shift-left-and-add accumulation of edge pixels
pub fn fingerprint(bits: impl IntoIterator<Item = bool>) -> Fingerprint {
    bits.into_iter()
        .fold(0, |code, bit| (code << 1) | Fingerprint::from(bit))
}

/// A square pixel tile in one specific orientation
///
/// Tiles are values: orienting a tile returns a new tile and leaves the
/// original untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    orientation: Orientation,
    grid: Grid,
    borders: Borders,
}

impl Tile {
    /// Create a tile in its parsed orientation
    ///
    /// # Errors
    ///
    /// Returns `MalformedTile` if the grid is not square or its side is
    /// outside `MIN_TILE_SIDE..=MAX_TILE_SIDE`
    pub fn new(id: TileId, grid: Grid) -> Result<Self> {
        if !grid.is_square() {
            return Err(malformed_tile(
                id,
                &format!("tile is {}x{}, expected a square", grid.rows(), grid.cols()),
            ));
        }
        if !(MIN_TILE_SIDE..=MAX_TILE_SIDE).contains(&grid.rows()) {
            return Err(malformed_tile(
                id,
                &format!(
                    "side {} is outside the supported range {MIN_TILE_SIDE}..={MAX_TILE_SIDE}",
                    grid.rows()
                ),
            ));
        }
        Ok(Self::oriented(id, Orientation::Identity, grid))
    }

    fn oriented(id: TileId, orientation: Orientation, grid: Grid) -> Self {
        let borders = Borders::of(&grid);
        Self {
            id,
            orientation,
            grid,
            borders,
        }
    }

    /// Stable identity of the physical tile
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Orientation relative to the tile as it was parsed
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Pixels in the current orientation
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Side length in pixels
    pub fn side(&self) -> usize {
        self.grid.rows()
    }

    /// All four border fingerprints
    pub const fn borders(&self) -> &Borders {
        &self.borders
    }

    /// Fingerprint of one edge
    pub const fn border(&self, edge: Edge) -> Fingerprint {
        self.borders.get(edge)
    }

    /// New tile with `orientation` applied on top of the current one
    #[must_use]
    pub fn with_orientation(&self, orientation: Orientation) -> Self {
        Self::oriented(
            self.id,
            self.orientation.then(orientation),
            orientation.apply(&self.grid),
        )
    }

    /// The eight orientation variants in enumeration order
    pub fn orientations(&self) -> Vec<Self> {
        crate::spatial::orientation::orientations(&self.grid)
            .into_iter()
            .map(|(orientation, grid)| {
                Self::oriented(self.id, self.orientation.then(orientation), grid)
            })
            .collect()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile {}:\n{}", self.id, self.grid)
    }
}
