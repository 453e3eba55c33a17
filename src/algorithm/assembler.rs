//! Corner, border and interior placement of tiles on a square grid
//!
//! Assembly is a local, greedy procedure that is correct only because a
//! well-posed puzzle admits exactly one tiling. Every "exactly one" the
//! procedure relies on is checked, so a malformed input fails loudly
//! instead of assembling something wrong:
//!
//! 1. The top-left corner is a tile-orientation whose top and left edges
//!    are both outer edges.
//! 2. The top row and left column are walked from the corner along right
//!    and bottom fingerprints, refusing tiles whose outward edge is inner.
//! 3. Every interior cell takes the single unused tile-orientation that
//!    matches both its left and upper neighbour.
//!
//! A physical tile, once placed, is excluded from every later candidate set
//! regardless of orientation.

use std::collections::{HashSet, VecDeque};

use ndarray::Array2;

use crate::algorithm::bitset::TileBitset;
use crate::algorithm::index::BorderIndex;
use crate::io::configuration::{CORNER_CANDIDATES, CORNER_TILES};
use crate::io::error::{
    Result, TilingError, computation_error, invalid_parameter, malformed_tile,
};
use crate::spatial::tile::{Edge, Fingerprint, Tile, TileId};

/// Solved arrangement of correctly oriented tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    cells: Array2<Tile>,
}

impl Placement {
    /// Arrange tiles row-major on a `side × side` grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the number of tiles is not `side²`
    pub fn from_tiles(side: usize, tiles: Vec<Tile>) -> Result<Self> {
        let count = tiles.len();
        Array2::from_shape_vec((side, side), tiles)
            .map(|cells| Self { cells })
            .map_err(|_shape_error| {
                invalid_parameter("side", &side, &format!("{count} tiles do not fill the grid"))
            })
    }

    /// Tiles along each side of the grid
    pub fn side(&self) -> usize {
        self.cells.nrows()
    }

    /// Tile placed at a cell
    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        self.cells.get((row, col))
    }

    /// Iterate placement rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Tile>> + '_ {
        self.cells.rows().into_iter().map(|row| row.into_iter().collect())
    }

    /// Placed tile ids, row-major
    pub fn ids(&self) -> Vec<Vec<TileId>> {
        self.rows()
            .map(|row| row.iter().map(|tile| tile.id()).collect())
            .collect()
    }

    /// Tiles at the top-left, top-right, bottom-left and bottom-right corners
    pub fn corners(&self) -> Vec<&Tile> {
        let last = self.side().saturating_sub(1);
        [(0, 0), (0, last), (last, 0), (last, last)]
            .into_iter()
            .filter_map(|(row, col)| self.get(row, col))
            .collect()
    }

    /// Product of the four corner ids
    ///
    /// A one-tile grid multiplies its single id four times.
    ///
    /// # Errors
    ///
    /// Returns a computation error if the product overflows 64 bits
    pub fn corner_product(&self) -> Result<u64> {
        self.corners()
            .iter()
            .try_fold(1_u64, |product, tile| product.checked_mul(tile.id()))
            .ok_or_else(|| computation_error("corner product", &"product overflows u64"))
    }

    /// Check that every pair of neighbours shares its border fingerprint
    pub fn seams_consistent(&self) -> bool {
        let horizontal = self.cells.rows().into_iter().all(|row| {
            row.iter()
                .zip(row.iter().skip(1))
                .all(|(left, right)| left.border(Edge::Right) == right.border(Edge::Left))
        });
        let vertical = self.cells.columns().into_iter().all(|col| {
            col.iter()
                .zip(col.iter().skip(1))
                .all(|(upper, lower)| upper.border(Edge::Bottom) == lower.border(Edge::Top))
        });
        horizontal && vertical
    }
}

/// Assemble a tile set into its unique placement
///
/// # Errors
///
/// Returns an assembly error if the tiles do not admit a unique tiling
pub fn assemble(tiles: &[Tile]) -> Result<Placement> {
    let index = BorderIndex::build(tiles);
    Assembler::new(&index)?.run()
}

/// Greedy placement over a prebuilt border index
pub struct Assembler<'a> {
    index: &'a BorderIndex,
    side: usize,
    used: TileBitset,
}

impl<'a> Assembler<'a> {
    /// Prepare an assembler for the tiles in `index`
    ///
    /// # Errors
    ///
    /// Returns `MalformedTile` if the tiles differ in side, and
    /// `InvalidTileCount` unless the tile count is a non-zero perfect square
    pub fn new(index: &'a BorderIndex) -> Result<Self> {
        if let Some(first) = index.closure().first()
            && let Some(odd) = index
                .closure()
                .iter()
                .find(|tile| tile.side() != first.side())
        {
            return Err(malformed_tile(
                odd.id(),
                &format!(
                    "side {} differs from the first tile's side {}",
                    odd.side(),
                    first.side()
                ),
            ));
        }

        let count = index.tile_count();
        let side = count.isqrt();
        if count == 0 || side * side != count {
            return Err(TilingError::InvalidTileCount { count });
        }
        Ok(Self {
            index,
            side,
            used: TileBitset::new(count),
        })
    }

    /// Place every tile
    ///
    /// # Errors
    ///
    /// Returns `AmbiguousCorner`, `AssemblyStuck` or `AssemblyConflict` when a
    /// uniqueness check fails
    pub fn run(mut self) -> Result<Placement> {
        let corner = self.find_corner()?;
        self.consume(corner);

        let top_row = self.walk(corner, Edge::Right, Edge::Top, "top row")?;
        top_row.iter().for_each(|&position| self.consume(position));
        let left_column = self.walk(corner, Edge::Bottom, Edge::Left, "left column")?;
        left_column.iter().for_each(|&position| self.consume(position));

        let mut cells = Array2::from_elem((self.side, self.side), corner);
        for (col, &position) in top_row.iter().enumerate() {
            if let Some(cell) = cells.get_mut((0, col)) {
                *cell = position;
            }
        }
        for (row, &position) in left_column.iter().enumerate() {
            if let Some(cell) = cells.get_mut((row, 0)) {
                *cell = position;
            }
        }

        for row in 1..self.side {
            for col in 1..self.side {
                let position = self.fill_cell(&cells, row, col)?;
                self.consume(position);
                if let Some(cell) = cells.get_mut((row, col)) {
                    *cell = position;
                }
            }
        }

        let tiles = cells
            .iter()
            .filter_map(|&position| self.index.tile(position).cloned())
            .collect();
        let placement = Placement::from_tiles(self.side, tiles)?;
        log::debug!("Assembled {0}x{0} placement", self.side);
        Ok(placement)
    }

    fn consume(&mut self, position: usize) {
        self.used.insert(BorderIndex::physical(position));
    }

    fn is_used(&self, position: usize) -> bool {
        self.used.contains(BorderIndex::physical(position))
    }

    fn tile(&self, position: usize) -> Result<&'a Tile> {
        self.index.tile(position).ok_or_else(|| {
            computation_error("assembly", &format!("closure position {position} out of range"))
        })
    }

    /// Locate the tile-orientation to place at the top-left cell
    ///
    /// A well-posed closure holds one candidate per orientation of the final
    /// image; the first in insertion order fixes which orientation is built.
    /// A lone tile is its own corner whatever its edges look like.
    fn find_corner(&self) -> Result<usize> {
        if self.side == 1 {
            return Ok(0);
        }

        let candidates: Vec<usize> = self
            .index
            .closure()
            .iter()
            .enumerate()
            .filter(|(_, tile)| {
                self.index.is_outer(tile, Edge::Top) && self.index.is_outer(tile, Edge::Left)
            })
            .map(|(position, _)| position)
            .collect();

        let distinct_tiles = candidates
            .iter()
            .map(|&position| BorderIndex::physical(position))
            .collect::<HashSet<_>>()
            .len();
        let expected_tiles = CORNER_TILES.min(self.index.tile_count());

        log::debug!(
            "Corner search found {} candidates over {distinct_tiles} tiles",
            candidates.len()
        );

        match candidates.first() {
            Some(&corner)
                if candidates.len() == CORNER_CANDIDATES && distinct_tiles == expected_tiles =>
            {
                Ok(corner)
            }
            _ => Err(TilingError::AmbiguousCorner {
                candidates: candidates.len(),
                distinct_tiles,
            }),
        }
    }

    /// Walk from `start` across `along` edges until the walk spans the grid
    ///
    /// Candidates must expose an outer `boundary` edge and must not reuse a
    /// physical tile. The walk is a breadth-first worklist of
    /// `(fingerprint, path)` pairs; exactly one complete path must exist.
    fn walk(
        &self,
        start: usize,
        along: Edge,
        boundary: Edge,
        walk: &'static str,
    ) -> Result<Vec<usize>> {
        let mut frontier: VecDeque<(Fingerprint, Vec<usize>)> = VecDeque::new();
        frontier.push_back((self.tile(start)?.border(along), vec![start]));
        let mut complete = Vec::new();

        while let Some((fingerprint, path)) = frontier.pop_front() {
            if path.len() == self.side {
                complete.push(path);
                continue;
            }

            for &position in self.index.positions(along.opposite(), fingerprint) {
                let candidate = self.tile(position)?;
                let physical = BorderIndex::physical(position);
                let revisits = path
                    .iter()
                    .any(|&placed| BorderIndex::physical(placed) == physical);
                if revisits || self.is_used(position) || !self.index.is_outer(candidate, boundary)
                {
                    continue;
                }

                let mut extended = path.clone();
                extended.push(position);
                frontier.push_back((candidate.border(along), extended));
            }
        }

        if complete.len() == 1
            && let Some(path) = complete.pop()
        {
            return Ok(path);
        }
        Err(TilingError::AssemblyStuck {
            walk,
            complete_paths: complete.len(),
        })
    }

    /// The single unused tile-orientation fitting both placed neighbours
    fn fill_cell(&self, cells: &Array2<usize>, row: usize, col: usize) -> Result<usize> {
        let neighbour = |row: usize, col: usize| {
            cells
                .get((row, col))
                .copied()
                .ok_or_else(|| computation_error("assembly", &format!("cell ({row}, {col}) unset")))
                .and_then(|position| self.tile(position))
        };
        let left = neighbour(row, col - 1)?;
        let upper = neighbour(row - 1, col)?;

        let fitting = self
            .index
            .candidates(Edge::Left, left.border(Edge::Right))
            .intersection(&self.index.candidates(Edge::Top, upper.border(Edge::Bottom)));
        let unused: Vec<usize> = fitting
            .iter()
            .filter(|&position| !self.is_used(position))
            .collect();

        match unused.as_slice() {
            [position] => Ok(*position),
            _ => Err(TilingError::AssemblyConflict {
                row,
                col,
                candidates: unused.len(),
            }),
        }
    }
}
