//! Synthetic puzzle generation: cut a picture into shuffled, oriented tiles
//!
//! Tiles are laid out on a lattice whose border lines are shared between
//! neighbours, so touching edges agree pixel for pixel. Every border line is
//! drawn so that it is not a palindrome and no other border shares its
//! pattern, forwards or backwards. That makes the generated set well-posed:
//! it assembles into exactly one image up to the image's own orientation.

use std::collections::HashSet;

use ndarray::{Array2, s};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::matcher::Mask;
use crate::io::configuration::{
    MAX_BORDER_ATTEMPTS, MAX_GENERATED_ID, MAX_TILE_SIDE, MIN_GENERATED_ID, MIN_TILE_SIDE,
    PATTERN_SPACING,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::Grid;
use crate::spatial::orientation::Orientation;
use crate::spatial::tile::{Fingerprint, Tile, TileId, fingerprint};

/// Seeded generator of well-posed tile sets
pub struct PuzzleCutter {
    tile_side: usize,
    rng: StdRng,
}

impl PuzzleCutter {
    /// Create a cutter producing tiles of `tile_side` pixels
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the side is outside the supported tile range
    pub fn new(tile_side: usize, seed: u64) -> Result<Self> {
        if !(MIN_TILE_SIDE..=MAX_TILE_SIDE).contains(&tile_side) {
            return Err(invalid_parameter(
                "tile_side",
                &tile_side,
                &format!("must be within {MIN_TILE_SIDE}..={MAX_TILE_SIDE}"),
            ));
        }
        Ok(Self {
            tile_side,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Interior pixels each tile contributes along one axis
    pub const fn interior_side(&self) -> usize {
        self.tile_side - 2
    }

    /// Random square picture with `copies` of `mask` stamped upright
    ///
    /// Background pixels are set with probability `density`. Stamped copies
    /// keep `PATTERN_SPACING` empty cells between their bounding boxes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the density is not a probability or the
    /// copies do not fit
    pub fn picture(&mut self, side: usize, density: f64, mask: &Mask, copies: usize) -> Result<Grid> {
        if !(0.0..=1.0).contains(&density) {
            return Err(invalid_parameter("density", &density, &"must be within 0..=1"));
        }
        let mut pixels = Array2::from_shape_simple_fn((side, side), || self.rng.random_bool(density));
        if copies == 0 {
            return Ok(Grid::from_array(pixels));
        }
        if mask.rows() > side || mask.cols() > side {
            return Err(invalid_parameter("side", &side, &"picture is smaller than the mask"));
        }

        let mut boxes: Vec<(usize, usize)> = Vec::with_capacity(copies);
        let mut attempts = 0;
        while boxes.len() < copies {
            attempts += 1;
            if attempts > copies * MAX_BORDER_ATTEMPTS {
                return Err(invalid_parameter(
                    "copies",
                    &copies,
                    &format!("only {} fit in a {side}x{side} picture", boxes.len()),
                ));
            }
            let row = self.rng.random_range(0..=side - mask.rows());
            let col = self.rng.random_range(0..=side - mask.cols());
            let clear = boxes.iter().all(|&(other_row, other_col)| {
                row + mask.rows() + PATTERN_SPACING <= other_row
                    || other_row + mask.rows() + PATTERN_SPACING <= row
                    || col + mask.cols() + PATTERN_SPACING <= other_col
                    || other_col + mask.cols() + PATTERN_SPACING <= col
            });
            if clear {
                for &(dr, dc) in mask.offsets() {
                    if let Some(pixel) = pixels.get_mut((row + dr, col + dc)) {
                        *pixel = true;
                    }
                }
                boxes.push((row, col));
            }
        }
        Ok(Grid::from_array(pixels))
    }

    /// Cut a square picture into a shuffled set of randomly oriented tiles
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the picture is not square, its side is
    /// not a positive multiple of the tile interior, the grid needs more ids
    /// than the id range offers, or unique borders cannot be drawn
    pub fn cut(&mut self, picture: &Grid) -> Result<Vec<Tile>> {
        let interior = self.interior_side();
        let side = picture.rows();
        if !picture.is_square() || side == 0 || side % interior != 0 {
            return Err(invalid_parameter(
                "picture",
                &format!("{}x{}", picture.rows(), picture.cols()),
                &format!("must be square with a side divisible by {interior}"),
            ));
        }
        let grid_side = side / interior;
        let tile_count = grid_side * grid_side;
        let id_span = usize::try_from(MAX_GENERATED_ID - MIN_GENERATED_ID + 1).unwrap_or(usize::MAX);
        if tile_count > id_span {
            return Err(invalid_parameter(
                "picture",
                &side,
                &format!("{tile_count} tiles exceed the {id_span} available ids"),
            ));
        }

        let lattice = self.lattice(picture, grid_side)?;
        let ids: Vec<TileId> = rand::seq::index::sample(&mut self.rng, id_span, tile_count)
            .into_iter()
            .map(|offset| MIN_GENERATED_ID + offset as u64)
            .collect();

        let step = self.tile_side - 1;
        let mut tiles = Vec::with_capacity(tile_count);
        for (cell, &id) in ids.iter().enumerate() {
            let (row, col) = (cell / grid_side, cell % grid_side);
            let pixels = lattice
                .slice(s![
                    row * step..row * step + self.tile_side,
                    col * step..col * step + self.tile_side
                ])
                .to_owned();
            let orientation = Orientation::ALL
                .get(self.rng.random_range(0..Orientation::ALL.len()))
                .copied()
                .unwrap_or(Orientation::Identity);
            tiles.push(Tile::new(id, orientation.apply(&Grid::from_array(pixels)))?);
        }
        tiles.shuffle(&mut self.rng);

        log::debug!(
            "Cut {side}x{side} picture into {tile_count} tiles of side {}",
            self.tile_side
        );
        Ok(tiles)
    }

    /// Shared-border lattice holding the picture in the tile interiors
    fn lattice(&mut self, picture: &Grid, grid_side: usize) -> Result<Array2<bool>> {
        let step = self.tile_side - 1;
        let interior = self.interior_side();
        let size = grid_side * step + 1;
        let mut lattice = Array2::from_elem((size, size), false);

        for ((row, col), pixel) in lattice.indexed_iter_mut() {
            let (line_row, line_col) = (row % step == 0, col % step == 0);
            if line_row && line_col {
                *pixel = self.rng.random::<bool>();
            } else if !line_row && !line_col {
                let source_row = (row / step) * interior + row % step - 1;
                let source_col = (col / step) * interior + col % step - 1;
                *pixel = picture.get(source_row, source_col).unwrap_or(false);
            }
        }

        let mut used: HashSet<Fingerprint> = HashSet::new();
        for line in 0..=grid_side {
            for segment in 0..grid_side {
                let horizontal: Vec<(usize, usize)> = (0..self.tile_side)
                    .map(|t| (line * step, segment * step + t))
                    .collect();
                let vertical: Vec<(usize, usize)> = (0..self.tile_side)
                    .map(|t| (segment * step + t, line * step))
                    .collect();
                self.draw_border(&mut lattice, &horizontal, &mut used)?;
                self.draw_border(&mut lattice, &vertical, &mut used)?;
            }
        }
        Ok(lattice)
    }

    /// Fill the inner pixels of one border line with a fresh unique pattern
    ///
    /// The end pixels are lattice corners shared with other borders and stay fixed.
    fn draw_border(
        &mut self,
        lattice: &mut Array2<bool>,
        cells: &[(usize, usize)],
        used: &mut HashSet<Fingerprint>,
    ) -> Result<()> {
        let first = cells.first().and_then(|&cell| lattice.get(cell).copied());
        let last = cells.last().and_then(|&cell| lattice.get(cell).copied());

        for _ in 0..MAX_BORDER_ATTEMPTS {
            let mut bits = Vec::with_capacity(cells.len());
            bits.push(first.unwrap_or(false));
            bits.extend((2..cells.len()).map(|_| self.rng.random::<bool>()));
            bits.push(last.unwrap_or(false));

            let forward = fingerprint(bits.iter().copied());
            let backward = fingerprint(bits.iter().rev().copied());
            let class = forward.min(backward);
            if forward == backward || used.contains(&class) {
                continue;
            }

            used.insert(class);
            for (&cell, &bit) in cells.iter().zip(&bits) {
                if let Some(pixel) = lattice.get_mut(cell) {
                    *pixel = bit;
                }
            }
            return Ok(());
        }

        Err(invalid_parameter(
            "tile_side",
            &self.tile_side,
            &"too small to give every border a unique pattern",
        ))
    }
}
