//! Sliding-window pattern search over every orientation of an image
//!
//! A mask's set cells must land on set image pixels; unset mask cells are
//! don't-care. The mask is slid over every anchor at which it fits
//! entirely inside the image.

use ndarray::Array2;

use crate::io::configuration::SEA_MONSTER;
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::spatial::grid::{Grid, SET_PIXEL};
use crate::spatial::orientation::{Orientation, orientations};

/// Immutable search pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    grid: Grid,
    offsets: Vec<(usize, usize)>,
}

impl Mask {
    /// Wrap a grid whose set cells form the pattern
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the grid has no set cells
    pub fn new(grid: Grid) -> Result<Self> {
        let offsets = grid.set_positions();
        if offsets.is_empty() {
            return Err(invalid_parameter(
                "mask",
                &format!("{}x{}", grid.rows(), grid.cols()),
                &"mask has no set cells",
            ));
        }
        Ok(Self { grid, offsets })
    }

    /// Build a mask from text rows: `#` is a set cell, anything else don't-care
    ///
    /// Ragged rows are padded with don't-care cells.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if no row contains a `#`
    pub fn from_text<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        Self::new(text_grid(lines))
    }

    /// The sea-monster pattern (3×20, 15 set cells)
    pub fn sea_monster() -> Self {
        let grid = text_grid(&SEA_MONSTER);
        let offsets = grid.set_positions();
        Self { grid, offsets }
    }

    /// Pattern cells as a grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mask rows
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Mask columns
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Number of set cells
    pub fn set_count(&self) -> usize {
        self.offsets.len()
    }

    /// Offsets of set cells relative to the anchor
    pub fn offsets(&self) -> &[(usize, usize)] {
        &self.offsets
    }

    /// Whether the mask matches `image` anchored at `(row, col)`
    pub fn matches_at(&self, image: &Grid, row: usize, col: usize) -> bool {
        self.offsets
            .iter()
            .all(|&(dr, dc)| image.get(row + dr, col + dc) == Some(true))
    }
}

fn text_grid<S: AsRef<str>>(lines: &[S]) -> Grid {
    let width = lines
        .iter()
        .map(|line| line.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    Grid::from_array(Array2::from_shape_fn((lines.len(), width), |(row, col)| {
        lines
            .get(row)
            .and_then(|line| line.as_ref().chars().nth(col))
            .is_some_and(|ch| ch == SET_PIXEL)
    }))
}

/// Anchors at which `mask` matches `image` in its current orientation
pub fn find_anchors(image: &Grid, mask: &Mask) -> Vec<(usize, usize)> {
    if mask.rows() > image.rows() || mask.cols() > image.cols() {
        return Vec::new();
    }
    let mut anchors = Vec::new();
    for row in 0..=image.rows() - mask.rows() {
        for col in 0..=image.cols() - mask.cols() {
            if mask.matches_at(image, row, col) {
                anchors.push((row, col));
            }
        }
    }
    anchors
}

/// Outcome of a pattern search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    /// Orientation of the image in which the pattern was found
    pub orientation: Orientation,
    /// The image in that orientation
    pub image: Grid,
    /// Top-left anchor of every match
    pub anchors: Vec<(usize, usize)>,
    /// Number of matches
    pub occurrences: usize,
    /// Set pixels in the image
    pub total_set: usize,
    /// Set pixels not covered by any match
    pub residual: usize,
}

impl MatchReport {
    /// Pixels covered by at least one match, in report orientation
    pub fn coverage(&self, mask: &Mask) -> Grid {
        let mut covered = Array2::from_elem((self.image.rows(), self.image.cols()), false);
        for &(row, col) in &self.anchors {
            for &(dr, dc) in mask.offsets() {
                if let Some(pixel) = covered.get_mut((row + dr, col + dc)) {
                    *pixel = true;
                }
            }
        }
        Grid::from_array(covered)
    }
}

/// Search every orientation of `image` for `mask`
///
/// The orientation with the most matches is reported; ties keep the
/// earlier orientation. The residual counts set pixels outside every match,
/// which equals `total_set - occurrences * set_count` when matches do not
/// overlap. Overlapping matches share pixels, so for them
/// `occurrences * set_count` may exceed `total_set` while the residual
/// stays within `0..=total_set`.
///
/// # Errors
///
/// Returns `PatternNotFound` if no orientation contains the mask
pub fn find_pattern(image: &Grid, mask: &Mask) -> Result<MatchReport> {
    let mut best: Option<(Orientation, Grid, Vec<(usize, usize)>)> = None;
    for (orientation, oriented) in orientations(image) {
        let anchors = find_anchors(&oriented, mask);
        log::trace!("{} matches in orientation {orientation}", anchors.len());
        let improves = best
            .as_ref()
            .is_none_or(|(_, _, found)| anchors.len() > found.len());
        if !anchors.is_empty() && improves {
            best = Some((orientation, oriented, anchors));
        }
    }

    let (orientation, oriented, anchors) = best.ok_or(TilingError::PatternNotFound {
        mask_dimensions: (mask.rows(), mask.cols()),
        image_dimensions: (image.rows(), image.cols()),
    })?;

    let mut report = MatchReport {
        orientation,
        occurrences: anchors.len(),
        total_set: oriented.count_set(),
        image: oriented,
        anchors,
        residual: 0,
    };
    report.residual = report
        .total_set
        .saturating_sub(report.coverage(mask).count_set());
    log::debug!(
        "Found {} matches in orientation {orientation}, residual {}",
        report.occurrences,
        report.residual
    );
    Ok(report)
}
