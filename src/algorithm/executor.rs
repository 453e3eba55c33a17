//! End-to-end pipeline: index, assemble, compose, then search for the pattern

use std::time::Instant;

use crate::algorithm::assembler::{Assembler, Placement};
use crate::algorithm::composer::compose;
use crate::algorithm::index::BorderIndex;
use crate::algorithm::matcher::{Mask, MatchReport, find_pattern};
use crate::io::error::Result;
use crate::spatial::grid::Grid;
use crate::spatial::tile::Tile;

/// Pipeline stage, reported to progress observers as it starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Building the border index over the orientation closure
    Index,
    /// Placing tiles on the grid
    Assemble,
    /// Stitching tile interiors
    Compose,
    /// Searching the image for the mask
    Match,
}

impl Stage {
    /// Human-readable stage name
    pub const fn label(self) -> &'static str {
        match self {
            Self::Index => "indexing",
            Self::Assemble => "assembling",
            Self::Compose => "composing",
            Self::Match => "matching",
        }
    }
}

/// Terminal artifacts of a successful run
#[derive(Debug, Clone)]
pub struct Solution {
    /// Solved tile arrangement
    pub placement: Placement,
    /// Stitched image in assembly orientation
    pub image: Grid,
    /// Product of the four corner tile ids
    pub corner_product: u64,
    /// Pattern search outcome
    pub report: MatchReport,
}

/// Run the whole pipeline
///
/// # Errors
///
/// Propagates the first failing stage's error; no partial result is returned
pub fn solve(tiles: &[Tile], mask: &Mask) -> Result<Solution> {
    solve_with_observer(tiles, mask, |_| {})
}

/// Run the whole pipeline, calling `observer` as each stage starts
///
/// # Errors
///
/// Propagates the first failing stage's error; no partial result is returned
pub fn solve_with_observer(
    tiles: &[Tile],
    mask: &Mask,
    mut observer: impl FnMut(Stage),
) -> Result<Solution> {
    let start = Instant::now();

    observer(Stage::Index);
    let index = BorderIndex::build(tiles);

    observer(Stage::Assemble);
    let placement = Assembler::new(&index)?.run()?;
    let corner_product = placement.corner_product()?;
    drop(index);

    observer(Stage::Compose);
    let image = compose(&placement)?;

    observer(Stage::Match);
    let report = find_pattern(&image, mask)?;

    log::info!(
        "Solved {} tiles in {:.2?}: corner product {corner_product}, {} matches, residual {}",
        tiles.len(),
        start.elapsed(),
        report.occurrences,
        report.residual
    );

    Ok(Solution {
        placement,
        image,
        corner_product,
        report,
    })
}
