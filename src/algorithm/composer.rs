//! Stitch placed tile interiors into one image

use ndarray::{Array2, ArrayView2, Axis, concatenate};

use crate::algorithm::assembler::Placement;
use crate::io::error::{Result, computation_error};
use crate::spatial::grid::Grid;

/// Crop every placed tile's border ring and concatenate the interiors
///
/// A placement of `G × G` tiles with side `S` yields a square image of side
/// `G·(S-2)`; the block of cell `(r, c)` starts at `(r·(S-2), c·(S-2))`.
///
/// # Errors
///
/// Returns a computation error if interiors disagree in size, which cannot
/// happen for tiles that passed parsing
pub fn compose(placement: &Placement) -> Result<Grid> {
    let mut bands: Vec<Array2<bool>> = Vec::with_capacity(placement.side());
    for row in placement.rows() {
        let interiors: Vec<Grid> = row.iter().map(|tile| tile.grid().interior()).collect();
        let views: Vec<ArrayView2<'_, bool>> = interiors.iter().map(Grid::view).collect();
        let band = concatenate(Axis(1), &views).map_err(|e| computation_error("compose", &e))?;
        bands.push(band);
    }

    let views: Vec<ArrayView2<'_, bool>> = bands.iter().map(Array2::view).collect();
    let image = concatenate(Axis(0), &views).map_err(|e| computation_error("compose", &e))?;
    log::debug!("Composed {}x{} image", image.nrows(), image.ncols());
    Ok(Grid::from_array(image))
}
