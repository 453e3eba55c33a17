//! Reassembly of square pixel tiles into one image and pattern search over it
//!
//! Tiles arrive shuffled, each in an unknown rotation and reflection. Border
//! fingerprints identify which edges meet; the unique tiling is assembled
//! greedily from a corner, the tile borders are cropped, and the stitched
//! image is searched in all eight orientations for a fixed mask.

/// Border indexing, assembly, composition and pattern matching
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Pixel grids, orientations and tiles
pub mod spatial;

pub use io::error::{Result, TilingError};
