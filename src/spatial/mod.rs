//! Spatial data structures
//!
//! This module contains:
//! - Boolean pixel grids and their rotations
//! - The eight square symmetries
//! - Tiles with cached border fingerprints
//! - Synthetic puzzle generation

/// Synthetic, well-posed puzzle generation
pub mod cutter;
/// Boolean pixel grids
pub mod grid;
/// Rotations and reflections of square grids
pub mod orientation;
/// Identified tiles and border fingerprints
pub mod tile;

pub use grid::Grid;
