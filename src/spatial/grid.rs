//! Boolean pixel buffer with rotate, mirror and crop transforms
//!
//! All transforms are pure: they return a new grid and never touch the
//! receiver, so an oriented copy can never alias the value it came from.

use ndarray::{Array2, ArrayView2, s};
use std::fmt;

use crate::io::error::{Result, TilingError};

/// Character used for a set pixel in text form
pub const SET_PIXEL: char = '#';
/// Character used for an unset pixel in text form
pub const UNSET_PIXEL: char = '.';

/// Rectangular matrix of set/unset pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pixels: Array2<bool>,
}

impl Grid {
    /// Create a grid with every pixel unset
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            pixels: Array2::from_elem((rows, cols), false),
        }
    }

    /// Wrap an existing pixel array
    pub const fn from_array(pixels: Array2<bool>) -> Self {
        Self { pixels }
    }

    /// Build a grid from text rows of `#` (set) and `.` (unset)
    ///
    /// # Errors
    ///
    /// Returns a parse error if rows differ in length or contain other characters.
    /// Line numbers in the error are 1-based positions within `rows`.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().chars().count());
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != cols {
                return Err(TilingError::Parse {
                    line: index + 1,
                    reason: format!(
                        "row has {} pixels, expected {cols}",
                        row.chars().count()
                    ),
                });
            }
            for ch in row.chars() {
                match ch {
                    SET_PIXEL => cells.push(true),
                    UNSET_PIXEL => cells.push(false),
                    other => {
                        return Err(TilingError::Parse {
                            line: index + 1,
                            reason: format!("unexpected pixel character '{other}'"),
                        });
                    }
                }
            }
        }

        Array2::from_shape_vec((rows.len(), cols), cells)
            .map(Self::from_array)
            .map_err(|e| crate::io::error::computation_error("grid construction", &e))
    }

    /// Number of pixel rows
    pub fn rows(&self) -> usize {
        self.pixels.nrows()
    }

    /// Number of pixel columns
    pub fn cols(&self) -> usize {
        self.pixels.ncols()
    }

    /// Check whether rows and columns agree
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Read a pixel, `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.pixels.get((row, col)).copied()
    }

    /// Borrow the underlying pixel array
    pub fn view(&self) -> ArrayView2<'_, bool> {
        self.pixels.view()
    }

    /// Quarter turn clockwise
    ///
    /// `result[r][c] = grid[rows - 1 - c][r]`; rows and columns swap.
    #[must_use]
    pub fn rotate_90(&self) -> Self {
        let rotated = self.pixels.t();
        Self::from_array(rotated.slice(s![.., ..;-1]).as_standard_layout().into_owned())
    }

    /// Reverse every row
    #[must_use]
    pub fn mirror_horizontal(&self) -> Self {
        Self::from_array(
            self.pixels
                .slice(s![.., ..;-1])
                .as_standard_layout()
                .into_owned(),
        )
    }

    /// Drop the outermost ring of pixels
    ///
    /// Grids narrower than 2 pixels in either axis have no interior and
    /// produce an empty grid.
    #[must_use]
    pub fn interior(&self) -> Self {
        let (rows, cols) = self.pixels.dim();
        if rows < 2 || cols < 2 {
            return Self::new(0, 0);
        }
        Self::from_array(self.pixels.slice(s![1..rows - 1, 1..cols - 1]).to_owned())
    }

    /// Count set pixels
    pub fn count_set(&self) -> usize {
        self.pixels.iter().filter(|&&pixel| pixel).count()
    }

    /// Coordinates of every set pixel in row-major order
    pub fn set_positions(&self) -> Vec<(usize, usize)> {
        self.pixels
            .indexed_iter()
            .filter(|&(_, &pixel)| pixel)
            .map(|(position, _)| position)
            .collect()
    }

    /// Pixels of one row, left to right
    pub fn row_bits(&self, row: usize) -> impl Iterator<Item = bool> + '_ {
        let cols = if row < self.rows() { self.cols() } else { 0 };
        (0..cols).filter_map(move |col| self.get(row, col))
    }

    /// Pixels of one column, top to bottom
    pub fn column_bits(&self, col: usize) -> impl Iterator<Item = bool> + '_ {
        let rows = if col < self.cols() { self.rows() } else { 0 };
        (0..rows).filter_map(move |row| self.get(row, col))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.pixels.rows().into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for &pixel in row {
                write!(f, "{}", if pixel { SET_PIXEL } else { UNSET_PIXEL })?;
            }
        }
        Ok(())
    }
}
