//! The eight orientations of a square: four quarter turns, each optionally mirrored

use std::fmt;

use crate::spatial::grid::Grid;

/// Number of distinct orientations
pub const ORIENTATION_COUNT: usize = 8;

/// Rotation/mirror combination applied to a grid
///
/// Each value means "rotate clockwise by `quarter_turns()`, then mirror
/// horizontally if `is_mirrored()`". Variants are declared in enumeration
/// order, which is also the order of [`orientations`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    /// Unchanged
    Identity,
    /// Rows reversed
    Mirror,
    /// One clockwise quarter turn
    Rotate90,
    /// One quarter turn, then mirrored
    Rotate90Mirror,
    /// Half turn
    Rotate180,
    /// Half turn, then mirrored
    Rotate180Mirror,
    /// Three quarter turns
    Rotate270,
    /// Three quarter turns, then mirrored
    Rotate270Mirror,
}

impl Orientation {
    /// All orientations in enumeration order
    pub const ALL: [Self; ORIENTATION_COUNT] = [
        Self::Identity,
        Self::Mirror,
        Self::Rotate90,
        Self::Rotate90Mirror,
        Self::Rotate180,
        Self::Rotate180Mirror,
        Self::Rotate270,
        Self::Rotate270Mirror,
    ];

    /// Build an orientation from its parts; turns are taken modulo 4
    pub const fn from_parts(quarter_turns: usize, mirrored: bool) -> Self {
        match (quarter_turns % 4, mirrored) {
            (0, false) => Self::Identity,
            (0, true) => Self::Mirror,
            (1, false) => Self::Rotate90,
            (1, true) => Self::Rotate90Mirror,
            (2, false) => Self::Rotate180,
            (2, true) => Self::Rotate180Mirror,
            (_, false) => Self::Rotate270,
            (_, true) => Self::Rotate270Mirror,
        }
    }

    /// Clockwise quarter turns applied before the optional mirror
    pub const fn quarter_turns(self) -> usize {
        match self {
            Self::Identity | Self::Mirror => 0,
            Self::Rotate90 | Self::Rotate90Mirror => 1,
            Self::Rotate180 | Self::Rotate180Mirror => 2,
            Self::Rotate270 | Self::Rotate270Mirror => 3,
        }
    }

    /// Whether the rotation is followed by a horizontal mirror
    pub const fn is_mirrored(self) -> bool {
        matches!(
            self,
            Self::Mirror | Self::Rotate90Mirror | Self::Rotate180Mirror | Self::Rotate270Mirror
        )
    }

    /// Orientation equivalent to applying `self` first and `next` second
    ///
    /// Mirroring conjugates a rotation into its inverse, so the turns of
    /// `next` flip sign when `self` is mirrored.
    #[must_use]
    pub const fn then(self, next: Self) -> Self {
        let next_turns = if self.is_mirrored() {
            4 - next.quarter_turns()
        } else {
            next.quarter_turns()
        };
        Self::from_parts(
            self.quarter_turns() + next_turns,
            self.is_mirrored() != next.is_mirrored(),
        )
    }

    /// Orientation undoing `self`
    #[must_use]
    pub const fn inverse(self) -> Self {
        if self.is_mirrored() {
            // Mirrored orientations are reflections and undo themselves
            self
        } else {
            Self::from_parts(4 - self.quarter_turns(), false)
        }
    }

    /// Apply this orientation to a grid
    pub fn apply(self, grid: &Grid) -> Grid {
        let mut oriented = grid.clone();
        for _ in 0..self.quarter_turns() {
            oriented = oriented.rotate_90();
        }
        if self.is_mirrored() {
            oriented = oriented.mirror_horizontal();
        }
        oriented
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let turns = self.quarter_turns() * 90;
        match (turns, self.is_mirrored()) {
            (0, false) => write!(f, "identity"),
            (0, true) => write!(f, "mirror"),
            (degrees, false) => write!(f, "rot{degrees}"),
            (degrees, true) => write!(f, "rot{degrees}+mirror"),
        }
    }
}

/// All eight orientations of a grid in enumeration order
///
/// Built by chaining quarter turns and mirroring each one, so only
/// [`Grid::rotate_90`] and [`Grid::mirror_horizontal`] are involved.
pub fn orientations(grid: &Grid) -> Vec<(Orientation, Grid)> {
    let mut variants = Vec::with_capacity(ORIENTATION_COUNT);
    let mut rotated = grid.clone();
    for turns in 0..4 {
        let mirrored = rotated.mirror_horizontal();
        let next = rotated.rotate_90();
        variants.push((Orientation::from_parts(turns, false), rotated));
        variants.push((Orientation::from_parts(turns, true), mirrored));
        rotated = next;
    }
    variants
}
