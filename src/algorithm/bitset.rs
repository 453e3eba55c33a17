use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over 0-based positions
///
/// Tracks closure positions during candidate intersection and physical
/// tile indices once they are consumed by the assembler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileBitset {
    bits: BitVec,
}

impl TileBitset {
    /// Create a bitset with no positions present
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
        }
    }

    /// Create a bitset from a list of positions
    ///
    /// Positions at or beyond `capacity` are ignored.
    pub fn from_positions(positions: &[usize], capacity: usize) -> Self {
        let mut bitset = Self::new(capacity);
        for &position in positions {
            bitset.insert(position);
        }
        bitset
    }

    /// Number of positions the set can hold
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Insert a position
    pub fn insert(&mut self, position: usize) {
        if position < self.bits.len() {
            self.bits.set(position, true);
        }
    }

    /// Test position membership
    pub fn contains(&self, position: usize) -> bool {
        self.bits.get(position).as_deref() == Some(&true)
    }

    /// Intersect this bitset with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new bitset containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Test if no positions are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count positions in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Smallest position in the set
    pub fn first(&self) -> Option<usize> {
        self.bits.first_one()
    }

    /// Iterate positions in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all positions as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for TileBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileBitset({} positions: {:?})", self.count(), self.to_vec())
    }
}
