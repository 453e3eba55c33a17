//! Inverted index from border fingerprints to tile-orientations
//!
//! The index owns the orientation closure of the input: every tile in all
//! eight orientations, stored tile-major so closure position `p` belongs to
//! physical tile `p / ORIENTATION_COUNT`. Each edge role keeps its own map
//! from fingerprint to closure positions in insertion order. Collisions are
//! not errors here; the assembler decides what multiplicities mean.

use std::collections::HashMap;

use crate::algorithm::bitset::TileBitset;
use crate::spatial::orientation::ORIENTATION_COUNT;
use crate::spatial::tile::{Edge, Fingerprint, Tile};

type RoleMap = HashMap<Fingerprint, Vec<usize>>;

/// Fingerprint lookup over the full orientation closure
#[derive(Debug, Clone)]
pub struct BorderIndex {
    closure: Vec<Tile>,
    left: RoleMap,
    top: RoleMap,
    right: RoleMap,
    bottom: RoleMap,
}

impl BorderIndex {
    /// Index every orientation of every tile
    pub fn build(tiles: &[Tile]) -> Self {
        let closure: Vec<Tile> = tiles.iter().flat_map(Tile::orientations).collect();

        let mut index = Self {
            closure: Vec::new(),
            left: HashMap::new(),
            top: HashMap::new(),
            right: HashMap::new(),
            bottom: HashMap::new(),
        };
        for (position, tile) in closure.iter().enumerate() {
            for edge in Edge::ALL {
                index
                    .role_mut(edge)
                    .entry(tile.border(edge))
                    .or_default()
                    .push(position);
            }
        }
        index.closure = closure;

        log::debug!(
            "Indexed {} tile-orientations from {} tiles",
            index.closure.len(),
            tiles.len()
        );
        index
    }

    const fn role(&self, edge: Edge) -> &RoleMap {
        match edge {
            Edge::Left => &self.left,
            Edge::Top => &self.top,
            Edge::Right => &self.right,
            Edge::Bottom => &self.bottom,
        }
    }

    const fn role_mut(&mut self, edge: Edge) -> &mut RoleMap {
        match edge {
            Edge::Left => &mut self.left,
            Edge::Top => &mut self.top,
            Edge::Right => &mut self.right,
            Edge::Bottom => &mut self.bottom,
        }
    }

    /// Every tile-orientation, tile-major
    pub fn closure(&self) -> &[Tile] {
        &self.closure
    }

    /// Number of physical tiles indexed
    pub fn tile_count(&self) -> usize {
        self.closure.len() / ORIENTATION_COUNT
    }

    /// Tile-orientation at a closure position
    pub fn tile(&self, position: usize) -> Option<&Tile> {
        self.closure.get(position)
    }

    /// Physical tile index of a closure position
    pub const fn physical(position: usize) -> usize {
        position / ORIENTATION_COUNT
    }

    /// Closure positions exposing `fingerprint` on `edge`, in insertion order
    pub fn positions(&self, edge: Edge, fingerprint: Fingerprint) -> &[usize] {
        self.role(edge)
            .get(&fingerprint)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Tile-orientations exposing `fingerprint` on `edge`, in insertion order
    pub fn lookup(&self, edge: Edge, fingerprint: Fingerprint) -> Vec<&Tile> {
        self.positions(edge, fingerprint)
            .iter()
            .filter_map(|&position| self.tile(position))
            .collect()
    }

    /// Number of tile-orientations exposing `fingerprint` on `edge`
    pub fn multiplicity(&self, edge: Edge, fingerprint: Fingerprint) -> usize {
        self.positions(edge, fingerprint).len()
    }

    /// Whether `edge` of `tile` lies on the outer boundary of the image
    ///
    /// An outer edge can only meet itself: its fingerprint appears once in
    /// the opposing role map, produced by the tile's own flipped variant.
    pub fn is_outer(&self, tile: &Tile, edge: Edge) -> bool {
        self.multiplicity(edge.opposite(), tile.border(edge)) == 1
    }

    /// Candidate set for a lookup, as a bitset over closure positions
    pub fn candidates(&self, edge: Edge, fingerprint: Fingerprint) -> TileBitset {
        TileBitset::from_positions(self.positions(edge, fingerprint), self.closure.len())
    }
}
