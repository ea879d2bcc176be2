use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset recording which arena tiles are already placed
///
/// Indices are 0-based positions in the tile arena. Membership is tracked
/// separately from the tiles themselves, so reorienting a candidate never
/// disturbs the bookkeeping of the search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementSet {
    bits: BitVec,
}

impl PlacementSet {
    /// Create a set with no tiles placed
    pub fn new(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
        }
    }

    /// Capacity of the set
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Mark a tile as placed, returning whether it was previously free
    ///
    /// Out-of-range indices are ignored and report `false`.
    pub fn insert(&mut self, index: usize) -> bool {
        match self.bits.get_mut(index) {
            Some(mut bit) if !*bit => {
                bit.set(true);
                true
            }
            _ => false,
        }
    }

    /// Mark a tile as free again
    pub fn remove(&mut self, index: usize) {
        if let Some(mut bit) = self.bits.get_mut(index) {
            bit.set(false);
        }
    }

    /// Test whether a tile is placed
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Test if every tile is placed
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }

    /// Count placed tiles
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Indices of placed tiles, ascending
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for PlacementSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PlacementSet({}/{} placed: {:?})",
            self.count(),
            self.capacity(),
            self.to_vec()
        )
    }
}
