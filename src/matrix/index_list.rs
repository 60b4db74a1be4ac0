//! The `IndexList` column representation: a sorted vector of row
//! indices, added via symmetric difference.
//!
//! Grounded directly on Aleph's `aleph::topology::representations::
//! Vector` (`include/aleph/topology/representations/Vector.hh`):
//! `setColumn` sorts, `addColumns` uses `std::set_symmetric_difference`,
//! `getMaximumIndex` reads `.back()`.

use super::ColumnRepresentation;

/// Column stored as a sorted `Vec<usize>` of row indices present in the
/// column (ℤ/2 coefficients: presence is the only state an entry has).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexList {
    entries: Vec<usize>,
}

impl ColumnRepresentation for IndexList {
    fn set_column(&mut self, mut entries: Vec<usize>) {
        entries.sort_unstable();
        entries.dedup();
        self.entries = entries;
    }

    fn max_index(&mut self) -> Option<usize> {
        self.entries.last().copied()
    }

    fn merge_from_indices(&mut self, indices: &[usize]) {
        let mut result = Vec::with_capacity(self.entries.len() + indices.len());
        let (mut i, mut j) = (0, 0);
        while i < self.entries.len() && j < indices.len() {
            match self.entries[i].cmp(&indices[j]) {
                std::cmp::Ordering::Less => {
                    result.push(self.entries[i]);
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    result.push(indices[j]);
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    // symmetric difference: a row index present in both
                    // columns cancels out over GF(2)
                    i += 1;
                    j += 1;
                }
            }
        }
        result.extend_from_slice(&self.entries[i..]);
        result.extend_from_slice(&indices[j..]);
        self.entries = result;
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn to_sorted_vec(&self) -> Vec<usize> {
        self.entries.clone()
    }
}
