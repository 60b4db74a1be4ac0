//! The `IndexedHeap` column representation: a max-heap of row indices,
//! added by concatenation, read by lazy duplicate elimination.
//!
//! Grounded directly on Aleph's `aleph::topology::representations::
//! Heap` (`include/aleph/topology/representations/Heap.hh`):
//! `addColumns` concatenates and re-heapifies one push at a time,
//! `getMaximumIndex` pops the front repeatedly while it collides with
//! the previous front (cancelling pairs over GF(2)) until a distinct
//! leader surfaces or the heap empties. The tree arithmetic itself
//! comes from the teacher's `utilities/heaps/heap.rs` (see
//! `super::heap`).

use super::heap::{heapify, sift_up};
use super::ColumnRepresentation;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexedHeap {
    data: Vec<usize>,
}

fn greater_than(a: &usize, b: &usize) -> bool {
    a > b
}

/// Pop the heap's maximum, including a lazy duplicate-cancellation
/// pass: any pair of equal values at the front annihilates over GF(2).
fn pop_max(data: &mut Vec<usize>) -> Option<usize> {
    loop {
        if data.is_empty() {
            return None;
        }
        let candidate = data[0];
        remove_root(data);

        if data.first() == Some(&candidate) {
            // a duplicate: the pair cancels, drop both and keep looking
            remove_root(data);
            continue;
        }
        // restore the candidate we tentatively removed; it is the
        // (possibly sole) maximum
        data.push(candidate);
        let last = data.len() - 1;
        sift_up(data, last, greater_than);
        let result = data[0];
        remove_root(data);
        return Some(result);
    }
}

fn remove_root(data: &mut Vec<usize>) {
    let last = data.len() - 1;
    data.swap(0, last);
    data.pop();
    if !data.is_empty() {
        super::heap::sift_down(data, 0, greater_than);
    }
}

impl ColumnRepresentation for IndexedHeap {
    fn set_column(&mut self, entries: Vec<usize>) {
        self.data = entries;
        heapify(&mut self.data, greater_than);
    }

    fn max_index(&mut self) -> Option<usize> {
        // We must not destructively consume the heap just to peek: take
        // a snapshot, pop lazily on the snapshot, then restore the
        // surviving state (mirrors Aleph's approach of performing the
        // duplicate-elimination in place, since `getMaximumIndex` in
        // the C++ original *does* mutate `_data`).
        let max = pop_max(&mut self.data);
        if let Some(v) = max {
            self.data.push(v);
            let last = self.data.len() - 1;
            sift_up(&mut self.data, last, greater_than);
        }
        max
    }

    fn merge_from_indices(&mut self, indices: &[usize]) {
        self.data.reserve(indices.len());
        for &v in indices {
            self.data.push(v);
            let last = self.data.len() - 1;
            sift_up(&mut self.data, last, greater_than);
        }
    }

    fn clear(&mut self) {
        self.data.clear();
    }

    fn to_sorted_vec(&self) -> Vec<usize> {
        // Read-only view: eliminate duplicate pairs without consuming
        // the live heap, by duplicating the buffer first.
        let mut scratch = self.data.clone();
        let mut out = Vec::new();
        while let Some(v) = pop_max(&mut scratch) {
            out.push(v);
        }
        out.reverse();
        out
    }
}
