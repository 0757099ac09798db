//! Statistics reported by the elimination kernels.

/// Outcome of one elimination pass.
#[derive(Clone, Debug, PartialEq)]
pub struct SolveStats<T> {
    /// Pivot rows reduced.
    pub pivots: usize,
    /// Row interchanges performed (always 0 under fixed pivoting).
    pub row_swaps: usize,
    /// Smallest pivot magnitude seen; a rough conditioning hint.
    pub min_pivot: T,
}

impl<T: num_traits::Float> SolveStats<T> {
    pub(crate) fn new() -> Self {
        Self {
            pivots: 0,
            row_swaps: 0,
            min_pivot: T::infinity(),
        }
    }

    pub(crate) fn record_pivot(&mut self, pivot: T) {
        self.pivots += 1;
        self.min_pivot = self.min_pivot.min(pivot.abs());
    }
}
