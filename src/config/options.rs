//! Options for the elimination kernels.
//!
//! This module provides the `KernelOptions` struct, which selects the pivot
//! tolerance, the pivoting rule used by Gaussian/Gauss-Jordan elimination and
//! the determinant strategy. The defaults reproduce the classic fixed-pivot
//! kernel: tolerance `1e-10`, no row interchange, elimination-based
//! determinant.

use crate::core::traits::Scalar;

/// Magnitude under which a pivot counts as zero.
pub const DEFAULT_PIVOT_TOL: f64 = 1e-10;

/// Pivot selection rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pivoting {
    /// Always pivot on the diagonal entry; a small diagonal is singular even
    /// if a usable entry sits lower in the column.
    #[default]
    Fixed,
    /// Swap in the row with the largest magnitude in the pivot column.
    Partial,
}

/// How `determinant` is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeterminantStrategy {
    /// Forward elimination, O(n³). Returns zero on a vanishing pivot.
    #[default]
    Elimination,
    /// Recursive cofactor expansion along row 0, O(n!). Never divides.
    Cofactor,
}

/// Kernel parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelOptions<T> {
    /// Pivot magnitude treated as zero
    pub pivot_tol: T,

    /// Pivot selection rule
    pub pivoting: Pivoting,

    /// Determinant algorithm
    pub determinant: DeterminantStrategy,
}

impl<T: Scalar> KernelOptions<T> {
    pub fn with_pivot_tol(mut self, tol: T) -> Self {
        self.pivot_tol = tol;
        self
    }

    pub fn with_pivoting(mut self, pivoting: Pivoting) -> Self {
        self.pivoting = pivoting;
        self
    }

    pub fn with_determinant(mut self, strategy: DeterminantStrategy) -> Self {
        self.determinant = strategy;
        self
    }
}

impl<T: Scalar> Default for KernelOptions<T> {
    fn default() -> Self {
        Self {
            pivot_tol: num_traits::cast(DEFAULT_PIVOT_TOL).unwrap_or_else(T::epsilon),
            pivoting: Pivoting::default(),
            determinant: DeterminantStrategy::default(),
        }
    }
}
