//! Direct dense solvers and the operations built on elimination.

use crate::core::traits::Scalar;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::utils::stats::SolveStats;

/// Common interface for any direct solver.
pub trait LinearSolver<M, V> {
    type Error;
    /// Solve A·x = b, writing result into `x`.
    /// Returns elimination stats.
    fn solve(
        &mut self,
        a: &M,
        b: &V,
        x: &mut V
    ) -> std::result::Result<SolveStats<<Self as LinearSolver<M, V>>::Scalar>, Self::Error>;
    type Scalar: Copy + PartialOrd;
}

pub mod cofactor;
pub use cofactor::cofactor_determinant;

pub mod elimination;
pub use elimination::GaussianElimination;

/// Determinant by forward elimination; `0` for a singular matrix.
pub fn determinant<T: Scalar>(a: &Matrix<T>) -> Result<T> {
    GaussianElimination::default().determinant(a)
}

/// Inverse by Gauss-Jordan elimination.
pub fn inverse<T: Scalar>(a: &Matrix<T>) -> Result<Matrix<T>> {
    GaussianElimination::default().inverse(a)
}

/// Solve `A·x = b` by Gauss-Jordan elimination.
pub fn solve<T: Scalar>(a: &Matrix<T>, b: &[T]) -> Result<Vec<T>> {
    GaussianElimination::default()
        .solve_with_stats(a, b)
        .map(|(x, _)| x)
}
