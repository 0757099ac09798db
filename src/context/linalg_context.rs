//! Strategy dispatch for determinant, inverse and linear solve.
//!
//! `LinalgContext` holds a [`KernelOptions`] value and routes each call to the
//! configured algorithm: the elimination engine with the chosen pivoting rule
//! and tolerance, or cofactor expansion when
//! [`DeterminantStrategy::Cofactor`] is selected. The context owns no
//! buffers; every call allocates its own working copy.

use crate::config::{DeterminantStrategy, KernelOptions};
use crate::core::traits::Scalar;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::solver::{GaussianElimination, cofactor_determinant};
use crate::utils::stats::SolveStats;

/// Configured entry point to the elimination-backed operations.
#[derive(Debug, Clone, Copy)]
pub struct LinalgContext<T> {
    pub options: KernelOptions<T>,
}

impl<T: Scalar> LinalgContext<T> {
    pub fn new(options: KernelOptions<T>) -> Self {
        Self { options }
    }

    fn engine(&self) -> GaussianElimination<T> {
        GaussianElimination::new(&self.options)
    }

    /// Determinant using the configured strategy.
    pub fn determinant(&self, a: &Matrix<T>) -> Result<T> {
        match self.options.determinant {
            DeterminantStrategy::Elimination => self.engine().determinant(a),
            DeterminantStrategy::Cofactor => cofactor_determinant(a),
        }
    }

    pub fn inverse(&self, a: &Matrix<T>) -> Result<Matrix<T>> {
        self.engine().inverse(a)
    }

    pub fn solve(&self, a: &Matrix<T>, b: &[T]) -> Result<Vec<T>> {
        self.solve_with_stats(a, b).map(|(x, _)| x)
    }

    /// Solve and report pivot statistics.
    pub fn solve_with_stats(&self, a: &Matrix<T>, b: &[T]) -> Result<(Vec<T>, SolveStats<T>)> {
        self.engine().solve_with_stats(a, b)
    }
}

impl<T: Scalar> Default for LinalgContext<T> {
    fn default() -> Self {
        Self::new(KernelOptions::default())
    }
}
