//! Gaussian and Gauss-Jordan elimination on dense matrices.
//!
//! One engine backs three operations:
//! - `determinant`: forward elimination below the pivot, product of pivots.
//!   A pivot under tolerance yields `0` rather than an error.
//! - `inverse`: Gauss-Jordan on `[A | I]`, the identity block carried as a
//!   paired matrix and returned once the left half is reduced.
//! - `solve`: Gauss-Jordan with a single right-hand-side vector.
//!
//! Inverse and solve fail with [`LinalgError::Singular`] when a pivot falls
//! under tolerance. All work happens on private copies; inputs are never
//! mutated.
//!
//! Under [`Pivoting::Fixed`] the diagonal entry is always the pivot, so a
//! matrix such as `[[0, 1], [1, 0]]` is reported singular. [`Pivoting::Partial`]
//! swaps in the largest remaining entry of the column first.

use crate::config::{KernelOptions, Pivoting};
use crate::core::shape::{self, Operands, Operation};
use crate::core::traits::Scalar;
use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;
use crate::solver::LinearSolver;
use crate::utils::stats::SolveStats;
use log::{debug, trace};

/// Right-hand side reduced in lockstep with the working matrix.
trait Paired<T> {
    fn swap_rows(&mut self, a: usize, b: usize);
    /// row[i] ← row[i] / pivot
    fn divide_row(&mut self, i: usize, pivot: T);
    /// row[k] ← row[k] − factor · row[i]
    fn eliminate_row(&mut self, k: usize, i: usize, factor: T);
}

impl<T: Scalar> Paired<T> for Vec<T> {
    fn swap_rows(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }

    fn divide_row(&mut self, i: usize, pivot: T) {
        self[i] = self[i] / pivot;
    }

    fn eliminate_row(&mut self, k: usize, i: usize, factor: T) {
        self[k] = self[k] - factor * self[i];
    }
}

impl<T: Scalar> Paired<T> for Matrix<T> {
    fn swap_rows(&mut self, a: usize, b: usize) {
        Matrix::swap_rows(self, a, b);
    }

    fn divide_row(&mut self, i: usize, pivot: T) {
        for v in self.rows_mut()[i].iter_mut() {
            *v = *v / pivot;
        }
    }

    fn eliminate_row(&mut self, k: usize, i: usize, factor: T) {
        let rows = self.rows_mut();
        // k != i, so the two rows sit on opposite sides of the split.
        let (src, dst) = if i < k {
            let (lo, hi) = rows.split_at_mut(k);
            (&lo[i], &mut hi[0])
        } else {
            let (lo, hi) = rows.split_at_mut(i);
            (&hi[0], &mut lo[k])
        };
        for (v, &p) in dst.iter_mut().zip(src.iter()) {
            *v = *v - factor * p;
        }
    }
}

/// No right-hand side; used by the determinant pass.
impl<T> Paired<T> for () {
    fn swap_rows(&mut self, _a: usize, _b: usize) {}
    fn divide_row(&mut self, _i: usize, _pivot: T) {}
    fn eliminate_row(&mut self, _k: usize, _i: usize, _factor: T) {}
}

/// Elimination engine parameterised by pivot tolerance and pivoting rule.
#[derive(Debug, Clone, Copy)]
pub struct GaussianElimination<T> {
    tol: T,
    pivoting: Pivoting,
}

impl<T: Scalar> GaussianElimination<T> {
    pub fn new(options: &KernelOptions<T>) -> Self {
        Self {
            tol: options.pivot_tol,
            pivoting: options.pivoting,
        }
    }

    /// Under partial pivoting, move the largest entry of column `i` (rows
    /// `i..`) onto the diagonal. Returns whether a swap happened.
    fn select_pivot<P: Paired<T>>(&self, work: &mut Matrix<T>, i: usize, paired: &mut P) -> bool {
        if self.pivoting == Pivoting::Fixed {
            return false;
        }
        let n = work.nrows();
        let best = (i..n).fold(i, |best, r| {
            if work[(r, i)].abs() > work[(best, i)].abs() { r } else { best }
        });
        if best == i {
            return false;
        }
        trace!("swapping rows {i} and {best} for pivot {}", work[(best, i)]);
        work.swap_rows(i, best);
        paired.swap_rows(i, best);
        true
    }

    fn is_negligible(&self, pivot: T) -> bool {
        pivot.abs() < self.tol
    }

    /// Full Gauss-Jordan reduction of `work` to the identity, applying every
    /// row operation to `paired` as well.
    fn gauss_jordan<P: Paired<T>>(&self, work: &mut Matrix<T>, paired: &mut P) -> Result<SolveStats<T>> {
        let n = work.nrows();
        let mut stats = SolveStats::new();
        for i in 0..n {
            if self.select_pivot(work, i, paired) {
                stats.row_swaps += 1;
            }
            let pivot = work[(i, i)];
            if self.is_negligible(pivot) {
                debug!("pivot {pivot} at row {i} is below tolerance {}", self.tol);
                return Err(LinalgError::Singular { row: i });
            }
            stats.record_pivot(pivot);

            work.divide_row(i, pivot);
            paired.divide_row(i, pivot);

            for k in (0..n).filter(|&k| k != i) {
                let factor = work[(k, i)];
                work.eliminate_row(k, i, factor);
                paired.eliminate_row(k, i, factor);
            }
        }
        Ok(stats)
    }

    /// Determinant by forward elimination. Singular input gives zero.
    pub fn determinant(&self, a: &Matrix<T>) -> Result<T> {
        shape::check(Operation::Determinant, &Operands::unary(a.shape()))?;
        let n = a.nrows();
        let mut work = a.clone();
        let mut det = T::one();
        for i in 0..n {
            if self.select_pivot(&mut work, i, &mut ()) {
                det = -det;
            }
            let pivot = work[(i, i)];
            if self.is_negligible(pivot) {
                debug!("pivot {pivot} at row {i} is below tolerance, determinant is zero");
                return Ok(T::zero());
            }
            for k in (i + 1)..n {
                let factor = work[(k, i)] / pivot;
                for j in i..n {
                    work[(k, j)] = work[(k, j)] - factor * work[(i, j)];
                }
            }
            det = det * pivot;
        }
        Ok(det)
    }

    /// Inverse via Gauss-Jordan on `[A | I]`.
    pub fn inverse(&self, a: &Matrix<T>) -> Result<Matrix<T>> {
        self.inverse_with_stats(a).map(|(inv, _)| inv)
    }

    pub fn inverse_with_stats(&self, a: &Matrix<T>) -> Result<(Matrix<T>, SolveStats<T>)> {
        shape::check(Operation::Inverse, &Operands::unary(a.shape()))?;
        let mut work = a.clone();
        let mut inv = Matrix::identity_unchecked(a.nrows());
        let stats = self.gauss_jordan(&mut work, &mut inv)?;
        Ok((inv, stats))
    }

    /// `x` with `A·x = b`.
    pub fn solve_with_stats(&self, a: &Matrix<T>, b: &[T]) -> Result<(Vec<T>, SolveStats<T>)> {
        shape::check(Operation::Solve, &Operands::binary(a.shape(), (b.len(), 1)))?;
        let mut work = a.clone();
        let mut x = b.to_vec();
        let stats = self.gauss_jordan(&mut work, &mut x)?;
        Ok((x, stats))
    }
}

impl<T: Scalar> Default for GaussianElimination<T> {
    fn default() -> Self {
        Self::new(&KernelOptions::default())
    }
}

impl<T: Scalar> LinearSolver<Matrix<T>, Vec<T>> for GaussianElimination<T> {
    type Error = LinalgError;
    type Scalar = T;

    /// Solve Ax = b by Gauss-Jordan elimination.
    ///
    /// # Arguments
    /// * `a` - Square system matrix
    /// * `b` - Right-hand side vector
    /// * `x` - On input: ignored; on output: solution vector
    ///
    /// # Returns
    /// * `Ok(SolveStats)` with pivot count, swaps and smallest pivot
    /// * `Err(LinalgError)` on a shape mismatch or vanishing pivot; `x` is untouched
    fn solve(&mut self, a: &Matrix<T>, b: &Vec<T>, x: &mut Vec<T>) -> Result<SolveStats<T>> {
        let (sol, stats) = self.solve_with_stats(a, b)?;
        *x = sol;
        Ok(stats)
    }
}
