//! Trait implementations for `Matrix` and `Vec`, and conversion to and from faer.
//!
//! This module lets the row-major [`Matrix`] take part in code written
//! against the core traits, and moves data between `Matrix<T>` and
//! `faer::Mat<T>` so results can be cross-checked against faer's
//! factorizations or handed to code that already speaks faer.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)
//! - [num-traits crate documentation](https://docs.rs/num-traits)

use crate::core::traits::{InnerProduct, MatShape, MatVec, Scalar};
use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;
use faer::Mat;

/// Implements matrix-vector multiplication for `Matrix`.
///
/// Computes `y = A * x` where `A` is a dense matrix, `x` and `y` are vectors.
impl<T: Scalar> MatVec<Vec<T>> for Matrix<T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.nrows(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.ncols(), x.len(), "Input vector x has incorrect length");
        for (yi, row) in y.iter_mut().zip(self.data()) {
            *yi = row
                .iter()
                .zip(x.iter())
                .fold(T::zero(), |acc, (&a, &b)| acc + a * b);
        }
    }
}

/// Inner product and norm for plain vectors.
impl<T: Scalar> InnerProduct<Vec<T>> for () {
    type Scalar = T;
    /// Computes the dot product of two vectors: `x^T y`.
    fn dot(&self, x: &Vec<T>, y: &Vec<T>) -> T {
        assert_eq!(x.len(), y.len(), "Vectors must have the same length");
        x.iter()
            .zip(y.iter())
            .fold(T::zero(), |acc, (&xi, &yi)| acc + xi * yi)
    }
    /// Computes the Euclidean norm of a vector: `||x||_2`.
    fn norm(&self, x: &Vec<T>) -> T {
        crate::ops::vector::norm(x)
    }
}

impl<T: Scalar> MatShape for Matrix<T> {
    fn nrows(&self) -> usize {
        Matrix::nrows(self)
    }
    fn ncols(&self) -> usize {
        Matrix::ncols(self)
    }
}

impl<T: Scalar> Matrix<T> {
    /// Copy into a column-major `faer::Mat`.
    pub fn to_faer(&self) -> Mat<T> {
        Mat::from_fn(self.nrows(), self.ncols(), |i, j| self[(i, j)])
    }

    /// Copy out of a `faer::Mat`. Fails on an empty matrix.
    pub fn from_faer(m: &Mat<T>) -> Result<Self> {
        if m.nrows() == 0 || m.ncols() == 0 {
            return Err(LinalgError::Dimension(format!(
                "matrix must have at least one row and one column, got {}x{}",
                m.nrows(),
                m.ncols()
            )));
        }
        Ok(Matrix::from_fn_unchecked(m.nrows(), m.ncols(), |i, j| m[(i, j)]))
    }
}
