//! Classical triple-loop matrix product.

use crate::core::shape::{self, Operands, Operation};
use crate::core::traits::Scalar;
use crate::error::Result;
use crate::matrix::Matrix;

/// `C = A · B`, shape `A.nrows × B.ncols`.
pub fn multiply<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    shape::check(Operation::Multiply, &Operands::binary(a.shape(), b.shape()))?;
    let inner = a.ncols();
    Ok(Matrix::from_fn_unchecked(a.nrows(), b.ncols(), |i, j| {
        (0..inner).fold(T::zero(), |acc, k| acc + a[(i, k)] * b[(k, j)])
    }))
}

/// `y = A · x`, treating `x` as a single column.
pub fn multiply_vector<T: Scalar>(a: &Matrix<T>, x: &[T]) -> Result<Vec<T>> {
    shape::check(
        Operation::MultiplyVector,
        &Operands::binary(a.shape(), (x.len(), 1)),
    )?;
    Ok(a
        .data()
        .iter()
        .map(|row| {
            row.iter()
                .zip(x.iter())
                .fold(T::zero(), |acc, (&aij, &xj)| acc + aij * xj)
        })
        .collect())
}
