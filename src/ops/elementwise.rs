//! Elementwise kernels: add, subtract, scale, transpose.

use crate::core::shape::{self, Operands, Operation};
use crate::core::traits::Scalar;
use crate::error::Result;
use crate::matrix::Matrix;

fn zip_with<T: Scalar>(
    op: Operation,
    a: &Matrix<T>,
    b: &Matrix<T>,
    f: impl Fn(T, T) -> T,
) -> Result<Matrix<T>> {
    shape::check(op, &Operands::binary(a.shape(), b.shape()))?;
    Ok(Matrix::from_fn_unchecked(a.nrows(), a.ncols(), |i, j| {
        f(a[(i, j)], b[(i, j)])
    }))
}

/// `A + B`, elementwise.
pub fn add<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    zip_with(Operation::Add, a, b, |x, y| x + y)
}

/// `A - B`, elementwise.
pub fn subtract<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    zip_with(Operation::Subtract, a, b, |x, y| x - y)
}

/// `s · A`. Never fails.
pub fn scalar_multiply<T: Scalar>(a: &Matrix<T>, s: T) -> Matrix<T> {
    Matrix::from_fn_unchecked(a.nrows(), a.ncols(), |i, j| a[(i, j)] * s)
}

/// `Aᵀ`, a new `ncols × nrows` matrix.
pub fn transpose<T: Scalar>(a: &Matrix<T>) -> Result<Matrix<T>> {
    shape::check(Operation::Transpose, &Operands::unary(a.shape()))?;
    Ok(Matrix::from_fn_unchecked(a.ncols(), a.nrows(), |i, j| a[(j, i)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinalgError;

    fn m(rows: Vec<Vec<f64>>) -> Matrix<f64> {
        Matrix::new(rows).unwrap()
    }

    #[test]
    fn add_and_subtract_same_shape() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        assert_eq!(add(&a, &b).unwrap().data(), &[vec![6.0, 8.0], vec![10.0, 12.0]]);
        assert_eq!(subtract(&b, &a).unwrap().data(), &[vec![4.0, 4.0], vec![4.0, 4.0]]);
    }

    #[test]
    fn add_rejects_shape_mismatch() {
        let a = m(vec![vec![1.0, 2.0]]);
        let b = m(vec![vec![1.0], vec![2.0]]);
        assert!(matches!(add(&a, &b), Err(LinalgError::Dimension(_))));
        assert!(matches!(subtract(&a, &b), Err(LinalgError::Dimension(_))));
    }

    #[test]
    fn scale_and_transpose() {
        let a = m(vec![vec![1.0, -2.0, 3.0]]);
        assert_eq!(scalar_multiply(&a, 2.0).data(), &[vec![2.0, -4.0, 6.0]]);
        let t = transpose(&a).unwrap();
        assert_eq!(t.shape(), (3, 1));
        assert_eq!(t.data(), &[vec![1.0], vec![-2.0], vec![3.0]]);
    }
}
