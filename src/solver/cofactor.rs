//! Determinant by recursive cofactor expansion along row 0.
//!
//! `det A = Σ_j (-1)^j · A[0][j] · det(minor(0, j))`, with closed forms for
//! 1×1 and 2×2. No division and no tolerance check, so integer-valued input
//! gives an exact result, at O(n!) cost. Meant for small matrices.

use crate::core::shape::{self, Operands, Operation};
use crate::core::traits::Scalar;
use crate::error::Result;
use crate::matrix::Matrix;

pub fn cofactor_determinant<T: Scalar>(a: &Matrix<T>) -> Result<T> {
    shape::check(Operation::Determinant, &Operands::unary(a.shape()))?;
    Ok(expand(a))
}

fn expand<T: Scalar>(a: &Matrix<T>) -> T {
    match a.nrows() {
        1 => a[(0, 0)],
        2 => a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)],
        n => (0..n).fold(T::zero(), |det, j| {
            let term = match a.minor(0, j) {
                Some(minor) => a[(0, j)] * expand(&minor),
                None => T::zero(),
            };
            if j % 2 == 0 { det + term } else { det - term }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinalgError;

    #[test]
    fn small_cases() {
        assert_eq!(cofactor_determinant(&Matrix::<f64>::new(vec![vec![5.0]]).unwrap()).unwrap(), 5.0);
        let a: Matrix<f64> = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(cofactor_determinant(&a).unwrap(), -2.0);
    }

    #[test]
    fn exact_for_integer_entries() {
        let a: Matrix<f64> = Matrix::new(vec![
            vec![2.0, -3.0, 1.0],
            vec![2.0, 0.0, -1.0],
            vec![1.0, 4.0, 5.0],
        ])
        .unwrap();
        assert_eq!(cofactor_determinant(&a).unwrap(), 49.0);
    }

    #[test]
    fn permutation_needs_no_pivoting() {
        let a: Matrix<f64> = Matrix::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        assert_eq!(cofactor_determinant(&a).unwrap(), -1.0);
    }

    #[test]
    fn rejects_rectangular() {
        let a = Matrix::<f64>::zeros(2, 3).unwrap();
        assert!(matches!(cofactor_determinant(&a), Err(LinalgError::Dimension(_))));
    }
}
