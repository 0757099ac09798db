//! Vector kernels over plain slices.

use crate::core::shape::{self, Operands, Operation};
use crate::core::traits::Scalar;
use crate::error::Result;

/// `Σ a[i]·b[i]`.
pub fn dot_product<T: Scalar>(a: &[T], b: &[T]) -> Result<T> {
    shape::check(Operation::DotProduct, &Operands::vectors(a.len(), b.len()))?;
    Ok(a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y))
}

/// `a × b` for 3-vectors.
pub fn cross_product<T: Scalar>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    shape::check(Operation::CrossProduct, &Operands::vectors(a.len(), b.len()))?;
    Ok(vec![
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ])
}

/// Euclidean norm ‖a‖₂.
pub fn norm<T: Scalar>(a: &[T]) -> T {
    a.iter().fold(T::zero(), |acc, &x| acc + x * x).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orthogonal_unit_vectors() {
        let x = [1.0, 0.0, 0.0];
        let y = [0.0, 1.0, 0.0];
        assert_eq!(dot_product(&x, &y).unwrap(), 0.0);
        assert_eq!(cross_product(&x, &y).unwrap(), vec![0.0, 0.0, 1.0]);
        assert_eq!(cross_product(&y, &x).unwrap(), vec![0.0, 0.0, -1.0]);
    }

    #[test]
    fn dot_of_general_vectors() {
        assert_eq!(dot_product(&[1.0, 2.0, 3.0, 4.0], &[4.0, 3.0, 2.0, 1.0]).unwrap(), 20.0);
        assert!(dot_product(&[1.0, 2.0], &[1.0]).is_err());
    }

    #[test]
    fn cross_requires_three_components() {
        assert!(cross_product(&[1.0, 2.0], &[3.0, 4.0]).is_err());
        assert!(cross_product(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0]).is_err());
    }

    #[test]
    fn norm_of_3_4() {
        assert_eq!(norm(&[3.0f64, 4.0]), 5.0);
    }
}
