//! Tests for core dense matrix operations: matrix-vector multiplication, dot product, and norm.
//!
//! These tests verify the MatVec and InnerProduct trait implementations and the
//! free vector kernels against manual computations, using random and fixed data.

use approx::assert_abs_diff_eq;
use matrixlib::core::traits::{InnerProduct, MatVec};
use matrixlib::{Matrix, cross_product, dot_product, multiply_vector};
use rand::Rng;

/// Test matrix-vector multiplication for a small random dense matrix.
///
/// Builds a random 5x5 matrix and vector, computes the product through both
/// the MatVec trait and `multiply_vector`, and checks them against a manual sum.
#[test]
fn matvec_random_small() {
    let n = 5;
    let mut rng = rand::thread_rng();
    let vals: Vec<f64> = (0..n * n).map(|_| rng.r#gen()).collect();
    let a = Matrix::from_fn(n, n, |i, j| vals[i * n + j]).unwrap();
    let x: Vec<f64> = (0..n).map(|_| rng.r#gen()).collect();
    let mut y = vec![0.0; n];
    a.matvec(&x, &mut y);
    let z = multiply_vector(&a, &x).unwrap();

    for i in 0..n {
        let expected = (0..n).map(|j| vals[i * n + j] * x[j]).sum::<f64>();
        assert_abs_diff_eq!(y[i], expected, epsilon = 1e-12);
        assert_abs_diff_eq!(z[i], expected, epsilon = 1e-12);
    }
}

/// Test dot product and Euclidean norm for small vectors.
#[test]
fn dot_and_norm() {
    let x = vec![1.0, 2.0, 3.0];
    let y = vec![4.0, -5.0, 6.0];
    let ip = ();
    let dot = ip.dot(&x, &y);
    assert_abs_diff_eq!(dot, 1.0 * 4.0 + 2.0 * (-5.0) + 3.0 * 6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(dot_product(&x, &y).unwrap(), dot, epsilon = 1e-12);
    let norm_x = ip.norm(&x);
    let expected_norm = ((1.0f64).powi(2) + 2.0f64.powi(2) + 3.0f64.powi(2)).sqrt();
    assert_abs_diff_eq!(norm_x, expected_norm, epsilon = 1e-12);
}

/// The cross product is orthogonal to both operands.
#[test]
fn cross_product_is_orthogonal() {
    let mut rng = rand::thread_rng();
    let a: Vec<f64> = (0..3).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let b: Vec<f64> = (0..3).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let c = cross_product(&a, &b).unwrap();
    assert_abs_diff_eq!(dot_product(&a, &c).unwrap(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(dot_product(&b, &c).unwrap(), 0.0, epsilon = 1e-12);
}
