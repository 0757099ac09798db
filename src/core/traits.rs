//! Core linear-algebra traits for matrixlib.

use num_traits::Float;
use std::fmt::{Debug, Display};

/// Element type accepted by every kernel.
pub trait Scalar: Float + Debug + Display + Send + Sync + 'static {}

impl<T: Float + Debug + Display + Send + Sync + 'static> Scalar for T {}

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x.
    fn matvec(&self, x: &V, y: &mut V);
}

/// Inner products & norms.
pub trait InnerProduct<V> {
    /// Associated scalar type.
    type Scalar: Copy + PartialOrd;
    /// Compute dot(x, y).
    fn dot(&self, x: &V, y: &V) -> Self::Scalar;
    /// Compute ‖x‖₂.
    fn norm(&self, x: &V) -> Self::Scalar;
}

/// Row/column counts of a matrix-like value.
pub trait MatShape {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;

    fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}
