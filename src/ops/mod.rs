//! Stateless matrix and vector arithmetic.
//!
//! Every function validates operand shapes through [`crate::core::shape`]
//! before computing, and returns a freshly allocated result.

pub mod elementwise;
pub mod multiply;
pub mod vector;

pub use elementwise::{add, scalar_multiply, subtract, transpose};
pub use multiply::{multiply, multiply_vector};
pub use vector::{cross_product, dot_product, norm};
