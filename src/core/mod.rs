//! Traits, shape validation and faer interop.

pub mod shape;
pub mod traits;
pub mod wrappers;

pub use shape::{Operands, Operation};
pub use traits::{InnerProduct, MatShape, MatVec, Scalar};
