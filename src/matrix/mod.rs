//! Matrix module: the dense row-major container and its arithmetic.

pub mod dense;
pub use dense::Matrix;
