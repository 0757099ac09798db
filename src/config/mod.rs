//! Kernel configuration.

pub mod options;
pub use options::{DEFAULT_PIVOT_TOL, DeterminantStrategy, KernelOptions, Pivoting};
