//! Context module for matrixlib.
//!
//! This module provides the context type that binds a set of
//! [`KernelOptions`](crate::config::KernelOptions) to the elimination-based
//! operations and dispatches on the configured strategies.
//!
//! Modules:
//! - [`linalg_context`]: Contains the `LinalgContext` struct.
//!
//! # Example
//! ```rust
//! use matrixlib::{LinalgContext, KernelOptions, Pivoting, Matrix};
//! let ctx = LinalgContext::new(KernelOptions::default().with_pivoting(Pivoting::Partial));
//! let a: Matrix<f64> = Matrix::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
//! assert_eq!(ctx.determinant(&a).unwrap(), -1.0);
//! ```

pub mod linalg_context;
pub use linalg_context::LinalgContext;
