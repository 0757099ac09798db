//! matrixlib: dense matrix and vector kernels
//!
//! This crate provides stateless linear-algebra operations over a row-major
//! dense [`Matrix`]: products, elementwise arithmetic, transpose, dot and
//! cross products, and the elimination-backed determinant, inverse and
//! linear solve. Every operation validates operand shapes before computing
//! and works on its own copies, so values can be shared freely across
//! threads.
//!
//! ```rust
//! use matrixlib::{Matrix, multiply, inverse, determinant};
//! let a: Matrix<f64> = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! let b: Matrix<f64> = Matrix::new(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
//! assert_eq!(multiply(&a, &b).unwrap().data(), &[vec![19.0, 22.0], vec![43.0, 50.0]]);
//! assert!((determinant(&a).unwrap() + 2.0).abs() < 1e-12);
//! let inv = inverse(&a).unwrap();
//! assert!((inv[(1, 0)] - 1.5).abs() < 1e-12);
//! ```

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use context::*;
pub use self::core::*;
pub use error::*;
pub use matrix::*;
pub use ops::*;
pub use solver::*;
pub use utils::*;
