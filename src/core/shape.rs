//! Shape validation run before any kernel touches data.
//!
//! Every public operation calls [`check`] with its [`Operation`] and operand
//! shapes first, so an incompatible call fails with
//! [`LinalgError::Dimension`] before anything is allocated or computed.

use crate::error::{LinalgError, Result};
use std::fmt;

/// Operation kinds with their dimension contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `A.ncols == B.nrows`, both non-empty.
    Multiply,
    /// Matrix times a column vector: `A.ncols == x.len()`.
    MultiplyVector,
    /// Identical shapes.
    Add,
    /// Identical shapes.
    Subtract,
    /// Square, non-empty.
    Inverse,
    /// Square, non-empty.
    Determinant,
    /// Square, non-empty, and `b.len() == A.nrows`.
    Solve,
    /// Non-empty.
    Transpose,
    /// Equal, non-zero lengths.
    DotProduct,
    /// Both lengths exactly 3.
    CrossProduct,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Multiply => "multiply",
            Operation::MultiplyVector => "matrix-vector multiply",
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Inverse => "inverse",
            Operation::Determinant => "determinant",
            Operation::Solve => "solve",
            Operation::Transpose => "transpose",
            Operation::DotProduct => "dot product",
            Operation::CrossProduct => "cross product",
        };
        f.write_str(name)
    }
}

/// Operand shapes as seen by the validator. Vectors are `(len, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    pub lhs: (usize, usize),
    pub rhs: Option<(usize, usize)>,
}

impl Operands {
    pub fn unary(lhs: (usize, usize)) -> Self {
        Self { lhs, rhs: None }
    }

    pub fn binary(lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        Self { lhs, rhs: Some(rhs) }
    }

    pub fn vectors(a: usize, b: usize) -> Self {
        Self::binary((a, 1), (b, 1))
    }
}

fn is_empty(shape: (usize, usize)) -> bool {
    shape.0 == 0 || shape.1 == 0
}

fn fail(op: Operation, detail: String) -> LinalgError {
    LinalgError::Dimension(format!("{op}: {detail}"))
}

fn rhs_of(op: Operation, ops: &Operands) -> Result<(usize, usize)> {
    ops.rhs
        .ok_or_else(|| fail(op, "missing right-hand operand".to_string()))
}

/// Confirm that `ops` satisfy the dimension contract of `op`.
pub fn check(op: Operation, ops: &Operands) -> Result<()> {
    let (r, c) = ops.lhs;
    match op {
        Operation::Multiply | Operation::MultiplyVector => {
            let (br, bc) = rhs_of(op, ops)?;
            if is_empty(ops.lhs) || is_empty((br, bc)) {
                return Err(fail(op, "operands must be non-empty".to_string()));
            }
            if c != br {
                return Err(fail(
                    op,
                    format!("cannot multiply {r}x{c} by {br}x{bc}"),
                ));
            }
        }
        Operation::Add | Operation::Subtract => {
            let rhs = rhs_of(op, ops)?;
            if is_empty(ops.lhs) || ops.lhs != rhs {
                return Err(fail(
                    op,
                    format!("shapes {r}x{c} and {}x{} differ", rhs.0, rhs.1),
                ));
            }
        }
        Operation::Inverse | Operation::Determinant | Operation::Solve => {
            if is_empty(ops.lhs) || r != c {
                return Err(fail(
                    op,
                    format!("matrix must be square and non-empty, got {r}x{c}"),
                ));
            }
            if op == Operation::Solve {
                let (len, _) = rhs_of(op, ops)?;
                if len != r {
                    return Err(fail(
                        op,
                        format!("right-hand side has length {len}, expected {r}"),
                    ));
                }
            }
        }
        Operation::Transpose => {
            if is_empty(ops.lhs) {
                return Err(fail(op, "matrix cannot be empty".to_string()));
            }
        }
        Operation::DotProduct => {
            let (len, _) = rhs_of(op, ops)?;
            if r == 0 || r != len {
                return Err(fail(
                    op,
                    format!("vectors must have the same non-zero length, got {r} and {len}"),
                ));
            }
        }
        Operation::CrossProduct => {
            let (len, _) = rhs_of(op, ops)?;
            if r != 3 || len != 3 {
                return Err(fail(
                    op,
                    format!("only defined for 3D vectors, got {r} and {len}"),
                ));
            }
        }
    }
    Ok(())
}
