//! Row-major dense matrix.
//!
//! `Matrix<T>` owns a rectangular grid of scalars stored as a list of rows.
//! The shape is validated once at construction (every row the same length,
//! at least one row and one column), so the kernels never see jagged or
//! empty input.

use crate::core::traits::Scalar;
use crate::error::{LinalgError, Result};
use crate::{ops, solver};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Dense `nrows × ncols` matrix with row-major storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    data: Vec<Vec<T>>,
    nrows: usize,
    ncols: usize,
}

fn non_empty(nrows: usize, ncols: usize) -> Result<()> {
    if nrows == 0 || ncols == 0 {
        return Err(LinalgError::Dimension(format!(
            "matrix must have at least one row and one column, got {nrows}x{ncols}"
        )));
    }
    Ok(())
}

impl<T: Scalar> Matrix<T> {
    /// Build from an explicit list of rows, rejecting empty or jagged input.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        non_empty(nrows, ncols)?;
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
            return Err(LinalgError::Dimension(format!(
                "row {i} has {} columns, expected {ncols}",
                row.len()
            )));
        }
        Ok(Self { data: rows, nrows, ncols })
    }

    /// Zero-filled `nrows × ncols` matrix.
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self> {
        non_empty(nrows, ncols)?;
        Ok(Self::from_fn_unchecked(nrows, ncols, |_, _| T::zero()))
    }

    /// `n × n` identity.
    pub fn identity(n: usize) -> Result<Self> {
        non_empty(n, n)?;
        Ok(Self::identity_unchecked(n))
    }

    /// Build from a generator `f(i, j)`.
    pub fn from_fn<F>(nrows: usize, ncols: usize, f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        non_empty(nrows, ncols)?;
        Ok(Self::from_fn_unchecked(nrows, ncols, f))
    }

    /// Caller guarantees a non-empty shape.
    pub(crate) fn from_fn_unchecked<F>(nrows: usize, ncols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let data = (0..nrows)
            .map(|i| (0..ncols).map(|j| f(i, j)).collect())
            .collect();
        Self { data, nrows, ncols }
    }

    pub(crate) fn identity_unchecked(n: usize) -> Self {
        Self::from_fn_unchecked(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// True for a single row or a single column.
    pub fn is_vector(&self) -> bool {
        self.nrows == 1 || self.ncols == 1
    }

    /// Underlying rows.
    pub fn data(&self) -> &[Vec<T>] {
        &self.data
    }

    pub fn row(&self, i: usize) -> Option<&[T]> {
        self.data.get(i).map(Vec::as_slice)
    }

    /// Consume the matrix, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.data
    }

    /// Bounds-checked element read.
    pub fn get(&self, i: usize, j: usize) -> Result<T> {
        self.check_index(i, j)?;
        Ok(self.data[i][j])
    }

    /// Bounds-checked element write.
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<()> {
        self.check_index(i, j)?;
        self.data[i][j] = value;
        Ok(())
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.nrows || col >= self.ncols {
            return Err(LinalgError::IndexOutOfBounds {
                row,
                col,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(())
    }

    /// Copy with row `row` and column `col` removed. `None` for 1×1 input
    /// or out-of-range indices.
    pub fn minor(&self, row: usize, col: usize) -> Option<Self> {
        if !self.is_square() || self.nrows < 2 || row >= self.nrows || col >= self.ncols {
            return None;
        }
        let data = self
            .data
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != row)
            .map(|(_, r)| {
                r.iter()
                    .enumerate()
                    .filter(|&(j, _)| j != col)
                    .map(|(_, &v)| v)
                    .collect()
            })
            .collect();
        Some(Self {
            data,
            nrows: self.nrows - 1,
            ncols: self.ncols - 1,
        })
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<T>] {
        &mut self.data
    }
}

/// Method forms of the free kernels, using default kernel options.
impl<T: Scalar> Matrix<T> {
    pub fn multiply(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        ops::multiply(self, other)
    }

    /// `self · x` with `x` as a column.
    pub fn multiply_vector(&self, x: &[T]) -> Result<Vec<T>> {
        ops::multiply_vector(self, x)
    }

    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        ops::add(self, other)
    }

    pub fn subtract(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        ops::subtract(self, other)
    }

    pub fn scale(&self, s: T) -> Matrix<T> {
        ops::scalar_multiply(self, s)
    }

    pub fn transpose(&self) -> Matrix<T> {
        // A constructed matrix is never empty.
        Matrix::from_fn_unchecked(self.ncols, self.nrows, |i, j| self.data[j][i])
    }

    pub fn determinant(&self) -> Result<T> {
        solver::determinant(self)
    }

    pub fn inverse(&self) -> Result<Matrix<T>> {
        solver::inverse(self)
    }

    pub fn solve(&self, b: &[T]) -> Result<Vec<T>> {
        solver::solve(self, b)
    }
}

impl<T: Scalar> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = LinalgError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Matrix::new(rows)
    }
}

impl<T> From<Matrix<T>> for Vec<Vec<T>> {
    fn from(m: Matrix<T>) -> Self {
        m.data
    }
}

/// Panics on out-of-range indices; use [`Matrix::get`] for a checked read.
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[i][j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.data[i][j]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix([")?;
        for row in &self.data {
            write!(f, "  [")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v:.6}")?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_jagged_and_empty_input() {
        let jagged = Matrix::<f64>::new(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(jagged, Err(LinalgError::Dimension(_))));
        assert!(Matrix::<f64>::new(vec![]).is_err());
        assert!(Matrix::<f64>::new(vec![vec![]]).is_err());
        assert!(Matrix::<f64>::zeros(0, 3).is_err());
    }

    #[test]
    fn zeros_and_accessors() {
        let mut m = Matrix::<f64>::zeros(2, 3).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert!(!m.is_square());
        m.set(1, 2, 7.5).unwrap();
        assert_eq!(m.get(1, 2).unwrap(), 7.5);
        assert_eq!(m[(1, 2)], 7.5);
        assert_eq!(m.row(1).unwrap(), &[0.0, 0.0, 7.5]);
        assert_eq!(
            m.get(2, 0),
            Err(LinalgError::IndexOutOfBounds { row: 2, col: 0, nrows: 2, ncols: 3 })
        );
        assert!(m.set(0, 3, 1.0).is_err());
    }

    #[test]
    fn vector_predicate() {
        assert!(Matrix::<f64>::new(vec![vec![1.0, 2.0, 3.0]]).unwrap().is_vector());
        assert!(Matrix::<f64>::new(vec![vec![1.0], vec![2.0]]).unwrap().is_vector());
        assert!(!Matrix::<f64>::identity(2).unwrap().is_vector());
    }

    #[test]
    fn minor_drops_row_and_column() {
        let m: Matrix<f64> = Matrix::<f64>::new(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .unwrap();
        let minor = m.minor(0, 1).unwrap();
        assert_eq!(minor.data(), &[vec![4.0, 6.0], vec![7.0, 9.0]]);
        assert!(Matrix::<f64>::new(vec![vec![1.0]]).unwrap().minor(0, 0).is_none());
    }

    #[test]
    fn method_forms() {
        let a: Matrix<f64> = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b: Matrix<f64> = Matrix::new(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        assert_eq!(a.multiply(&b).unwrap().data(), &[vec![19.0, 22.0], vec![43.0, 50.0]]);
        assert_eq!(a.add(&b).unwrap().subtract(&b).unwrap(), a);
        assert_eq!(a.transpose().data(), &[vec![1.0, 3.0], vec![2.0, 4.0]]);
        assert_eq!(a.scale(0.5)[(1, 1)], 2.0);
        assert!((a.determinant().unwrap() + 2.0).abs() < 1e-12);
    }

    #[test]
    fn display_lists_rows() {
        let m: Matrix<f64> = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(
            m.to_string(),
            "Matrix([\n  [1.000000, 2.000000]\n  [3.000000, 4.000000]\n])"
        );
    }
}
