//! Core dense matrix type.
//!
//! `Matrix` owns a flat row-major buffer of `f64` values together with its row
//! and column counts. The shape is fixed at construction; values are mutable
//! through bounds-checked accessors.

use crate::{
    config::{DISPLAY_PRECISION, DISPLAY_WIDTH, MAX_ELEMENTS, WARN_ELEMENTS},
    error::{MatrustError, Result},
};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A dense, row-major matrix of `f64`.
///
/// Element `(i, j)` lives at `data[i * cols + j]`. Two matrices are equal when
/// their shapes match and every element compares exactly equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

/// Validates a requested shape and returns its element count.
fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(MatrustError::InvalidDimensions { rows, cols });
    }
    let elements = rows.checked_mul(cols).ok_or(MatrustError::TooLarge {
        elements: usize::MAX,
        limit: MAX_ELEMENTS,
    })?;
    if elements >= MAX_ELEMENTS {
        return Err(MatrustError::TooLarge {
            elements,
            limit: MAX_ELEMENTS,
        });
    }
    if elements >= WARN_ELEMENTS {
        tracing::warn!(rows, cols, elements, "large matrix may slow down performance");
    }
    Ok(elements)
}

impl Matrix {
    /// Creates a `rows × cols` matrix filled with zeros.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if either dimension is zero, `TooLarge` if the
    /// element count reaches [`MAX_ELEMENTS`].
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, 0.0)
    }

    /// Creates a `rows × cols` matrix with every element set to `value`.
    ///
    /// # Errors
    ///
    /// Same as [`Matrix::new`].
    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        Ok(Self::from_raw(rows, cols, vec![value; len]))
    }

    /// Creates a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// `DataLength` if `data.len() != rows * cols`, otherwise the same
    /// errors as [`Matrix::new`].
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        if data.len() != len {
            return Err(MatrustError::DataLength {
                expected: len,
                actual: data.len(),
            });
        }
        Ok(Self::from_raw(rows, cols, data))
    }

    /// Creates a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` for no rows or empty rows, `DataLength` when the
    /// rows have different lengths.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |row| row.as_ref().len());
        let len = checked_len(nrows, ncols)?;

        let mut data = Vec::with_capacity(len);
        for row in rows {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(MatrustError::DataLength {
                    expected: ncols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self::from_raw(nrows, ncols, data))
    }

    /// Creates an `n × n` identity matrix.
    pub fn identity(size: usize) -> Result<Self> {
        let mut result = Self::new(size, size)?;
        for i in 0..size {
            result.data[i * size + i] = 1.0;
        }
        Ok(result)
    }

    /// Creates a matrix with elements drawn uniformly from `[low, high)`.
    ///
    /// # Errors
    ///
    /// `InvalidRange` unless `low < high` and the width `high - low` is
    /// finite.
    #[cfg(feature = "random")]
    pub fn random(rows: usize, cols: usize, low: f64, high: f64) -> Result<Self> {
        use rand::distributions::{Distribution, Uniform};

        // Uniform::new panics when the width overflows.
        if low >= high || !(high - low).is_finite() {
            return Err(MatrustError::InvalidRange { low, high });
        }
        let len = checked_len(rows, cols)?;
        let mut rng = rand::thread_rng();
        let uniform = Uniform::new(low, high);
        let data = (0..len).map(|_| uniform.sample(&mut rng)).collect();
        Ok(Self::from_raw(rows, cols, data))
    }

    /// Creates a matrix with normally distributed elements.
    ///
    /// # Errors
    ///
    /// `InvalidDistribution` if `mean` is not finite or `std_dev` is negative
    /// or not finite.
    #[cfg(feature = "random")]
    pub fn random_normal(rows: usize, cols: usize, mean: f64, std_dev: f64) -> Result<Self> {
        use rand_distr::{Distribution, Normal};

        let invalid = MatrustError::InvalidDistribution { mean, std_dev };
        if !mean.is_finite() || !std_dev.is_finite() {
            return Err(invalid);
        }
        let normal = Normal::new(mean, std_dev).map_err(|_| invalid)?;
        let len = checked_len(rows, cols)?;
        let mut rng = rand::thread_rng();
        let data = (0..len).map(|_| normal.sample(&mut rng)).collect();
        Ok(Self::from_raw(rows, cols, data))
    }

    /// Wraps a buffer whose shape is already known to be valid.
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// A constructed matrix always holds at least one element.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// The row-major element buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consumes the matrix and returns its row-major buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrustError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Reads the element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        let idx = self.index_of(row, col)?;
        Ok(self.data[idx])
    }

    /// Mutable reference to the element at `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut f64> {
        let idx = self.index_of(row, col)?;
        Ok(&mut self.data[idx])
    }

    /// Writes `value` at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Borrows one row as a slice.
    pub fn row(&self, row: usize) -> Result<&[f64]> {
        self.index_of(row, 0)?;
        let start = row * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    /// Swaps two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<()> {
        self.index_of(a, 0)?;
        self.index_of(b, 0)?;
        if a != b {
            self.swap_rows_unchecked(a, b);
        }
        Ok(())
    }

    pub(crate) fn swap_rows_unchecked(&mut self, a: usize, b: usize) {
        let cols = self.cols;
        for j in 0..cols {
            self.data.swap(a * cols + j, b * cols + j);
        }
    }

    /// Horizontal concatenation `[self | right]`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the row counts differ.
    pub fn augment(&self, right: &Matrix) -> Result<Matrix> {
        if self.rows != right.rows {
            return Err(MatrustError::dimension_mismatch(self.shape(), right.shape()));
        }
        let cols = self.cols + right.cols;
        checked_len(self.rows, cols)?;

        let mut data = Vec::with_capacity(self.rows * cols);
        for (lhs, rhs) in self
            .data
            .chunks_exact(self.cols)
            .zip(right.data.chunks_exact(right.cols))
        {
            data.extend_from_slice(lhs);
            data.extend_from_slice(rhs);
        }
        Ok(Self::from_raw(self.rows, cols, data))
    }

    /// Copies the first `count` rows.
    pub(crate) fn leading_rows(&self, count: usize) -> Matrix {
        let count = count.min(self.rows);
        Self::from_raw(count, self.cols, self.data[..count * self.cols].to_vec())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        match self.index_of(row, col) {
            Ok(idx) => &self.data[idx],
            Err(e) => panic!("{e}"),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        match self.index_of(row, col) {
            Ok(idx) => &mut self.data[idx],
            Err(e) => panic!("{e}"),
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks_exact(self.cols) {
            write!(f, "|")?;
            for value in row {
                write!(
                    f,
                    "{:>width$.prec$}|",
                    value,
                    width = DISPLAY_WIDTH,
                    prec = DISPLAY_PRECISION
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
