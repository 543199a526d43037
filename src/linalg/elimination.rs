//! Gaussian elimination with partial pivoting.
//!
//! Forward elimination brings a matrix to row-echelon form; full reduction
//! continues to reduced row-echelon form. Both can carry a companion matrix
//! (typically a right-hand side or an identity block) through the same row
//! operations in lock-step.

use crate::{
    config::EPSILON,
    error::{MatrustError, Result},
    matrix::Matrix,
};

/// How far elimination proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// Row-echelon form: entries below each pivot are zeroed.
    Forward,
    /// Reduced row-echelon form: pivots are normalized to one and every other
    /// entry in a pivot column is zeroed.
    Full,
}

/// What to do when a column has no usable pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pivoting {
    /// Skip the column and keep the current pivot row.
    Lenient,
    /// Fail with [`MatrustError::Singular`].
    Strict,
}

/// Result of an elimination pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Echelon {
    /// The eliminated copy of the input.
    pub matrix: Matrix,
    /// Number of row swaps performed by partial pivoting.
    pub swaps: usize,
    /// Number of pivots found during the forward pass.
    pub pivots: usize,
}

struct Sweep {
    swaps: usize,
    pivots: usize,
    zero_pivot: Option<usize>,
}

/// `m[target] += factor * m[source]`
fn add_scaled_row(m: &mut Matrix, target: usize, source: usize, factor: f64) {
    let cols = m.cols();
    let data = m.as_mut_slice();
    for j in 0..cols {
        data[target * cols + j] += factor * data[source * cols + j];
    }
}

fn divide_row(m: &mut Matrix, row: usize, divisor: f64) {
    let cols = m.cols();
    for x in &mut m.as_mut_slice()[row * cols..(row + 1) * cols] {
        *x /= divisor;
    }
}

fn forward(work: &mut Matrix, mut companion: Option<&mut Matrix>, pivoting: Pivoting) -> Sweep {
    let (rows, cols) = work.shape();
    let mut swaps = 0;
    let mut row = 0;

    for col in 0..cols {
        if row >= rows {
            break;
        }

        // Partial pivoting
        let data = work.as_slice();
        let mut pivot_row = row;
        let mut magnitude = data[row * cols + col].abs();
        for k in (row + 1)..rows {
            let candidate = data[k * cols + col].abs();
            if candidate > magnitude {
                magnitude = candidate;
                pivot_row = k;
            }
        }

        if magnitude < EPSILON {
            if pivoting == Pivoting::Strict {
                return Sweep {
                    swaps,
                    pivots: row,
                    zero_pivot: Some(col),
                };
            }
            tracing::trace!(col, row, "no pivot in column, skipping");
            continue;
        }

        if pivot_row != row {
            work.swap_rows_unchecked(row, pivot_row);
            if let Some(rhs) = companion.as_deref_mut() {
                rhs.swap_rows_unchecked(row, pivot_row);
            }
            swaps += 1;
        }

        let pivot = work.as_slice()[row * cols + col];
        for k in (row + 1)..rows {
            let factor = work.as_slice()[k * cols + col] / pivot;
            if factor == 0.0 {
                continue;
            }
            add_scaled_row(work, k, row, -factor);
            work.as_mut_slice()[k * cols + col] = 0.0;
            if let Some(rhs) = companion.as_deref_mut() {
                add_scaled_row(rhs, k, row, -factor);
            }
        }

        row += 1;
    }

    Sweep {
        swaps,
        pivots: row,
        zero_pivot: None,
    }
}

fn reduce(work: &mut Matrix, mut companion: Option<&mut Matrix>) {
    let (rows, cols) = work.shape();

    for row in 0..rows {
        let lead = work.as_slice()[row * cols..(row + 1) * cols]
            .iter()
            .position(|v| v.abs() > EPSILON);
        let Some(col) = lead else {
            continue;
        };

        let pivot = work.as_slice()[row * cols + col];
        divide_row(work, row, pivot);
        work.as_mut_slice()[row * cols + col] = 1.0;
        if let Some(rhs) = companion.as_deref_mut() {
            divide_row(rhs, row, pivot);
        }

        for other in (0..rows).filter(|&k| k != row) {
            let factor = work.as_slice()[other * cols + col];
            if factor == 0.0 {
                continue;
            }
            add_scaled_row(work, other, row, -factor);
            work.as_mut_slice()[other * cols + col] = 0.0;
            if let Some(rhs) = companion.as_deref_mut() {
                add_scaled_row(rhs, other, row, -factor);
            }
        }
    }
}

/// Runs Gaussian elimination on a private copy of `matrix`.
///
/// When `companion` is given, every row swap, row combination and row
/// normalization applied to the working copy is applied to it as well. On a
/// `Singular` error the companion may already be partially transformed.
///
/// # Errors
///
/// * `DimensionMismatch` if the companion's row count differs from `matrix`'s.
/// * `Singular` if `pivoting` is `Strict` and a column has no pivot of
///   magnitude at least [`EPSILON`].
pub fn eliminate(
    matrix: &Matrix,
    mut companion: Option<&mut Matrix>,
    reduction: Reduction,
    pivoting: Pivoting,
) -> Result<Echelon> {
    if let Some(rhs) = companion.as_deref() {
        if rhs.rows() != matrix.rows() {
            return Err(MatrustError::dimension_mismatch(matrix.shape(), rhs.shape()));
        }
    }

    let mut work = matrix.clone();
    let sweep = forward(&mut work, companion.as_deref_mut(), pivoting);
    if let Some(col) = sweep.zero_pivot {
        tracing::debug!(col, shape = ?matrix.shape(), "zero pivot, matrix is singular");
        return Err(MatrustError::Singular);
    }

    if reduction == Reduction::Full {
        reduce(&mut work, companion);
    }

    Ok(Echelon {
        matrix: work,
        swaps: sweep.swaps,
        pivots: sweep.pivots,
    })
}

impl Matrix {
    /// Row-echelon form with swap and pivot counts. Rank-deficient columns
    /// are skipped.
    pub fn row_echelon(&self) -> Echelon {
        let mut work = self.clone();
        let sweep = forward(&mut work, None, Pivoting::Lenient);
        Echelon {
            matrix: work,
            swaps: sweep.swaps,
            pivots: sweep.pivots,
        }
    }

    /// Reduced row-echelon form.
    pub fn reduced_row_echelon(&self) -> Matrix {
        let mut work = self.clone();
        forward(&mut work, None, Pivoting::Lenient);
        reduce(&mut work, None);
        work
    }

    /// See [`eliminate`].
    pub fn eliminate(
        &self,
        companion: Option<&mut Matrix>,
        reduction: Reduction,
        pivoting: Pivoting,
    ) -> Result<Echelon> {
        eliminate(self, companion, reduction, pivoting)
    }
}
