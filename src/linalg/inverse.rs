//! Matrix inversion and determinant.

use super::elimination::{eliminate, Pivoting, Reduction};
use crate::{
    config::EPSILON,
    error::{MatrustError, Result},
    matrix::Matrix,
};

/// Compute the determinant of a square matrix.
///
/// Forward elimination with partial pivoting; the determinant is the product
/// of the echelon diagonal, negated for an odd number of row swaps. A column
/// without a pivot, or a product smaller than [`EPSILON`] in magnitude, gives
/// exactly `0.0`.
pub fn determinant(matrix: &Matrix) -> Result<f64> {
    if !matrix.is_square() {
        return Err(MatrustError::not_square(matrix.shape()));
    }

    let n = matrix.rows();
    let echelon = matrix.row_echelon();
    if echelon.pivots < n {
        return Ok(0.0);
    }

    let data = echelon.matrix.as_slice();
    let det: f64 = (0..n).map(|i| data[i * n + i]).product();
    if det.abs() < EPSILON {
        return Ok(0.0);
    }

    Ok(if echelon.swaps % 2 == 1 { -det } else { det })
}

/// Compute the inverse of a square matrix.
///
/// Fully reduces `[A | I]`; the identity block ends up holding `A⁻¹`.
pub fn inverse(matrix: &Matrix) -> Result<Matrix> {
    if !matrix.is_square() {
        return Err(MatrustError::not_square(matrix.shape()));
    }

    let mut inv = Matrix::identity(matrix.rows())?;
    eliminate(matrix, Some(&mut inv), Reduction::Full, Pivoting::Strict)?;
    Ok(inv)
}

impl Matrix {
    pub fn determinant(&self) -> Result<f64> {
        determinant(self)
    }

    pub fn inverse(&self) -> Result<Matrix> {
        inverse(self)
    }
}
