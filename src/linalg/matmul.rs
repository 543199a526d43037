//! Matrix multiplication operations.

use crate::{
    error::{MatrustError, Result},
    matrix::Matrix,
};
use std::ops::Mul;

/// Matrix product `lhs · rhs`.
///
/// Requires `lhs.cols() == rhs.rows()`; the result is `lhs.rows() × rhs.cols()`.
pub fn matmul(lhs: &Matrix, rhs: &Matrix) -> Result<Matrix> {
    if lhs.cols() != rhs.rows() {
        return Err(MatrustError::dimension_mismatch(lhs.shape(), rhs.shape()));
    }
    Ok(product(lhs, rhs))
}

/// Product of two matrices whose inner dimensions are known to agree.
pub(crate) fn product(lhs: &Matrix, rhs: &Matrix) -> Matrix {
    let m = lhs.rows();
    let n = rhs.cols();
    let k = lhs.cols();

    let lhs_data = lhs.as_slice();
    let rhs_data = rhs.as_slice();
    let mut result_data = vec![0.0; m * n];

    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0;
            for l in 0..k {
                sum += lhs_data[i * k + l] * rhs_data[l * n + j];
            }
            result_data[i * n + j] = sum;
        }
    }

    Matrix::from_raw(m, n, result_data)
}

impl Matrix {
    /// Returns `self · rhs`.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        matmul(self, rhs)
    }

    /// Replaces `self` with `self · rhs`.
    ///
    /// The shape of `self` changes to `self.rows() × rhs.cols()`.
    pub fn matmul_in_place(&mut self, rhs: &Matrix) -> Result<()> {
        *self = matmul(self, rhs)?;
        Ok(())
    }
}

impl Mul for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: Self) -> Result<Matrix> {
        matmul(self, rhs)
    }
}
