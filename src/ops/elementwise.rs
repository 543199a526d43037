//! Element-wise operations for matrices.

use crate::{
    error::{MatrustError, Result},
    matrix::Matrix,
};

/// Apply a function element-wise to a matrix.
pub fn map<F>(matrix: &Matrix, f: F) -> Matrix
where
    F: Fn(f64) -> f64,
{
    let data = matrix.as_slice().iter().map(|&x| f(x)).collect();
    Matrix::from_raw(matrix.rows(), matrix.cols(), data)
}

/// Apply a function element-wise to two matrices of the same shape.
pub fn zip_with<F>(lhs: &Matrix, rhs: &Matrix, f: F) -> Result<Matrix>
where
    F: Fn(f64, f64) -> f64,
{
    if lhs.shape() != rhs.shape() {
        return Err(MatrustError::dimension_mismatch(lhs.shape(), rhs.shape()));
    }

    let data = lhs
        .as_slice()
        .iter()
        .zip(rhs.as_slice())
        .map(|(&a, &b)| f(a, b))
        .collect();
    Ok(Matrix::from_raw(lhs.rows(), lhs.cols(), data))
}

/// In-place variant of [`zip_with`]: `lhs[i] = f(lhs[i], rhs[i])`.
pub fn zip_with_in_place<F>(lhs: &mut Matrix, rhs: &Matrix, f: F) -> Result<()>
where
    F: Fn(f64, f64) -> f64,
{
    if lhs.shape() != rhs.shape() {
        return Err(MatrustError::dimension_mismatch(lhs.shape(), rhs.shape()));
    }

    for (a, &b) in lhs.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
        *a = f(*a, b);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix;

    #[test]
    fn test_map() {
        let a = matrix![[1.0, -2.0], [3.0, -4.0]];
        let b = map(&a, f64::abs);
        assert_eq!(b, matrix![[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn test_zip_with() {
        let a = matrix![[1.0, 2.0, 3.0]];
        let b = matrix![[4.0, 5.0, 6.0]];
        let c = zip_with(&a, &b, f64::max).unwrap();
        assert_eq!(c, b);

        let d = matrix![[1.0], [2.0], [3.0]];
        assert!(matches!(
            zip_with(&a, &d, f64::max),
            Err(MatrustError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_zip_with_in_place() {
        let mut a = matrix![[1.0, 2.0]];
        let b = matrix![[10.0, 20.0]];
        zip_with_in_place(&mut a, &b, |x, y| x * y).unwrap();
        assert_eq!(a, matrix![[10.0, 40.0]]);
    }
}
