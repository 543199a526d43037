//! Linear system solving and classification.

use super::{
    elimination::{eliminate, Pivoting, Reduction},
    rank::rank,
};
use crate::{
    error::{MatrustError, Result},
    matrix::Matrix,
};

/// Classification of a linear system `Ax = b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    Unique,
    Infinite,
    NoSolution,
}

/// Outcome of [`solve`]. Only a unique solution carries a vector.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// The single solution `x`, shaped `cols(A) × 1`.
    Unique(Matrix),
    /// Consistent but underdetermined.
    Infinite,
    /// Inconsistent.
    NoSolution,
}

impl Solution {
    pub fn status(&self) -> SolveStatus {
        match self {
            Solution::Unique(_) => SolveStatus::Unique,
            Solution::Infinite => SolveStatus::Infinite,
            Solution::NoSolution => SolveStatus::NoSolution,
        }
    }

    pub fn is_unique(&self) -> bool {
        matches!(self, Solution::Unique(_))
    }

    /// The solution vector, if unique.
    pub fn vector(&self) -> Option<&Matrix> {
        match self {
            Solution::Unique(x) => Some(x),
            _ => None,
        }
    }

    pub fn into_vector(self) -> Option<Matrix> {
        match self {
            Solution::Unique(x) => Some(x),
            _ => None,
        }
    }
}

/// Solve `Ax = b` for a column vector `b`.
///
/// The system is classified by comparing `rank(A)` with `rank([A | b])`:
/// a larger augmented rank means no solution; otherwise a rank below the
/// number of unknowns means infinitely many. Only a unique system is reduced
/// to obtain `x`.
///
/// # Errors
///
/// `DimensionMismatch` unless `b` is `rows(A) × 1`.
pub fn solve(a: &Matrix, b: &Matrix) -> Result<Solution> {
    if b.cols() != 1 || b.rows() != a.rows() {
        return Err(MatrustError::dimension_mismatch(a.shape(), b.shape()));
    }

    let rank_a = rank(a);
    let rank_aug = rank(&a.augment(b)?);

    if rank_aug > rank_a {
        tracing::debug!(rank_a, rank_aug, "inconsistent system");
        return Ok(Solution::NoSolution);
    }
    if rank_a < a.cols() {
        tracing::debug!(rank_a, unknowns = a.cols(), "underdetermined system");
        return Ok(Solution::Infinite);
    }

    let mut x = b.clone();
    eliminate(a, Some(&mut x), Reduction::Full, Pivoting::Strict)?;
    // Rows past the unknowns hold the residuals of redundant equations.
    Ok(Solution::Unique(x.leading_rows(a.cols())))
}

impl Matrix {
    /// Solves `self · x = b`. See [`solve`].
    pub fn solve(&self, b: &Matrix) -> Result<Solution> {
        solve(self, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_unique() {
        let a = matrix![[2.0, 1.0], [1.0, 1.0]];
        let b = matrix![[1.0], [1.0]];
        let solution = solve(&a, &b).unwrap();

        assert_eq!(solution.status(), SolveStatus::Unique);
        let x = solution.vector().unwrap();
        assert_eq!(x.shape(), (2, 1));
        assert_abs_diff_eq!(x[(0, 0)], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[(1, 0)], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_no_solution() {
        let a = matrix![[1.0, 1.0], [1.0, 1.0]];
        let b = matrix![[1.0], [2.0]];
        let solution = a.solve(&b).unwrap();
        assert_eq!(solution, Solution::NoSolution);
        assert!(solution.vector().is_none());
    }

    #[test]
    fn test_infinite() {
        let a = matrix![[1.0, 1.0], [2.0, 2.0]];
        let b = matrix![[2.0], [4.0]];
        assert_eq!(a.solve(&b).unwrap().status(), SolveStatus::Infinite);
    }

    #[test]
    fn test_inconsistency_checked_first() {
        // Underdetermined and inconsistent at once.
        let a = matrix![[1.0, 1.0, 1.0], [1.0, 1.0, 1.0]];
        let b = matrix![[1.0], [3.0]];
        assert_eq!(a.solve(&b).unwrap(), Solution::NoSolution);
    }

    #[test]
    fn test_overdetermined_consistent() {
        let a = matrix![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
        let b = matrix![[2.0], [3.0], [5.0]];
        let x = a.solve(&b).unwrap().into_vector().unwrap();
        assert_eq!(x.shape(), (2, 1));
        assert_abs_diff_eq!(x[(0, 0)], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[(1, 0)], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_overdetermined_inconsistent() {
        let a = matrix![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
        let b = matrix![[2.0], [3.0], [6.0]];
        assert_eq!(a.solve(&b).unwrap(), Solution::NoSolution);
    }

    #[test]
    fn test_solve_3x3() {
        let a = matrix![[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
        let b = matrix![[8.0], [-11.0], [-3.0]];
        let x = a.solve(&b).unwrap().into_vector().unwrap();
        assert_abs_diff_eq!(x[(0, 0)], 2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(x[(1, 0)], 3.0, epsilon = 1e-10);
        assert_abs_diff_eq!(x[(2, 0)], -1.0, epsilon = 1e-10);

        let residual = (&a.matmul(&x).unwrap() - &b).unwrap();
        assert!(residual.as_slice().iter().all(|r| r.abs() < 1e-10));
    }

    #[test]
    fn test_solve_shape_errors() {
        let a = Matrix::identity(2).unwrap();
        let wide_b = Matrix::new(2, 2).unwrap();
        let short_b = Matrix::new(3, 1).unwrap();
        assert_eq!(
            solve(&a, &wide_b),
            Err(MatrustError::DimensionMismatch {
                lhs: (2, 2),
                rhs: (2, 2)
            })
        );
        assert!(matches!(
            solve(&a, &short_b),
            Err(MatrustError::DimensionMismatch { .. })
        ));
    }
}
