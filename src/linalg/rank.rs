//! Matrix rank.

use crate::{config::EPSILON, matrix::Matrix};

/// Rank of a matrix from its row-echelon form.
///
/// Counts the rows and the columns of the echelon form holding at least one
/// entry larger than [`EPSILON`] in magnitude and returns the smaller count.
pub fn rank(matrix: &Matrix) -> usize {
    let echelon = matrix.row_echelon();
    let (rows, cols) = echelon.matrix.shape();
    let data = echelon.matrix.as_slice();

    let nonzero_rows = data
        .chunks_exact(cols)
        .filter(|row| row.iter().any(|v| v.abs() > EPSILON))
        .count();
    let nonzero_cols = (0..cols)
        .filter(|&j| (0..rows).any(|i| data[i * cols + j].abs() > EPSILON))
        .count();

    nonzero_rows.min(nonzero_cols)
}

impl Matrix {
    pub fn rank(&self) -> usize {
        rank(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix;

    #[test]
    fn test_rank_full() {
        assert_eq!(rank(&Matrix::identity(4).unwrap()), 4);
        assert_eq!(rank(&matrix![[2.0, 1.0], [1.0, 1.0]]), 2);
    }

    #[test]
    fn test_rank_deficient() {
        let a = matrix![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        assert_eq!(a.rank(), 2);

        let duplicated = matrix![[1.0, 2.0, 3.0], [1.0, 2.0, 3.0], [0.0, 1.0, 1.0]];
        assert_eq!(duplicated.rank(), 2);
    }

    #[test]
    fn test_rank_zero_matrix() {
        assert_eq!(Matrix::new(3, 4).unwrap().rank(), 0);
    }

    #[test]
    fn test_rank_rectangular() {
        let wide = matrix![[1.0, 0.0, 2.0, 0.0], [0.0, 1.0, 0.0, 3.0]];
        assert_eq!(wide.rank(), 2);

        let tall = matrix![[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]];
        assert_eq!(tall.rank(), 1);

        let leading_zero_column = matrix![[0.0, 1.0], [0.0, 2.0], [0.0, 5.0]];
        assert_eq!(leading_zero_column.rank(), 1);
    }

    #[test]
    fn test_rank_ignores_tiny_entries() {
        let a = matrix![[1.0, 0.0], [0.0, 1e-12]];
        assert_eq!(a.rank(), 1);
    }
}
