//! Matrix transpose operations.

use crate::matrix::Matrix;

/// Transpose a matrix: the result is `cols × rows` with `result[j][i] = m[i][j]`.
pub fn transpose(matrix: &Matrix) -> Matrix {
    let m = matrix.rows();
    let n = matrix.cols();

    let data = matrix.as_slice();
    let mut result_data = vec![0.0; m * n];

    for i in 0..m {
        for j in 0..n {
            result_data[j * m + i] = data[i * n + j];
        }
    }

    Matrix::from_raw(n, m, result_data)
}

impl Matrix {
    pub fn transpose(&self) -> Matrix {
        transpose(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix;

    #[test]
    fn test_transpose() {
        let a = matrix![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let b = transpose(&a);

        assert_eq!(b.shape(), (3, 2));
        assert_eq!(b[(0, 0)], 1.0);
        assert_eq!(b[(0, 1)], 4.0);
        assert_eq!(b[(1, 0)], 2.0);
        assert_eq!(b[(1, 1)], 5.0);
        assert_eq!(b[(2, 0)], 3.0);
        assert_eq!(b[(2, 1)], 6.0);
    }

    #[test]
    fn test_double_transpose() {
        let a = matrix![[1.0, -2.0], [3.5, 4.0], [0.0, 7.0]];
        assert_eq!(a.transpose().transpose(), a);
    }
}
