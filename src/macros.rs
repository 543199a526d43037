//! Macros for creating matrices with a convenient syntax.

/// Creates a matrix from nested row literals.
///
/// # Panics
///
/// Panics if the rows have different lengths.
///
/// # Examples
/// ```
/// use matrust::matrix;
///
/// let m = matrix![[1.0, 2.0], [3.0, 4.0]];
/// assert_eq!(m.shape(), (2, 2));
/// assert_eq!(m[(1, 0)], 3.0);
/// ```
#[macro_export]
macro_rules! matrix {
    ($([$($x:expr),+ $(,)?]),+ $(,)?) => {
        $crate::Matrix::from_rows(&[$(vec![$($x as f64),+]),+])
            .expect("matrix! rows must all have the same length")
    };
}

/// Creates a matrix filled with zeros.
///
/// # Examples
/// ```
/// use matrust::zeros;
///
/// let m = zeros!(2, 3);
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[macro_export]
macro_rules! zeros {
    ($rows:expr, $cols:expr) => {
        $crate::Matrix::new($rows, $cols).expect("zeros! requires a valid shape")
    };
}

/// Creates an identity matrix.
///
/// # Examples
/// ```
/// use matrust::eye;
///
/// let m = eye!(3);
/// assert_eq!(m[(1, 1)], 1.0);
/// assert_eq!(m[(1, 2)], 0.0);
/// ```
#[macro_export]
macro_rules! eye {
    ($n:expr) => {
        $crate::Matrix::identity($n).expect("eye! requires a positive size")
    };
}
