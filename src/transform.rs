//! Axis-aligned 3D rotations.
//!
//! Angles are given in degrees. The builders return the standard right-handed
//! rotation matrices; [`rotation`] composes them so that the X rotation is
//! applied first, then Y, then Z.

use crate::{
    error::{MatrustError, Result},
    linalg::product,
    matrix::Matrix,
};

/// Rotation about the X axis.
#[rustfmt::skip]
pub fn rotation_x(degrees: f64) -> Matrix {
    let (s, c) = degrees.to_radians().sin_cos();
    Matrix::from_raw(3, 3, vec![
        1.0, 0.0, 0.0,
        0.0, c, -s,
        0.0, s, c,
    ])
}

/// Rotation about the Y axis.
#[rustfmt::skip]
pub fn rotation_y(degrees: f64) -> Matrix {
    let (s, c) = degrees.to_radians().sin_cos();
    Matrix::from_raw(3, 3, vec![
        c, 0.0, s,
        0.0, 1.0, 0.0,
        -s, 0.0, c,
    ])
}

/// Rotation about the Z axis.
#[rustfmt::skip]
pub fn rotation_z(degrees: f64) -> Matrix {
    let (s, c) = degrees.to_radians().sin_cos();
    Matrix::from_raw(3, 3, vec![
        c, -s, 0.0,
        s, c, 0.0,
        0.0, 0.0, 1.0,
    ])
}

/// Composite rotation `Rz · Ry · Rx`.
pub fn rotation(deg_x: f64, deg_y: f64, deg_z: f64) -> Matrix {
    let zy = product(&rotation_z(deg_z), &rotation_y(deg_y));
    product(&zy, &rotation_x(deg_x))
}

impl Matrix {
    /// Rotates a 3×1 column vector by `Rz · Ry · Rx`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `self` is not 3×1.
    pub fn rotate_3d(&self, deg_x: f64, deg_y: f64, deg_z: f64) -> Result<Matrix> {
        if self.shape() != (3, 1) {
            return Err(MatrustError::dimension_mismatch((3, 1), self.shape()));
        }
        Ok(product(&rotation(deg_x, deg_y, deg_z), self))
    }
}
