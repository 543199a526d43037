//! Arithmetic operations for matrices.

use super::elementwise::{map, zip_with, zip_with_in_place};
use crate::{error::Result, matrix::Matrix};
use std::ops::{Add, Mul, MulAssign, Neg, Sub};

/// Element-wise addition of two matrices.
pub fn add(lhs: &Matrix, rhs: &Matrix) -> Result<Matrix> {
    zip_with(lhs, rhs, |a, b| a + b)
}

/// Element-wise subtraction of two matrices.
pub fn sub(lhs: &Matrix, rhs: &Matrix) -> Result<Matrix> {
    zip_with(lhs, rhs, |a, b| a - b)
}

/// Multiplies every element by `scalar`.
pub fn scale(matrix: &Matrix, scalar: f64) -> Matrix {
    map(matrix, |x| x * scalar)
}

/// Element-wise negation, equivalent to scaling by `-1.0`.
pub fn neg(matrix: &Matrix) -> Matrix {
    scale(matrix, -1.0)
}

impl Matrix {
    /// Returns `self * scalar`.
    pub fn scale(&self, scalar: f64) -> Matrix {
        scale(self, scalar)
    }

    /// `self += rhs`.
    pub fn add_in_place(&mut self, rhs: &Matrix) -> Result<()> {
        zip_with_in_place(self, rhs, |a, b| a + b)
    }

    /// `self -= rhs`.
    pub fn sub_in_place(&mut self, rhs: &Matrix) -> Result<()> {
        zip_with_in_place(self, rhs, |a, b| a - b)
    }
}

impl Add for &Matrix {
    type Output = Result<Matrix>;

    fn add(self, rhs: Self) -> Result<Matrix> {
        add(self, rhs)
    }
}

impl Sub for &Matrix {
    type Output = Result<Matrix>;

    fn sub(self, rhs: Self) -> Result<Matrix> {
        sub(self, rhs)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        scale(self, rhs)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, rhs: f64) -> Matrix {
        self *= rhs;
        self
    }
}

impl<'a> Mul<&'a Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &'a Matrix) -> Matrix {
        scale(rhs, self)
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        rhs * self
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, rhs: f64) {
        for x in self.as_mut_slice() {
            *x *= rhs;
        }
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        neg(self)
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self * -1.0
    }
}
