//! Linear algebra operations for matrices.
//! Everything here is built on the Gaussian elimination engine in
//! `elimination`, apart from the product and the transpose.

mod elimination;
mod inverse;
mod matmul;
mod rank;
mod solve;
mod transpose;

pub use elimination::*;
pub use inverse::*;
pub use matmul::*;
pub use rank::*;
pub use solve::*;
pub use transpose::*;

pub(crate) use matmul::product;

use crate::{error::Result, matrix::Matrix};

/// Trait for linear algebra operations on matrices.
pub trait LinearAlgebra: Sized {
    /// Matrix multiplication.
    fn matmul(&self, rhs: &Self) -> Result<Self>;

    /// Matrix transpose.
    fn t(&self) -> Self;

    /// Matrix inverse.
    fn inv(&self) -> Result<Self>;

    /// Matrix determinant.
    fn det(&self) -> Result<f64>;

    /// Matrix rank.
    fn rank(&self) -> usize;

    /// Solve `self · x = b`.
    fn solve(&self, b: &Self) -> Result<Solution>;
}

impl LinearAlgebra for Matrix {
    fn matmul(&self, rhs: &Self) -> Result<Self> {
        matmul(self, rhs)
    }

    fn t(&self) -> Self {
        transpose(self)
    }

    fn inv(&self) -> Result<Self> {
        inverse(self)
    }

    fn det(&self) -> Result<f64> {
        determinant(self)
    }

    fn rank(&self) -> usize {
        rank(self)
    }

    fn solve(&self, b: &Self) -> Result<Solution> {
        solve(self, b)
    }
}
