//! # matrust
//!
//! A dense-matrix numerical engine: matrix construction and arithmetic plus
//! rank, determinant, inverse, linear-system classification and 3D rotation,
//! all built on Gaussian elimination with partial pivoting.
//!
//! ```
//! use matrust::{matrix, Solution};
//!
//! let a = matrix![[2.0, 1.0], [1.0, 1.0]];
//! let b = matrix![[1.0], [1.0]];
//!
//! assert_eq!(a.determinant().unwrap(), 1.0);
//! match a.solve(&b).unwrap() {
//!     Solution::Unique(x) => assert_eq!(x.shape(), (2, 1)),
//!     other => panic!("expected a unique solution, got {other:?}"),
//! }
//! ```

mod macros;

pub mod config;
pub mod error;
pub mod linalg;
pub mod matrix;
pub mod ops;
pub mod transform;

pub use error::{MatrustError, Result};
pub use linalg::{Echelon, LinearAlgebra, Pivoting, Reduction, Solution, SolveStatus};
pub use matrix::Matrix;
pub use transform::{rotation, rotation_x, rotation_y, rotation_z};
