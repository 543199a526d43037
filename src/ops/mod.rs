//! Arithmetic operations for matrices.
//! Element-wise helpers live in `elementwise`; `arithmetic` builds the
//! addition, subtraction, scaling and negation operators on top of them.

mod arithmetic;
mod elementwise;

pub use arithmetic::*;
pub use elementwise::*;
