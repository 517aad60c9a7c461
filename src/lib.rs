//! Symbolic algebra over integer-multiplier monomials.
//! 
//! ```
//! use mathutil::{term, Expression};
//! 
//! let a = Expression::from(term!(1, x = 1)) + term!(1);
//! let b = &a * &a;                   // deferred
//! assert_eq!(b.to_string(), "(x + 1)(x + 1)");
//! assert_eq!(b.develop().to_string(), "x² + 2x + 1");
//! ```

mod error;
mod expr;
mod poly;

pub use error::*;
pub use expr::*;
pub use poly::*;

pub mod config;
pub mod sets;
pub mod util;
