//! Monomials, sum chains and deferred products.
//! 
//! `+` and `-` merge eagerly into sum chains, `*` between non-scalars
//! builds an unexpanded product node, and `develop` distributes every
//! product into a chain of monomials.

mod vars;
mod term;
mod prod;
mod sum;
mod alg;

pub use vars::*;
pub use term::*;
pub use prod::*;
pub use sum::*;
pub use alg::*;
