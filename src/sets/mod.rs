//! Domain sets: membership predicates over numbers, closed under
//! union (`|`), intersection (`&`), difference (`-`) and complement (`!`).

mod number;
mod interval;
mod list;
mod set;

pub use number::*;
pub use interval::*;
pub use list::*;
pub use set::*;
