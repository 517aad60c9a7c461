pub mod format;
pub mod log;
pub mod macros;
mod digits;

pub use digits::IntoDigits;
