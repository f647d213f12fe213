//! Serde extensions

mod color;
pub use self::color::*;
