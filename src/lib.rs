//! `dtutils` is a small set of developer utilities: color format conversion between hex
//! strings, RGB triples and HSL, and random integers in an inclusive range.
//!
//! The `dtutils` binary exposes them as commands, see [`cli`].
//!
//! # Example
//!
//! ```
//! use dtutils::color::{convert, ColorFormat, ColorOutput};
//! use dtutils::models::Color;
//!
//! assert_eq!(
//!     convert("#FF0000", ColorFormat::Rgb),
//!     Some(ColorOutput::Rgb(Color::new(255, 0, 0)))
//! );
//! assert_eq!(convert("256,0,0", ColorFormat::Hex), None);
//! ```

pub mod banner;
pub mod cli;
pub mod color;
pub mod models;
pub mod random;
pub mod serde;
