//! Conversion of colors between hex strings, RGB triples and HSL

use std::fmt;

use lazy_static::lazy_static;
use parse_display::{Display, FromStr};
use regex::Regex;
use serde_derive::Serialize;
use thiserror::Error;
use tracing::trace;

use crate::models::{Color, HslColor};

mod utils;
pub use utils::{hex_to_rgb, rgb_to_hex, rgb_to_hsl};

lazy_static! {
    static ref TRIPLE_REGEX: Regex = Regex::new("^[0-9]{1,3},[0-9]{1,3},[0-9]{1,3}$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color input: {0:?}")]
    InvalidInput(String),
    #[error("unsupported color format: {0:?}")]
    UnsupportedFormat(String),
}

/// Target representation of a conversion
#[derive(Display, FromStr, Debug, Clone, Copy, PartialEq, Eq)]
#[display(style = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
}

/// A color to convert
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    /// 3 or 6 hex digits, with an optional leading `#`
    Hex(String),
    /// Comma-separated decimal channels, `"r,g,b"`
    DecimalTriple(String),
    /// Channels given directly
    Rgb(Color),
}

impl ColorInput {
    /// Normalize this input to an RGB color
    pub fn to_rgb(&self) -> Result<Color, ColorError> {
        match self {
            ColorInput::Hex(hex) => {
                hex_to_rgb(hex).ok_or_else(|| ColorError::InvalidInput(hex.clone()))
            }
            ColorInput::DecimalTriple(triple) => {
                let channels = triple
                    .split(',')
                    .map(|channel| channel.trim().parse::<u8>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|_| ColorError::InvalidInput(triple.clone()))?;

                match channels[..] {
                    [r, g, b] => Ok(Color::new(r, g, b)),
                    _ => Err(ColorError::InvalidInput(triple.clone())),
                }
            }
            ColorInput::Rgb(color) => Ok(*color),
        }
    }
}

impl From<&str> for ColorInput {
    fn from(input: &str) -> Self {
        let trimmed = input.trim();

        if TRIPLE_REGEX.is_match(trimmed) {
            Self::DecimalTriple(trimmed.to_owned())
        } else {
            Self::Hex(input.to_owned())
        }
    }
}

impl From<String> for ColorInput {
    fn from(input: String) -> Self {
        input.as_str().into()
    }
}

impl From<Color> for ColorInput {
    fn from(color: Color) -> Self {
        Self::Rgb(color)
    }
}

/// Result of a conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorOutput {
    Hex(String),
    Rgb(#[serde(serialize_with = "crate::serde::serialize_color_as_object")] Color),
    Hsl(HslColor),
}

impl fmt::Display for ColorOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorOutput::Hex(hex) => f.write_str(hex),
            ColorOutput::Rgb(color) => write!(f, "{},{},{}", color.red, color.green, color.blue),
            ColorOutput::Hsl(hsl) => fmt::Display::fmt(hsl, f),
        }
    }
}

/// Convert a color to the given format
///
/// Returns `None` if the input is not a valid color. Use [`try_convert`] to know why.
pub fn convert(input: impl Into<ColorInput>, target: ColorFormat) -> Option<ColorOutput> {
    try_convert(input, target).ok()
}

/// Convert a color to the given format
pub fn try_convert(
    input: impl Into<ColorInput>,
    target: ColorFormat,
) -> Result<ColorOutput, ColorError> {
    let input = input.into();
    let rgb = input.to_rgb()?;

    let output = match target {
        ColorFormat::Hex => ColorOutput::Hex(rgb_to_hex(rgb)),
        ColorFormat::Rgb => ColorOutput::Rgb(rgb),
        ColorFormat::Hsl => ColorOutput::Hsl(rgb_to_hsl(rgb)),
    };

    trace!(?input, %target, %output, "converted color");
    Ok(output)
}

/// Convert a color given as text to a format given by name
///
/// # Parameters
///
/// * `input`: hex string or `"r,g,b"` triple
/// * `target`: one of `hex`, `rgb` or `hsl`
pub fn format_color(input: &str, target: &str) -> Result<ColorOutput, ColorError> {
    let rgb = ColorInput::from(input).to_rgb()?;
    let target: ColorFormat = target
        .parse()
        .map_err(|_| ColorError::UnsupportedFormat(target.to_owned()))?;

    try_convert(rgb, target)
}
