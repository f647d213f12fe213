use std::fmt;

use serde_derive::Serialize;

/// 8-bit sRGB color
pub type Color = palette::Srgb<u8>;

/// HSL color with the hue in degrees and the saturation and lightness in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HslColor {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl HslColor {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.).round() / 100.
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            round2(self.h),
            round2(self.s),
            round2(self.l)
        )
    }
}
