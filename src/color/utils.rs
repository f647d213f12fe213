//! Color utilities

use crate::models::{Color, HslColor};

/// Parse a hex color string into a color
///
/// # Parameters
///
/// * `hex`: 3 or 6 hex digits, with an optional leading `#`
pub fn hex_to_rgb(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    // Short form: every digit is doubled
    let hex = if hex.len() == 3 {
        hex.chars()
            .flat_map(|c| std::iter::repeat(c).take(2))
            .collect()
    } else {
        hex.to_owned()
    };

    if hex.len() != 6 {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Format a color as an uppercase `#RRGGBB` string
pub fn rgb_to_hex(color: Color) -> String {
    format!("#{:02X}{:02X}{:02X}", color.red, color.green, color.blue)
}

/// Convert a color to HSL
///
/// The hue is computed from the channel holding the maximum value, red first, and is not
/// wrapped after being scaled to degrees.
pub fn rgb_to_hsl(color: Color) -> HslColor {
    let r = f64::from(color.red) / 255.;
    let g = f64::from(color.green) / 255.;
    let b = f64::from(color.blue) / 255.;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.;

    let d = max - min;
    if d == 0. {
        // Achromatic
        return HslColor::new(0., 0., l * 100.);
    }

    let s = if l > 0.5 {
        d / (2. - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6. } else { 0. }
    } else if max == g {
        (b - r) / d + 2.
    } else {
        (r - g) / d + 4.
    };

    HslColor::new(h * 60., s * 100., l * 100.)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_hsl_eq(expected: (f64, f64, f64), actual: HslColor) {
        let (h, s, l) = expected;
        assert!(
            (actual.h - h).abs() < 1e-6
                && (actual.s - s).abs() < 1e-6
                && (actual.l - l).abs() < 1e-6,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#FF0000"), Some(Color::new(255, 0, 0)));
        assert_eq!(hex_to_rgb("00ff7f"), Some(Color::new(0, 255, 127)));
        assert_eq!(hex_to_rgb("f0a"), Some(Color::new(255, 0, 170)));
        assert_eq!(hex_to_rgb("#000"), Some(Color::new(0, 0, 0)));
        assert_eq!(hex_to_rgb("bad"), Some(Color::new(187, 170, 221)));
    }

    #[test]
    fn test_hex_to_rgb_invalid() {
        assert_eq!(hex_to_rgb(""), None);
        assert_eq!(hex_to_rgb("#"), None);
        assert_eq!(hex_to_rgb("bag"), None);
        assert_eq!(hex_to_rgb("zzzzzz"), None);
        assert_eq!(hex_to_rgb("1g0000"), None);
        assert_eq!(hex_to_rgb("ff00"), None);
        assert_eq!(hex_to_rgb("ff00aa00"), None);
        assert_eq!(hex_to_rgb("##ff0000"), None);
        assert_eq!(hex_to_rgb(" fff"), None);
        assert_eq!(hex_to_rgb("ffé"), None);
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(Color::new(0, 255, 0)), "#00FF00");
        assert_eq!(rgb_to_hex(Color::new(10, 171, 205)), "#0AABCD");
    }

    #[test]
    fn test_rgb_to_hsl() {
        assert_hsl_eq((0., 100., 50.), rgb_to_hsl(Color::new(255, 0, 0)));
        assert_hsl_eq((120., 100., 50.), rgb_to_hsl(Color::new(0, 255, 0)));
        assert_hsl_eq((240., 100., 50.), rgb_to_hsl(Color::new(0, 0, 255)));
        assert_hsl_eq((60., 100., 50.), rgb_to_hsl(Color::new(255, 255, 0)));
        assert_hsl_eq((300., 100., 50.), rgb_to_hsl(Color::new(255, 0, 255)));
        assert_hsl_eq((0., 0., 0.), rgb_to_hsl(Color::new(0, 0, 0)));
        assert_hsl_eq((0., 0., 100.), rgb_to_hsl(Color::new(255, 255, 255)));
    }

    #[test]
    fn test_rgb_to_hsl_ranges() {
        for &(r, g, b) in &[(255, 10, 200), (3, 7, 250), (128, 64, 1), (90, 200, 200)] {
            let hsl = rgb_to_hsl(Color::new(r, g, b));
            assert!(hsl.h >= 0. && hsl.h < 360., "{:?}", hsl);
            assert!(hsl.s >= 0. && hsl.s <= 100., "{:?}", hsl);
            assert!(hsl.l >= 0. && hsl.l <= 100., "{:?}", hsl);
        }
    }
}
