//! Title banner with a horizontal color gradient

use std::io::{self, Write};

use lazy_static::lazy_static;
use palette::{LinSrgb, Mix};

use crate::{color::hex_to_rgb, models::Color};

/// "DTUTILS" in the ANSI Shadow text-art font
pub const BANNER: &str = include_str!("banner.txt");

/// Gradient stops, left to right
pub const GRADIENT: [&str; 6] = [
    "#3588d5", "#6386dd", "#6f83da", "#8879d2", "#a670b1", "#b26ca4",
];

lazy_static! {
    static ref GRADIENT_STOPS: Vec<LinSrgb> = GRADIENT
        .iter()
        .filter_map(|hex| hex_to_rgb(hex))
        .map(|color| color.into_linear())
        .collect();
}

/// Sample a gradient at position `t` in `[0, 1]`
///
/// Colors are interpolated in linear RGB between evenly spaced stops.
pub fn gradient_at(stops: &[LinSrgb], t: f32) -> Option<Color> {
    let last = stops.len().checked_sub(1)?;
    if last == 0 {
        return Some(Color::from_linear(stops[0]));
    }

    let scaled = t.max(0.).min(1.) * last as f32;
    let index = (scaled.floor() as usize).min(last - 1);
    let mixed = stops[index].mix(stops[index + 1], scaled - index as f32);

    Some(Color::from_linear(mixed))
}

/// Write the banner to `out`, colored with ANSI true color escapes if `color` is set
pub fn render<W: Write>(out: &mut W, color: bool) -> io::Result<()> {
    if !color {
        return write!(out, "{}", BANNER);
    }

    let width = BANNER
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    for line in BANNER.lines() {
        for (column, ch) in line.chars().enumerate() {
            let t = if width > 1 {
                column as f32 / (width - 1) as f32
            } else {
                0.
            };

            match gradient_at(&GRADIENT_STOPS, t) {
                Some(c) if !ch.is_whitespace() => {
                    write!(out, "\x1b[38;2;{};{};{}m{}", c.red, c.green, c.blue, ch)?
                }
                _ => write!(out, "{}", ch)?,
            }
        }

        writeln!(out, "\x1b[0m")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(expected: Option<Color>, actual: Option<Color>) {
        let (expected, actual) = match (expected, actual) {
            (Some(expected), Some(actual)) => (expected, actual),
            other => panic!("expected two colors, got {:?}", other),
        };

        let diff = |a: u8, b: u8| (i16::from(a) - i16::from(b)).abs();
        assert!(
            diff(expected.red, actual.red) <= 1
                && diff(expected.green, actual.green) <= 1
                && diff(expected.blue, actual.blue) <= 1,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn gradient_endpoints() {
        assert_eq!(GRADIENT_STOPS.len(), GRADIENT.len());
        assert_close(hex_to_rgb(GRADIENT[0]), gradient_at(&GRADIENT_STOPS, 0.));
        assert_close(hex_to_rgb(GRADIENT[5]), gradient_at(&GRADIENT_STOPS, 1.));
        assert_close(hex_to_rgb(GRADIENT[5]), gradient_at(&GRADIENT_STOPS, 2.));
        assert_close(hex_to_rgb(GRADIENT[1]), gradient_at(&GRADIENT_STOPS, 0.2));
    }

    #[test]
    fn gradient_degenerate_stops() {
        assert_eq!(gradient_at(&[], 0.5), None);

        let single: [LinSrgb; 1] = [Color::new(255, 0, 0).into_linear()];
        assert_close(Some(Color::new(255, 0, 0)), gradient_at(&single, 0.5));
    }

    #[test]
    fn render_plain() {
        let mut out = Vec::new();
        render(&mut out, false).expect("render failed");

        let text = String::from_utf8(out).expect("invalid utf-8");
        assert_eq!(text, BANNER);
        assert_eq!(text.lines().count(), 6);
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn render_colored() {
        let mut out = Vec::new();
        render(&mut out, true).expect("render failed");

        let text = String::from_utf8(out).expect("invalid utf-8");
        assert_eq!(text.lines().count(), 6);
        assert!(text.starts_with("\x1b[38;2;"));
        assert!(text.lines().all(|line| line.ends_with("\x1b[0m")));
    }
}
