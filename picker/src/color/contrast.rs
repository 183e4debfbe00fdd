// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Relative luminance and contrast-ratio derivation.
//!
//! More info on luminance and contrast:
//! - <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
//! - <https://stackoverflow.com/a/3118280/2085356>

use super::RgbValue;

/// Converts one 8-bit sRGB channel to its linear-light value in `[0, 1]` using the
/// piecewise sRGB transfer function.
#[must_use]
pub fn linearize_channel(value: u8) -> f64 {
    let normalized = f64::from(value) / 255.0;
    if normalized <= 0.03928 {
        normalized / 12.92
    } else {
        ((normalized + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance `L` in `[0, 1]`: the weighted sum of the linearized channels.
#[must_use]
pub fn relative_luminance(color: RgbValue) -> f64 {
    0.2126 * linearize_channel(color.red)
        + 0.7152 * linearize_channel(color.green)
        + 0.0722 * linearize_channel(color.blue)
}

/// The text color recommended for legibility on top of the current color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
pub enum TextColor {
    #[default]
    White,
    Black,
}

/// Contrast ratios of the current color against the two reference text colors, plus
/// the recommendation derived from them. Fully derived from an [`RgbValue`];
/// recomputed on every update, never mutated directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastReport {
    /// `1.05 / (L + 0.05)`, in `[1, 21]` for any valid `L`.
    pub contrast_with_white: f64,
    /// `(L + 0.05) / 0.05`, in `[1, 21]` for any valid `L`.
    pub contrast_with_black: f64,
    pub suggested_text: TextColor,
}

impl ContrastReport {
    #[must_use]
    pub fn for_color(color: RgbValue) -> Self {
        Self::for_luminance(relative_luminance(color))
    }

    #[must_use]
    pub fn for_luminance(luminance: f64) -> Self {
        let contrast_with_white = 1.05 / (luminance + 0.05);
        let contrast_with_black = (luminance + 0.05) / 0.05;
        // White wins the tie.
        let suggested_text = if contrast_with_white >= contrast_with_black {
            TextColor::White
        } else {
            TextColor::Black
        };
        Self {
            contrast_with_white,
            contrast_with_black,
            suggested_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    const TOLERANCE: f64 = 1e-3;

    #[test]
    fn test_luminance_endpoints() {
        assert!(relative_luminance(RgbValue::from_u8(0, 0, 0)).abs() < TOLERANCE);
        assert!(
            (relative_luminance(RgbValue::from_u8(255, 255, 255)) - 1.0).abs()
                < TOLERANCE
        );
    }

    #[test]
    fn test_black_prefers_white_text() {
        let report = ContrastReport::for_color(RgbValue::from_u8(0, 0, 0));
        assert!((report.contrast_with_white - 21.0).abs() < TOLERANCE);
        assert!((report.contrast_with_black - 1.0).abs() < TOLERANCE);
        assert_eq!(report.suggested_text, TextColor::White);
    }

    #[test]
    fn test_white_prefers_black_text() {
        let report = ContrastReport::for_color(RgbValue::from_u8(255, 255, 255));
        assert!((report.contrast_with_white - 1.0).abs() < TOLERANCE);
        assert!((report.contrast_with_black - 21.0).abs() < TOLERANCE);
        assert_eq!(report.suggested_text, TextColor::Black);
    }

    #[test]
    fn test_pure_red() {
        let report = ContrastReport::for_color(RgbValue::from_u8(255, 0, 0));
        assert!((report.contrast_with_white - 3.998).abs() < TOLERANCE);
        assert!((report.contrast_with_black - 5.252).abs() < TOLERANCE);
        assert_eq!(report.suggested_text, TextColor::Black);
    }

    #[test]
    fn test_mid_gray_prefers_black_text() {
        // L(128) ≈ 0.2158, which sits above the crossover luminance ≈ 0.1791.
        let report = ContrastReport::for_color(RgbValue::from_u8(128, 128, 128));
        assert_eq!(report.suggested_text, TextColor::Black);
    }

    #[test]
    fn test_white_wins_at_the_crossover() {
        // Both ratios are equal at the crossover luminance (√0.0525 - 0.05 ≈ 0.1791).
        // Just below it the white ratio is the larger one, and White must win every
        // luminance at or below the crossover.
        let crossover = 0.052_5_f64.sqrt() - 0.05;
        let report = ContrastReport::for_luminance(crossover - 1e-9);
        assert!(report.contrast_with_white >= report.contrast_with_black);
        assert_eq!(report.suggested_text, TextColor::White);

        let report = ContrastReport::for_luminance(crossover + 1e-9);
        assert_eq!(report.suggested_text, TextColor::Black);
    }

    #[test_case(RgbValue::from_u8(0, 0, 0))]
    #[test_case(RgbValue::from_u8(255, 255, 255))]
    #[test_case(RgbValue::from_u8(255, 128, 0))]
    #[test_case(RgbValue::from_u8(12, 200, 99))]
    fn test_ratios_are_at_least_one(color: RgbValue) {
        let report = ContrastReport::for_color(color);
        assert!(report.contrast_with_white >= 1.0);
        assert!(report.contrast_with_black >= 1.0);
    }
}
