// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (8-bit per channel sRGB) color representation.
//!
//! This is the single source-of-truth representation for the widget engine. Every other
//! representation (hex text, picker value, channel fields) converts to and from this
//! type without loss.

use std::fmt::Write as _;

use crate::{HexColorString,
            common::{CommonError, CommonErrorType, CommonResult},
            parse_hex_color_exact};

/// Represents a color as an 8-bit sRGB triple. Channels are in `[0, 255]` by
/// construction.
///
/// The default value is black, which is also the initial state of
/// [`crate::ColorState`].
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<u32> for RgbValue {
    /// Interprets the low 24 bits as `0xRRGGBB`.
    #[allow(clippy::cast_possible_truncation)] // Each channel is masked to 8 bits.
    fn from(value: u32) -> Self {
        Self {
            red: ((value >> 16) & 0xFF) as u8,
            green: ((value >> 8) & 0xFF) as u8,
            blue: (value & 0xFF) as u8,
        }
    }
}

impl RgbValue {
    #[must_use]
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Parses `#RRGGBB` or `RRGGBB` (any case, at most one leading `#`, nothing
    /// trailing) into an [`RgbValue`]. Malformed input is rejected, never clamped or
    /// guessed at.
    ///
    /// # Errors
    ///
    /// Returns [`CommonErrorType::InvalidHexColorFormat`] if the input does not match.
    pub fn try_from_hex_color(input: &str) -> CommonResult<RgbValue> {
        match parse_hex_color_exact(input) {
            Ok((_, color)) => Ok(color),
            Err(_) => CommonError::new_error_result_with_only_type(
                CommonErrorType::InvalidHexColorFormat,
            ),
        }
    }

    /// Canonical hex form: exactly two uppercase, zero-padded hex digits per channel,
    /// concatenated `RRGGBB`, no separators, no `#`.
    ///
    /// This form is bijective with [`RgbValue`]: [`Self::try_from_hex_color`] of the
    /// result always returns the original value.
    #[must_use]
    pub fn as_hex(&self) -> HexColorString {
        let mut acc = HexColorString::new();
        _ = write!(acc, "{:02X}{:02X}{:02X}", self.red, self.green, self.blue);
        acc
    }

    /// Presentation form `#RRGGBB`, used at the presenter boundary (native color
    /// picker value, clipboard payload).
    #[must_use]
    pub fn as_hex_with_hash(&self) -> HexColorString {
        let mut acc = HexColorString::new();
        _ = write!(acc, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue);
        acc
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_new() {
        let value = RgbValue::from_u8(1, 2, 3);
        assert_eq!((value.red, value.green, value.blue), (1, 2, 3));
    }

    #[test]
    fn test_rgb_value_default_is_black() {
        assert_eq!(RgbValue::default(), RgbValue::from_u8(0, 0, 0));
    }

    #[test]
    fn test_from_u32() {
        assert_eq!(RgbValue::from(0x00FF_8000), RgbValue::from_u8(255, 128, 0));
    }

    #[test]
    fn test_try_from_hex_color() {
        // Valid.
        {
            let value = RgbValue::try_from_hex_color("#ff0000").unwrap();
            assert_eq!((value.red, value.green, value.blue), (255, 0, 0));
        }
        {
            let value = RgbValue::try_from_hex_color("#AABBCC").unwrap();
            assert_eq!((value.red, value.green, value.blue), (170, 187, 204));
        }

        // Invalid.
        for input in ["", "#ff000", "12345", "GGGGGG", "#AABBCCDD", "##AABBCC"] {
            assert!(RgbValue::try_from_hex_color(input).is_err(), "{input}");
        }
    }

    #[test_case(RgbValue{red: 1, green: 2, blue: 3}, "010203")]
    #[test_case(RgbValue{red: 255, green: 0, blue: 0}, "FF0000")]
    #[test_case(RgbValue{red: 170, green: 187, blue: 204}, "AABBCC")]
    fn test_as_hex(value: RgbValue, expected: &str) {
        assert_eq!(value.as_hex().as_str(), expected);
    }

    #[test]
    fn test_as_hex_with_hash() {
        let value = RgbValue::from_u8(255, 128, 0);
        assert_eq!(value.as_hex_with_hash().as_str(), "#FF8000");
    }

    #[test_case(RgbValue{red: 0, green: 0, blue: 0})]
    #[test_case(RgbValue{red: 0, green: 128, blue: 255})]
    #[test_case(RgbValue{red: 255, green: 255, blue: 255})]
    #[test_case(RgbValue{red: 47, green: 20, blue: 223})]
    fn test_hex_round_trip(value: RgbValue) {
        let parsed = RgbValue::try_from_hex_color(value.as_hex().as_str()).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_parse_normalizes_case() {
        let lower = RgbValue::try_from_hex_color("aabbcc").unwrap();
        assert_eq!(lower.as_hex().as_str(), "AABBCC");
    }
}
