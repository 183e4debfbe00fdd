// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbValue`]
//! struct. The hex color string can be in the following formats: `#RRGGBB` or `RRGGBB`,
//! eg: `#FF0000` or `FF0000` for red. At most one leading `#` is accepted.

use nom::{IResult,
          Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::{all_consuming, map_res, opt}};

use crate::RgbValue;

/// Parse function that generates an [`RgbValue`] struct from a valid hex color string.
/// Trailing input is left in the remainder; use [`parse_hex_color_exact`] when the
/// whole input must be a hex color.
///
/// # Errors
///
/// Returns a [`nom::Err`] if the input does not start with six hex digits (after at
/// most one `#`).
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbValue> {
    let (input, _) = opt(tag("#")).parse(input)?;
    let (input, (red, green, blue)) =
        (helper_fns::parse_hex_seg, helper_fns::parse_hex_seg, helper_fns::parse_hex_seg)
            .parse(input)?;
    Ok((input, RgbValue { red, green, blue }))
}

/// Same as [`parse_hex_color`], but rejects trailing input, so the input must be
/// exactly six hex digits with at most one leading `#`.
///
/// # Errors
///
/// Returns a [`nom::Err`] for wrong length, non-hex characters, or empty input.
pub fn parse_hex_color_exact(input: &str) -> IResult<&str, RgbValue> {
    all_consuming(parse_hex_color).parse(input)
}

/// Helper functions to match and parse hex digits. These are not [`Parser`]
/// implementations.
mod helper_fns {
    use super::{IResult, Parser, map_res, take_while_m_n};

    /// This function is used by [`map_res`] and it returns a [`Result`], not
    /// [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// This function is used by [`take_while_m_n`] and as long as it returns `true`
    /// items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(2, 2, match_is_hex_digit),
            parse_str_to_hex_num,
        )
        .parse(input)
    }
}
