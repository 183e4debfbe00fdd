// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Core color types, conversion, and contrast derivation.
//!
//! This module provides:
//! - **Primitive type**: [`RgbValue`] (8-bit sRGB triple).
//! - **Input coercion**: [`ChannelInput`] for free-form slider / numeric-field input.
//! - **Conversion logic**: hex string ⇄ [`RgbValue`], with strict validation on the
//!   parse direction and a canonical uppercase `RRGGBB` form on the format direction.
//! - **Derivation**: relative luminance, contrast ratios, and the suggested text color
//!   in [`ContrastReport`].
//! - **Random source**: [`random_color::generate`] for the randomize quick action.

// Attach.
mod channel_input;
mod contrast;
mod hex_color_parser;
mod rgb_value;
pub mod random_color;

// Re-export.
pub use channel_input::*;
pub use contrast::*;
pub use hex_color_parser::*;
pub use rgb_value::*;
