// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ContrastReport, HexColorString, RgbValue};

/// One immutable, fully-derived view of the widget state, produced by every
/// [`crate::ColorState`] transition.
///
/// All fields are consistent with each other by construction: `hex` and `contrast` are
/// recomputed from `color` on every update, never cached across updates.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSnapshot {
    pub color: RgbValue,
    /// Canonical `RRGGBB` form, uppercase, no `#`. This is what the hex text field
    /// shows.
    pub hex: HexColorString,
    pub contrast: ContrastReport,
    /// Set when the last hex text input failed to parse; drives the "this text is
    /// invalid" indicator. An empty hex field is "not yet typed", not invalid.
    pub hex_field_invalid: bool,
}

impl ColorSnapshot {
    /// Presentation form `#RRGGBB`: the displayed hex code, the native picker value,
    /// and the clipboard copy payload.
    #[must_use]
    pub fn hex_with_hash(&self) -> HexColorString { self.color.as_hex_with_hash() }
}
