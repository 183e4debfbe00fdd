// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The sole mutable entity of the widget.
//!
//! Every input origin (sliders, numeric fields, hex text, native picker, randomize,
//! reset) converges on the same invariant-preserving update path: normalize the input,
//! replace the current [`RgbValue`] wholesale, recompute the derived values, produce
//! one [`ColorSnapshot`], notify presenters. Updates are atomic and total; no
//! operation suspends, panics, or returns an error.

use std::fmt::{Debug, Formatter};

use super::DEBUG_COLOR_STATE;
use crate::{ChannelInput,
            ColorSnapshot,
            ContrastReport,
            Presenter,
            PresenterVec,
            RgbValue,
            random_color};

/// One long-lived instance per widget. Multiple independent widgets can coexist, each
/// with its own `ColorState`; there are no globals.
pub struct ColorState {
    current: RgbValue,
    hex_field_invalid: bool,
    presenters: PresenterVec,
}

impl Debug for ColorState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorState")
            .field("current", &self.current)
            .field("hex_field_invalid", &self.hex_field_invalid)
            .field("presenter_count", &self.presenters.len())
            .finish()
    }
}

impl Default for ColorState {
    fn default() -> Self { Self::new() }
}

impl ColorState {
    /// Starts at black `(0, 0, 0)`, like the widget's initial render.
    #[must_use]
    pub fn new() -> Self { Self::with_initial_color(RgbValue::default()) }

    #[must_use]
    pub fn with_initial_color(initial: RgbValue) -> Self {
        Self {
            current: initial,
            hex_field_invalid: false,
            presenters: PresenterVec::new(),
        }
    }

    /// Registers a reactive consumer. It is rendered on every subsequent transition;
    /// call [`Self::snapshot`] and render it manually for the initial paint.
    pub fn add_presenter(&mut self, presenter: Box<dyn Presenter>) {
        self.presenters.push(presenter);
    }

    /// Read-only snapshot of the current state. Does not notify presenters.
    #[must_use]
    pub fn snapshot(&self) -> ColorSnapshot {
        ColorSnapshot {
            color: self.current,
            hex: self.current.as_hex(),
            contrast: ContrastReport::for_color(self.current),
            hex_field_invalid: self.hex_field_invalid,
        }
    }

    /// Update origin: sliders or free-form numeric fields. Each raw value is coerced
    /// and clamped via [`ChannelInput::clamp`]; this origin never fails.
    pub fn apply_from_channels(
        &mut self,
        red: impl Into<ChannelInput>,
        green: impl Into<ChannelInput>,
        blue: impl Into<ChannelInput>,
    ) -> ColorSnapshot {
        let value = RgbValue {
            red: red.into().clamp(),
            green: green.into().clamp(),
            blue: blue.into().clamp(),
        };
        self.accept(value)
    }

    /// Update origin: the hex text field.
    ///
    /// The input is trimmed and at most one leading `#` is stripped. Empty text means
    /// "not yet typed": the value is kept and no invalid indicator is shown. Malformed
    /// text keeps the last valid value and raises `hex_field_invalid` on the snapshot;
    /// it never interrupts further input handling.
    pub fn apply_from_hex_text(&mut self, text: &str) -> ColorSnapshot {
        let trimmed = text.trim();
        let cleaned = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if cleaned.is_empty() {
            self.hex_field_invalid = false;
            return self.emit();
        }

        match RgbValue::try_from_hex_color(cleaned) {
            Ok(value) => self.accept(value),
            Err(error) => {
                DEBUG_COLOR_STATE.then(|| {
                    // % is Display, ? is Debug.
                    tracing::debug!(
                        message = "🎨 Rejected hex text input",
                        input = %cleaned,
                        error = ?error,
                    );
                });
                self.hex_field_invalid = true;
                self.emit()
            }
        }
    }

    /// Update origin: the native color picker, which emits `#RRGGBB`. The picker is
    /// assumed to always produce valid hex, so a parse failure is dropped silently:
    /// no invalid indicator, value unchanged.
    pub fn apply_from_picker(&mut self, hex_with_hash: &str) -> ColorSnapshot {
        match RgbValue::try_from_hex_color(hex_with_hash.trim()) {
            Ok(value) => self.accept(value),
            Err(_) => self.emit(),
        }
    }

    /// Quick action: an independent uniform draw for each channel.
    pub fn randomize(&mut self) -> ColorSnapshot { self.accept(random_color::generate()) }

    /// Quick action: back to black, regardless of prior state.
    pub fn reset(&mut self) -> ColorSnapshot { self.accept(RgbValue::default()) }

    /// The single accepting path: replaces the value wholesale and clears the invalid
    /// indicator (a successful update from any origin resynchronizes the hex field).
    fn accept(&mut self, value: RgbValue) -> ColorSnapshot {
        self.current = value;
        self.hex_field_invalid = false;

        DEBUG_COLOR_STATE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🎨 Color state updated",
                hex = %self.current.as_hex(),
            );
        });

        self.emit()
    }

    /// Every transition ends here: one snapshot, every presenter notified, the same
    /// snapshot returned to the caller.
    fn emit(&mut self) -> ColorSnapshot {
        let snapshot = self.snapshot();
        for presenter in &mut self.presenters {
            presenter.render(&snapshot);
        }
        snapshot
    }
}
