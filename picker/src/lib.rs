// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Engine for an interactive RGB color-selection widget.
//!
//! Several redundant input representations of a single color (slider triples, free-form
//! numeric fields, a native color picker, a hex text field) feed into one
//! [`ColorState`]. Every update, no matter its origin, is normalized through the same
//! conversion and validation path and produces one immutable [`ColorSnapshot`] carrying:
//!
//! - the current [`RgbValue`],
//! - its canonical `RRGGBB` hex form,
//! - a [`ContrastReport`] (WCAG-style contrast ratios against white and black, plus a
//!   suggested text color),
//! - the validity flag for the hex text field.
//!
//! Presenters (the rendering surface, whatever it is) implement [`Presenter`] and are
//! purely reactive consumers of snapshots. They never mutate state directly, so any
//! number of widgets can coexist without shared globals.
//!
//! ```
//! use r3bl_color_picker::{ColorState, TextColor};
//!
//! let mut state = ColorState::new();
//! let snapshot = state.apply_from_channels(255, 0, 0);
//!
//! assert_eq!(snapshot.hex.as_str(), "FF0000");
//! assert_eq!(snapshot.contrast.suggested_text, TextColor::Black);
//! ```
//!
//! The copy-to-clipboard quick action lives in the [`clipboard`] module: a primary
//! system clipboard strategy with an OSC 52 fallback, both behind the
//! [`ClipboardService`] seam.

// Production library code override of the workspace `unwrap_in_result = allow`. This
// enforces strict error handling in production code only (tests may unwrap).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod clipboard;
pub mod color;
pub mod common;
pub mod config;
pub mod state;

// Re-export.
pub use clipboard::*;
pub use color::*;
pub use common::*;
pub use config::*;
pub use state::*;
