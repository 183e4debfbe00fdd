// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Be very careful when adjusting these tuning parameters. The rule of thumb is that
//! smaller static allocation sizes are better than larger. There is a tradeoff between
//! pre-allocating large amounts of memory and allocating small amounts (on the heap) as
//! you need it.

use smallstr::SmallString;

/// Stack storage for short free-form user input, eg: the text typed into a numeric
/// channel field.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Stack storage for hex color strings. `#RRGGBB` is 7 bytes, so 8 never spills.
pub const HEX_COLOR_STORAGE_SIZE: usize = 8;

/// Stack allocated string storage for small strings. When this gets larger than
/// [`DEFAULT_STRING_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the
/// heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Stack allocated storage for a hex color string, in either the canonical `RRGGBB`
/// form or the `#RRGGBB` presentation form.
pub type HexColorString = SmallString<[u8; HEX_COLOR_STORAGE_SIZE]>;
