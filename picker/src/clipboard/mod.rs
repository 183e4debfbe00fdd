// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Best-effort copy-to-clipboard with graceful degradation.
//!
//! Two ordered strategies behind one [`ClipboardService`] seam: the system clipboard
//! first ([`SystemClipboard`]), then an OSC 52 escape sequence emitted to the terminal
//! ([`Osc52Clipboard`]) for environments where no display-server clipboard is
//! reachable (SSH sessions, bare consoles). Either path is fire-and-forget: failures
//! are logged, never propagated, and have no effect on the widget state.

/// Enable or disable debug logging for this `clipboard` module.
pub const DEBUG_CLIPBOARD: bool = false;

// Attach sources.
pub mod clipboard_support;
pub mod osc52_clipboard;
pub mod system_clipboard;

// Re-export.
pub use clipboard_support::*;
pub use osc52_clipboard::*;
pub use system_clipboard::*;
