// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! OSC 52 clipboard fallback.
//!
//! OSC sequences follow the pattern `ESC ] code ; parameters ST`. Code 52 asks the
//! terminal emulator to place the base64 payload on the clipboard itself, which works
//! where no display-server clipboard is reachable (SSH sessions, bare consoles).
//! Support is terminal-dependent and often security-restricted, which is why this is
//! the fallback and not the primary strategy.

use std::io::Write;

use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::{ClipboardResult, ClipboardService, DEBUG_CLIPBOARD};

/// OSC 52 sequence prefix targeting the clipboard selection: ESC ] 5 2 ; c ;
pub const OSC52_START: &str = "\x1b]52;c;";

/// Sequence terminator: BEL character (0x07). More widely accepted for OSC 52 than
/// the two-byte String Terminator.
pub const BELL_TERMINATOR: &str = "\x07";

/// The fallback copy strategy: emit an OSC 52 sequence to the given writer (stdout in
/// production, a buffer in tests).
#[derive(Debug)]
pub struct Osc52Clipboard<W: Write> {
    writer: W,
}

impl Osc52Clipboard<std::io::Stdout> {
    #[must_use]
    pub fn new() -> Self { Self { writer: std::io::stdout() } }
}

impl Default for Osc52Clipboard<std::io::Stdout> {
    fn default() -> Self { Self::new() }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn with_writer(writer: W) -> Self { Self { writer } }
}

impl<W: Write> ClipboardService for Osc52Clipboard<W> {
    fn try_to_put_content_into_clipboard(
        &mut self,
        content: String,
    ) -> ClipboardResult<()> {
        let payload = STANDARD.encode(content.as_bytes());
        write!(self.writer, "{OSC52_START}{payload}{BELL_TERMINATOR}")?;
        self.writer.flush()?;

        DEBUG_CLIPBOARD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📋 Hex code was sent to the terminal via OSC 52",
                copied = %content,
            );
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use base64::Engine as _;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_emits_wrapped_base64_payload() {
        let mut clipboard = Osc52Clipboard::with_writer(Vec::new());
        clipboard
            .try_to_put_content_into_clipboard("#FF0000".to_string())
            .unwrap();

        let written = String::from_utf8(clipboard.writer).unwrap();
        let payload = written
            .strip_prefix(OSC52_START)
            .and_then(|rest| rest.strip_suffix(BELL_TERMINATOR))
            .unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), b"#FF0000");
    }
}
