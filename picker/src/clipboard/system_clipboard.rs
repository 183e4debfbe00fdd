// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use copypasta_ext::{copypasta::ClipboardProvider, x11_fork::ClipboardContext};

use super::{ClipboardResult, ClipboardService, DEBUG_CLIPBOARD};

/// The primary copy strategy: the OS-level clipboard via `copypasta_ext`. The fork
/// based X11 provider keeps the selection alive after the process exits.
#[derive(Debug)]
pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn try_to_put_content_into_clipboard(
        &mut self,
        content: String,
    ) -> ClipboardResult<()> {
        let mut ctx = ClipboardContext::new()?;
        ctx.set_contents(content.clone())?;

        DEBUG_CLIPBOARD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📋 Hex code was copied to the system clipboard",
                copied = %content,
            );
        });

        Ok(())
    }
}
