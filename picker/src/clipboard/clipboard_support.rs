// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::error::Error;

use super::DEBUG_CLIPBOARD;

pub type ClipboardResult<T> = Result<T, Box<dyn Error + Send + Sync + 'static>>;

/// Abstraction for the clipboard service for dependency injection. This trait is
/// implemented by the system clipboard, the OSC 52 fallback, and a test clipboard
/// service.
pub trait ClipboardService {
    /// # Errors
    ///
    /// Returns an error when the underlying clipboard mechanism is unavailable or
    /// rejects the content.
    fn try_to_put_content_into_clipboard(
        &mut self,
        content: String,
    ) -> ClipboardResult<()>;
}

/// Which strategy ended up holding the content. The user-visible acknowledgment is
/// identical for [`Primary`] and [`Fallback`].
///
/// [`Primary`]: CopyOutcome::Primary
/// [`Fallback`]: CopyOutcome::Fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Primary,
    Fallback,
    Failed,
}

/// Tries the primary strategy, then the fallback. Failures are logged at debug level
/// and never propagate to the caller; the widget state is unaffected either way.
pub fn copy_to_clipboard(
    content: &str,
    primary: &mut impl ClipboardService,
    fallback: &mut impl ClipboardService,
) -> CopyOutcome {
    if let Err(error) = primary.try_to_put_content_into_clipboard(content.to_string()) {
        DEBUG_CLIPBOARD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📋 Primary clipboard failed, trying fallback",
                error = ?error,
            );
        });
    } else {
        return CopyOutcome::Primary;
    }

    match fallback.try_to_put_content_into_clipboard(content.to_string()) {
        Ok(()) => CopyOutcome::Fallback,
        Err(error) => {
            DEBUG_CLIPBOARD.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "📋 Fallback clipboard failed as well",
                    error = ?error,
                );
            });
            CopyOutcome::Failed
        }
    }
}

pub mod clipboard_test_fixtures {
    use super::{ClipboardResult, ClipboardService};

    #[derive(Debug, Default)]
    pub struct TestClipboard {
        pub content: String,
    }

    impl ClipboardService for TestClipboard {
        fn try_to_put_content_into_clipboard(
            &mut self,
            content: String,
        ) -> ClipboardResult<()> {
            self.content = content;
            Ok(())
        }
    }

    /// Always fails, to exercise the fallback path.
    #[derive(Debug, Default)]
    pub struct BrokenClipboard;

    impl ClipboardService for BrokenClipboard {
        fn try_to_put_content_into_clipboard(
            &mut self,
            _content: String,
        ) -> ClipboardResult<()> {
            Err("clipboard unavailable".into())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{clipboard_test_fixtures::{BrokenClipboard, TestClipboard},
                *};

    #[test]
    fn test_primary_wins_when_it_works() {
        let mut primary = TestClipboard::default();
        let mut fallback = TestClipboard::default();

        let outcome = copy_to_clipboard("#FF0000", &mut primary, &mut fallback);

        assert_eq!(outcome, CopyOutcome::Primary);
        assert_eq!(primary.content, "#FF0000");
        assert_eq!(fallback.content, "");
    }

    #[test]
    fn test_fallback_receives_content_when_primary_fails() {
        let mut primary = BrokenClipboard;
        let mut fallback = TestClipboard::default();

        let outcome = copy_to_clipboard("#AABBCC", &mut primary, &mut fallback);

        assert_eq!(outcome, CopyOutcome::Fallback);
        assert_eq!(fallback.content, "#AABBCC");
    }

    #[test]
    fn test_both_failing_is_not_a_panic() {
        let mut primary = BrokenClipboard;
        let mut fallback = BrokenClipboard;

        let outcome = copy_to_clipboard("#AABBCC", &mut primary, &mut fallback);

        assert_eq!(outcome, CopyOutcome::Failed);
    }
}
