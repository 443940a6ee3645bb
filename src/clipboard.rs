//! System clipboard access for the copy actions.
//!
//! A handle is opened per copy and dropped straight after; nothing holds the
//! clipboard between commands.

use crate::core::types::ScoredKeyword;
use crate::error::{KeywordError, Result};
use crate::view::phrases_text;
use arboard::Clipboard;

/// Put a single phrase (or any text) on the clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    Clipboard::new()?.set_text(text.to_owned())?;
    tracing::debug!(bytes = text.len(), "Copied to clipboard");
    Ok(())
}

/// Copy every phrase, one per line. Refuses an empty result list.
pub fn copy_all(items: &[ScoredKeyword]) -> Result<()> {
    if items.is_empty() {
        return Err(KeywordError::NoResults("copy"));
    }
    copy_to_clipboard(&phrases_text(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_all_rejects_empty_list() {
        // fails before touching the clipboard, so this runs headless
        let err = copy_all(&[]).unwrap_err();
        assert!(matches!(err, KeywordError::NoResults("copy")));
    }

    #[test]
    fn test_arboard_errors_convert() {
        let err: KeywordError = arboard::Error::ContentNotAvailable.into();
        assert!(matches!(err, KeywordError::Clipboard(_)));
        assert!(err.to_string().starts_with("Clipboard error: "));
    }
}
