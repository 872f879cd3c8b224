//! Clipboard integration for copying answer lines
//!
//! Uses the arboard crate for cross-platform clipboard access. The
//! `arboard::Clipboard` handle is kept alive on the UI thread: on X11 the
//! copied text is served by its owner and vanishes once it is dropped.

use crate::error::ClipboardError;
use arboard::Clipboard;
use std::cell::RefCell;

thread_local! {
    static CLIPBOARD: RefCell<Option<Clipboard>> = const { RefCell::new(None) };
}

/// Copy text to the system clipboard
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    CLIPBOARD.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| ClipboardError::AccessError(e.to_string()))?;
            *slot = Some(clipboard);
        }

        match slot.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::WriteError(e.to_string())),
            None => Err(ClipboardError::AccessError("clipboard unavailable".to_string())),
        }
    })
}

// Note: clipboard tests require a display server; the copied text itself
// is covered by the RenderSurface::copy_text tests.
