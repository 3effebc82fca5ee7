//! System clipboard access

use crate::error::{FolioError, Result};

#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Clipboard backed by `arboard`; the handle is opened per write
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| FolioError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| FolioError::Clipboard(e.to_string()))
    }
}
