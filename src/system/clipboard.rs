//! Clipboard access

use crate::error::{Result, system};

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard via `arboard`, opened lazily on first copy
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            let opened =
                arboard::Clipboard::new().map_err(|e| system::clipboard_failed(e.to_string()))?;
            self.inner = Some(opened);
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(system::clipboard_failed("clipboard unavailable"));
        };
        clipboard
            .set_text(text.to_string())
            .map_err(|e| system::clipboard_failed(e.to_string()))
    }
}
