use std::{thread, time::Duration};

use log::{debug, warn};

use crate::error::Result;
use crate::generator::Password;

/// Something a password can be copied to.
pub trait ClipboardTarget {
    fn set_text(&mut self, text: &str) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

/// The system clipboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl ClipboardTarget for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner.set_text(text)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.inner.clear()?;
        Ok(())
    }
}

/// Places the password on the clipboard. Either the whole password ends up
/// there or the error is returned and the clipboard is left as it was.
pub fn copy_password(target: &mut dyn ClipboardTarget, password: &Password) -> Result<()> {
    target.set_text(password.as_str())?;
    debug!("copied a {} character password to the clipboard", password.len());
    Ok(())
}

/// Blocks for `delay` and then empties the clipboard.
pub fn clear_after(target: &mut dyn ClipboardTarget, delay: Duration) -> Result<()> {
    thread::sleep(delay);
    if let Err(err) = target.clear() {
        warn!("failed to clear the clipboard: {err}");
        return Err(err);
    }
    debug!("clipboard cleared after {} seconds", delay.as_secs());
    Ok(())
}

#[cfg(test)]
#[path = "tests/clipboard.rs"]
mod clipboard_tests;
