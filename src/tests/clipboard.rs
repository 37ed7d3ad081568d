use std::time::Duration;

use rand::{rngs::StdRng, SeedableRng};

use crate::clipboard::{clear_after, copy_password, ClipboardTarget};
use crate::error::{Error, Result};
use crate::generator::{generate_with, GenerationSettings};

#[derive(Default)]
struct MemoryClipboard {
    content: Option<String>,
    denied: bool,
}

impl ClipboardTarget for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.denied {
            return Err(Error::Generic("permission denied"));
        }
        self.content = Some(text.to_owned());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.denied {
            return Err(Error::Generic("permission denied"));
        }
        self.content = None;
        Ok(())
    }
}

#[test]
fn copy_puts_whole_password_on_clipboard() -> Result<()> {
    let password = generate_with(&GenerationSettings::default(), &mut StdRng::seed_from_u64(4));
    let mut clipboard = MemoryClipboard::default();

    copy_password(&mut clipboard, &password)?;

    assert_eq!(Some(password.as_str()), clipboard.content.as_deref());
    Ok(())
}

#[test]
fn failed_copy_leaves_clipboard_untouched() {
    let password = generate_with(&GenerationSettings::default(), &mut StdRng::seed_from_u64(4));
    let mut clipboard = MemoryClipboard {
        content: Some("previous".to_owned()),
        denied: true,
    };

    let result = copy_password(&mut clipboard, &password);

    assert!(result.is_err());
    assert_eq!(Some("previous"), clipboard.content.as_deref());
}

#[test]
fn clear_after_empties_clipboard() -> Result<()> {
    let mut clipboard = MemoryClipboard {
        content: Some("secret".to_owned()),
        denied: false,
    };

    clear_after(&mut clipboard, Duration::from_millis(1))?;

    assert_eq!(None, clipboard.content);
    Ok(())
}

#[test]
fn clear_after_reports_failure() {
    let mut clipboard = MemoryClipboard {
        content: Some("secret".to_owned()),
        denied: true,
    };

    let result = clear_after(&mut clipboard, Duration::from_millis(1));

    assert!(result.is_err());
}
