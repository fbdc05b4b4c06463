use arboard::Clipboard;

/// Reads the user's current text selection.
///
/// On Linux the primary selection is the highlighted text itself; other
/// platforms only expose the clipboard.
pub fn read_selection() -> Option<String> {
    let mut clipboard = match Clipboard::new() {
        Ok(clipboard) => clipboard,
        Err(e) => {
            log::warn!("Clipboard unavailable: {}", e);
            return None;
        }
    };

    #[cfg(target_os = "linux")]
    {
        use arboard::{GetExtLinux, LinuxClipboardKind};

        if let Some(text) = clipboard
            .get()
            .clipboard(LinuxClipboardKind::Primary)
            .text()
            .ok()
            .and_then(non_blank)
        {
            return Some(text);
        }
    }

    clipboard.get_text().ok().and_then(non_blank)
}

fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_not_a_selection() {
        assert_eq!(non_blank(String::new()), None);
        assert_eq!(non_blank(" \t\n".to_string()), None);
        assert_eq!(non_blank("hi".to_string()).as_deref(), Some("hi"));
    }
}
