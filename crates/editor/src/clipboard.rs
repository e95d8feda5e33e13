//! System clipboard access.
//!
//! Cut, copy, and paste go through the OS clipboard so text survives across
//! applications. Clipboard access can fail (no display server, another
//! client holding the selection); both operations are best-effort and a
//! failure leaves the buffer untouched.
//!
//! Under test the real clipboard is swapped out for a thread-local string so
//! tests stay deterministic and do not disturb the host clipboard.

#[cfg(not(test))]
pub fn copy_to_clipboard(text: &str) {
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        if let Err(err) = clipboard.set_text(text.to_string()) {
            tracing::warn!(?err, "failed to write clipboard");
        }
    }
}

#[cfg(not(test))]
pub fn paste_from_clipboard() -> Option<String> {
    arboard::Clipboard::new().ok()?.get_text().ok()
}

#[cfg(test)]
thread_local! {
    static MOCK_CLIPBOARD: std::cell::RefCell<Option<String>> =
        const { std::cell::RefCell::new(None) };
}

#[cfg(test)]
pub fn copy_to_clipboard(text: &str) {
    MOCK_CLIPBOARD.with(|c| *c.borrow_mut() = Some(text.to_string()));
}

#[cfg(test)]
pub fn paste_from_clipboard() -> Option<String> {
    MOCK_CLIPBOARD.with(|c| c.borrow().clone())
}

#[cfg(test)]
pub fn mock_set_clipboard(text: Option<String>) {
    MOCK_CLIPBOARD.with(|c| *c.borrow_mut() = text);
}
