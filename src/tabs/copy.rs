use std::time::Duration;

use wasm_bindgen_futures::{spawn_local, JsFuture};

pub const COPIED_RESET: Duration = Duration::from_secs(2);

/// The "copied" flag plus a counter that stamps each copy, so only the reset
/// scheduled by the most recent copy can clear it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyIndicator {
    copied: bool,
    ticket: u64,
}

impl CopyIndicator {
    pub fn copied(&self) -> bool {
        self.copied
    }

    /// Raises the flag and returns the ticket the matching reset must present.
    pub fn mark(&mut self) -> u64 {
        self.copied = true;
        self.ticket = self.ticket.wrapping_add(1);
        self.ticket
    }

    pub fn expire(&mut self, ticket: u64) -> bool {
        if self.copied && ticket == self.ticket {
            self.copied = false;
            true
        } else {
            false
        }
    }
}

/// Writes `text` through the async Clipboard API. Failures (no permission,
/// insecure context) are logged and otherwise ignored.
pub fn copy_to_clipboard(text: &str) {
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            tracing::warn!("no window, clipboard write skipped");
            return;
        };
        let clipboard = window.navigator().clipboard();
        match JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => tracing::debug!(bytes = text.len(), "copied to clipboard"),
            Err(e) => tracing::warn!(error = ?e, "clipboard write failed"),
        }
    });
}

#[test]
fn test_copy_indicator() {
    let mut indicator = CopyIndicator::default();
    assert!(!indicator.copied());

    let first = indicator.mark();
    assert!(indicator.copied());
    assert!(indicator.expire(first));
    assert!(!indicator.copied());
    // a second expiry of the same window does nothing
    assert!(!indicator.expire(first));
}

#[test]
fn test_copy_again_restarts_window() {
    let mut indicator = CopyIndicator::default();
    let first = indicator.mark();
    let second = indicator.mark();
    assert_ne!(first, second);

    // the first window's reset fires while the second is still open
    assert!(!indicator.expire(first));
    assert!(indicator.copied());

    assert!(indicator.expire(second));
    assert!(!indicator.copied());
}

#[test]
fn test_reset_delay() {
    assert_eq!(COPIED_RESET.as_millis(), 2_000);
}
