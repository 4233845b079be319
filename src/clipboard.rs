/// Clipboard access and the copy toasts shown on cards.
use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

/// How long a copy toast stays on its card.
pub const TOAST_DURATION: Duration = Duration::from_millis(1200);

#[derive(Debug, thiserror::Error)]
#[error("clipboard error: {0}")]
pub struct ClipboardError(pub String);

pub trait ClipboardWriter {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by `arboard`, opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardWriter for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_owned())
                .map_err(|e| ClipboardError(e.to_string())),
            None => Err(ClipboardError("clipboard unavailable".to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

/// At most one toast per card. Showing a new one replaces the old toast and
/// its deadline.
#[derive(Debug, Default)]
pub struct ToastBoard {
    toasts: HashMap<usize, Toast>,
}

impl ToastBoard {
    pub fn show(&mut self, card: usize, message: String, now: Instant) {
        self.toasts.insert(
            card,
            Toast {
                message,
                expires_at: now + TOAST_DURATION,
            },
        );
    }

    /// Drops every toast whose deadline has passed.
    pub fn expire(&mut self, now: Instant) {
        self.toasts.retain(|_, toast| toast.expires_at > now);
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn get(&self, card: usize) -> Option<&Toast> {
        self.toasts.get(&card)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}

pub struct ClipboardNotifier {
    clipboard: Box<dyn ClipboardWriter>,
    pub toasts: ToastBoard,
}

impl ClipboardNotifier {
    pub fn new(clipboard: Box<dyn ClipboardWriter>) -> Self {
        Self {
            clipboard,
            toasts: ToastBoard::default(),
        }
    }

    /// Copies `hex` and shows a toast on `card`.
    ///
    /// The copy is best effort: a failure is logged and returned for callers
    /// that care, but the toast goes up either way.
    pub fn copy_and_notify(
        &mut self,
        card: usize,
        hex: &str,
        now: Instant,
    ) -> Result<(), ClipboardError> {
        let copied = self.clipboard.set_text(hex);
        match &copied {
            Ok(()) => debug!(hex, "copied to clipboard"),
            Err(err) => warn!("clipboard copy failed: {err}"),
        }
        self.toasts.show(card, format!("{hex} copied"), now);
        copied
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use tracing_test::traced_test;

    use super::*;

    #[derive(Clone, Default)]
    struct Recording(Rc<RefCell<Vec<String>>>);

    impl ClipboardWriter for Recording {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.0.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct Denied;

    impl ClipboardWriter for Denied {
        fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError("permission denied".to_string()))
        }
    }

    #[test]
    fn copy_writes_hex_and_shows_toast() {
        let recording = Recording::default();
        let mut notifier = ClipboardNotifier::new(Box::new(recording.clone()));
        let now = Instant::now();

        notifier.copy_and_notify(2, "#3498DB", now).unwrap();

        assert_eq!(recording.0.borrow().as_slice(), ["#3498DB"]);
        let toast = notifier.toasts.get(2).unwrap();
        assert_eq!(toast.message, "#3498DB copied");
        assert_eq!(toast.expires_at, now + TOAST_DURATION);
    }

    #[test]
    #[traced_test]
    fn failed_copy_still_shows_toast() {
        let mut notifier = ClipboardNotifier::new(Box::new(Denied));
        let result = notifier.copy_and_notify(0, "#FFFFFF", Instant::now());

        assert!(result.is_err());
        assert!(notifier.toasts.get(0).is_some());
        assert!(logs_contain("clipboard copy failed"));
    }

    #[test]
    fn toast_expires_after_fixed_delay() {
        let mut board = ToastBoard::default();
        let start = Instant::now();
        board.show(0, "#000000 copied".to_string(), start);

        board.expire(start + Duration::from_millis(1199));
        assert!(board.get(0).is_some());

        board.expire(start + TOAST_DURATION);
        assert!(board.get(0).is_none());
    }

    #[test]
    fn repeat_copy_on_same_card_replaces_toast() {
        let mut board = ToastBoard::default();
        let start = Instant::now();
        board.show(1, "#111111 copied".to_string(), start);
        board.show(1, "#111111 copied".to_string(), start + Duration::from_millis(1000));

        assert_eq!(board.len(), 1);
        // The first deadline no longer applies.
        board.expire(start + Duration::from_millis(1500));
        assert!(board.get(1).is_some());
        board.expire(start + Duration::from_millis(2200));
        assert!(board.get(1).is_none());
    }

    #[test]
    fn toasts_on_different_cards_expire_independently() {
        let mut board = ToastBoard::default();
        let start = Instant::now();
        board.show(0, "#000000 copied".to_string(), start);
        board.show(3, "#333333 copied".to_string(), start + Duration::from_millis(500));
        assert_eq!(board.len(), 2);

        board.expire(start + Duration::from_millis(1300));
        assert!(board.get(0).is_none());
        assert!(board.get(3).is_some());

        board.expire(start + Duration::from_millis(1700));
        assert_eq!(board.len(), 0);
    }
}
