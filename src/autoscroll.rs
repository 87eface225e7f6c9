//! Decides when the message view should jump to the newest message.

/// Values observed on the previous committed frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Observed {
    revision: u64,
    is_open: bool,
}

/// Tracks the feed revision and panel visibility between frames.
///
/// Call [`AutoScroll::on_update`] once per frame after the rows are laid out.
/// A `true` result means the caller should scroll its end anchor into view.
#[derive(Default, Debug)]
pub struct AutoScroll {
    last: Option<Observed>,
}

impl AutoScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_update(&mut self, revision: u64, len: usize, is_open: bool) -> bool {
        let current = Observed { revision, is_open };
        let previous = self.last.replace(current);

        let triggered = match previous {
            None => true,
            Some(prev) if prev == current => false,
            Some(prev) => prev.revision != revision || (!prev.is_open && is_open),
        };

        triggered && (len > 0 || is_open)
    }

    /// Forget the last observation so the next update behaves like a fresh mount.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_scrolls_when_content_or_open() {
        assert!(AutoScroll::new().on_update(0, 0, true));
        assert!(AutoScroll::new().on_update(3, 3, false));
        assert!(!AutoScroll::new().on_update(0, 0, false));
    }

    #[test]
    fn test_append_triggers_scroll() {
        let mut scroll = AutoScroll::new();
        assert!(scroll.on_update(1, 1, true));
        assert!(scroll.on_update(2, 2, true));
    }

    #[test]
    fn test_same_input_scrolls_once() {
        let mut scroll = AutoScroll::new();
        assert!(scroll.on_update(4, 4, true));
        assert!(!scroll.on_update(4, 4, true));
        assert!(!scroll.on_update(4, 4, true));
    }

    #[test]
    fn test_opening_panel_scrolls_even_when_empty() {
        let mut scroll = AutoScroll::new();
        assert!(!scroll.on_update(0, 0, false));
        assert!(scroll.on_update(0, 0, true));
    }

    #[test]
    fn test_closing_panel_does_not_scroll() {
        let mut scroll = AutoScroll::new();
        assert!(scroll.on_update(2, 2, true));
        assert!(!scroll.on_update(2, 2, false));
        // Reopening does
        assert!(scroll.on_update(2, 2, true));
    }

    #[test]
    fn test_new_message_while_closed_still_scrolls() {
        let mut scroll = AutoScroll::new();
        assert!(!scroll.on_update(0, 0, false));
        assert!(scroll.on_update(1, 1, false));
    }

    #[test]
    fn test_reset_behaves_like_mount() {
        let mut scroll = AutoScroll::new();
        assert!(scroll.on_update(1, 1, true));
        scroll.reset();
        assert!(scroll.on_update(1, 1, true));
    }
}
