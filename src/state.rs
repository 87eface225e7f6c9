//! Core chat state, separated from UI logic.
//!
//! `ChatState` holds the feed, the panel visibility and the source status.
//! UI components receive it by reference; only event processing mutates it.

use crate::message::ChatFeed;
use crate::protocol::FeedEvent;

/// Core application state for the support chat.
#[derive(Default, Debug)]
pub struct ChatState {
    /// Messages in arrival order.
    pub feed: ChatFeed,

    /// Whether the chat panel is currently open.
    pub is_open: bool,

    /// Whether the message source is still delivering.
    pub source_live: bool,

    /// Reason the source stopped, if it did.
    pub source_status: Option<String>,
}

impl ChatState {
    pub fn new(is_open: bool) -> Self {
        Self {
            is_open,
            source_live: true,
            ..Self::default()
        }
    }

    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
        tracing::debug!(is_open = self.is_open, "chat panel toggled");
    }

    pub fn apply_event(&mut self, event: FeedEvent) {
        match event {
            FeedEvent::MessageReceived(msg) => self.feed.push(msg),
            FeedEvent::SourceClosed(reason) => {
                tracing::info!("message source closed: {}", reason);
                self.source_live = false;
                self.source_status = Some(reason);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{ChatMessage, MessageId, SenderRole};
    use chrono::Local;

    #[test]
    fn test_apply_message_event() {
        let mut state = ChatState::new(true);
        state.apply_event(FeedEvent::MessageReceived(ChatMessage::new(
            MessageId(1),
            Local::now(),
            SenderRole::Visitor,
            "hello",
        )));
        assert_eq!(state.feed.len(), 1);
        assert!(state.source_live);
    }

    #[test]
    fn test_apply_source_closed() {
        let mut state = ChatState::new(false);
        state.apply_event(FeedEvent::SourceClosed("done".into()));
        assert!(!state.source_live);
        assert_eq!(state.source_status.as_deref(), Some("done"));
    }

    #[test]
    fn test_toggle_open() {
        let mut state = ChatState::new(false);
        state.toggle_open();
        assert!(state.is_open);
        state.toggle_open();
        assert!(!state.is_open);
    }
}
