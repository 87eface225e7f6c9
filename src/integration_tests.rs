//! Integration tests for support-chat
//!
//! These tests exercise full workflows across the source, state, row
//! planning and auto-scroll modules.

#[cfg(test)]
mod integration_tests {
    use crate::autoscroll::AutoScroll;
    use crate::emoji::is_emoji_only;
    use crate::message::{ChatMessage, MessageId, SenderRole};
    use crate::protocol::FeedEvent;
    use crate::shim::{self, GlobalNamespace, GlobalScope, InstallOutcome};
    use crate::source::{DEMO_CONVERSATION, run_source};
    use crate::state::ChatState;
    use crate::ui::feed::{FeedView, RowAlign, RowBody, SUPPORT_LABEL, plan_feed};
    use chrono::Local;
    use crossbeam_channel::unbounded;
    use std::time::Duration;

    fn message(id: u64, role: SenderRole, content: &str) -> ChatMessage {
        ChatMessage::new(MessageId(id), Local::now(), role, content)
    }

    /// Drive the demo source into the state and plan every delivered row
    #[test]
    fn test_source_to_rendered_rows() {
        let (_action_tx, action_rx) = unbounded();
        let (event_tx, event_rx) = unbounded();
        run_source(DEMO_CONVERSATION, Duration::ZERO, action_rx, event_tx);

        let mut state = ChatState::new(true);
        for event in event_rx.try_iter() {
            state.apply_event(event);
        }
        assert!(!state.source_live);

        let FeedView::Rows(rows) = plan_feed(state.feed.messages()) else {
            panic!("expected rows after delivery");
        };
        assert_eq!(rows.len(), DEMO_CONVERSATION.len());

        for (row, line) in rows.iter().zip(DEMO_CONVERSATION) {
            let expected_align = match line.role {
                SenderRole::Visitor => RowAlign::End,
                SenderRole::Admin => RowAlign::Start,
            };
            assert_eq!(row.align, expected_align);

            match &row.body {
                RowBody::Emoji(text) => {
                    assert!(is_emoji_only(line.content));
                    assert_eq!(*text, line.content.trim());
                }
                RowBody::Bubble { meta, .. } => {
                    assert!(!is_emoji_only(line.content));
                    assert_eq!(meta.ends_with(SUPPORT_LABEL), line.role == SenderRole::Admin);
                }
            }
        }
    }

    /// Frames rendered while messages arrive one at a time
    #[test]
    fn test_autoscroll_across_frames() {
        let mut state = ChatState::new(false);
        let mut scroll = AutoScroll::new();
        let mut scrolls = 0;

        let mut frame = |state: &ChatState, scroll: &mut AutoScroll| {
            if scroll.on_update(state.feed.revision(), state.feed.len(), state.is_open) {
                scrolls += 1;
            }
        };

        // Closed and empty: nothing to do
        frame(&state, &mut scroll);

        // Open the panel
        state.toggle_open();
        frame(&state, &mut scroll);
        frame(&state, &mut scroll);

        // Two messages arrive across frames
        state.apply_event(FeedEvent::MessageReceived(message(1, SenderRole::Visitor, "hi")));
        frame(&state, &mut scroll);
        frame(&state, &mut scroll);
        state.apply_event(FeedEvent::MessageReceived(message(2, SenderRole::Admin, "hello!")));
        frame(&state, &mut scroll);

        assert_eq!(scrolls, 3);
    }

    /// Placeholder disappears once the first message lands
    #[test]
    fn test_empty_state_then_rows() {
        let mut state = ChatState::new(true);
        assert!(matches!(plan_feed(state.feed.messages()), FeedView::Empty(_)));

        state.apply_event(FeedEvent::MessageReceived(message(1, SenderRole::Admin, "😀")));
        match plan_feed(state.feed.messages()) {
            FeedView::Rows(rows) => assert_eq!(rows[0].body, RowBody::Emoji("😀")),
            other => panic!("expected rows, got {:?}", other),
        }
    }

    /// Startup installs the globals that the window-less path leaves out
    #[test]
    fn test_shim_startup_paths() {
        let mut browser = GlobalNamespace::with_window();
        assert_eq!(shim::install(&mut browser), Ok(InstallOutcome::Installed));
        assert!(browser.get(shim::BUFFER_GLOBAL).is_some());
        assert!(browser.get(shim::WINDOW_ALIAS_GLOBAL).is_some());

        let mut headless = GlobalNamespace::headless();
        assert_eq!(shim::install(&mut headless), Ok(InstallOutcome::NoWindow));
        assert!(headless.get(shim::BUFFER_GLOBAL).is_none());
        assert!(headless.get(shim::WINDOW_ALIAS_GLOBAL).is_none());
    }
}
