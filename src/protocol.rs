//! Messages exchanged between the UI thread and the message source thread.

use crate::message::ChatMessage;

/// Actions sent from the UI to the message source
#[derive(Debug, Clone, PartialEq)]
pub enum SourceAction {
    /// Stop delivering messages and end the source loop
    Shutdown,
}

/// Events sent from the message source to the UI
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
    /// A new message arrived
    MessageReceived(ChatMessage),
    /// The source stopped; carries a reason for the status line
    SourceClosed(String),
}
