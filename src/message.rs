//! Chat message model and the ordered feed the renderer reads from.

use std::fmt;

use chrono::{DateTime, Local};

/// Unique identifier assigned by the message source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u64);

/// Which side of the support conversation authored a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SenderRole {
    /// The end user asking for help
    Visitor,
    /// Support staff
    Admin,
}

impl SenderRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            SenderRole::Visitor => "visitor",
            SenderRole::Admin => "admin",
        }
    }
}

impl fmt::Display for SenderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable identity of a rendered row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageKey(pub MessageId);

/// A single chat message as delivered by the source
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub timestamp: DateTime<Local>,
    pub role: SenderRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(
        id: MessageId,
        timestamp: DateTime<Local>,
        role: SenderRole,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            timestamp,
            role,
            content: content.into(),
        }
    }

    pub fn key(&self) -> MessageKey {
        MessageKey(self.id)
    }

    /// Timestamp-and-role identity, e.g. `1700000000000-admin`.
    /// Collides for same-millisecond messages from one sender; kept for log output only.
    pub fn legacy_key(&self) -> String {
        format!("{}-{}", self.timestamp.timestamp_millis(), self.role)
    }
}

/// Ordered sequence of messages for one conversation.
///
/// Messages are kept in arrival order. `revision` bumps on every mutation so
/// observers can tell that the sequence changed without diffing it.
#[derive(Default, Clone, Debug)]
pub struct ChatFeed {
    messages: Vec<ChatMessage>,
    revision: u64,
}

impl ChatFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, msg: ChatMessage) {
        tracing::trace!(key = %msg.legacy_key(), id = msg.id.0, "message appended");
        self.messages.push(msg);
        self.revision += 1;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
