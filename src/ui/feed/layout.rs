//! Pure row planning: decides what each message row looks like before any
//! painting happens.

use chrono::{DateTime, Local};

use crate::emoji::is_emoji_only;
use crate::message::{ChatMessage, MessageKey, SenderRole};

/// Label appended to the meta line of admin bubbles.
pub const SUPPORT_LABEL: &str = "• Support";
/// Bubbles never exceed this share of the row width.
pub const BUBBLE_MAX_WIDTH_FRACTION: f32 = 0.85;

/// Placeholder shown when there are no messages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyState {
    pub icon: &'static str,
    pub title: &'static str,
    pub hint: &'static str,
}

pub const EMPTY_STATE: EmptyState = EmptyState {
    icon: "💬",
    title: "Start a conversation!",
    hint: "Messages are sent via WebSocket for real-time support.",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAlign {
    Start,
    End,
}

/// The bubble corner drawn square instead of rounded
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SquaredCorner {
    BottomLeft,
    BottomRight,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RowBody<'a> {
    /// Large glyphs, no bubble, no timestamp
    Emoji(&'a str),
    Bubble {
        content: &'a str,
        role: SenderRole,
        squared: SquaredCorner,
        /// Timestamp, plus the support label for admins
        meta: String,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct MessageRow<'a> {
    pub key: MessageKey,
    pub align: RowAlign,
    pub body: RowBody<'a>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FeedView<'a> {
    Empty(EmptyState),
    Rows(Vec<MessageRow<'a>>),
}

/// Plan the whole feed, preserving message order.
pub fn plan_feed(messages: &[ChatMessage]) -> FeedView<'_> {
    if messages.is_empty() {
        return FeedView::Empty(EMPTY_STATE);
    }
    FeedView::Rows(messages.iter().map(plan_row).collect())
}

pub fn plan_row(msg: &ChatMessage) -> MessageRow<'_> {
    let (align, squared) = match msg.role {
        SenderRole::Visitor => (RowAlign::End, SquaredCorner::BottomRight),
        SenderRole::Admin => (RowAlign::Start, SquaredCorner::BottomLeft),
    };

    let body = if is_emoji_only(&msg.content) {
        RowBody::Emoji(msg.content.trim())
    } else {
        RowBody::Bubble {
            content: &msg.content,
            role: msg.role,
            squared,
            meta: meta_line(msg),
        }
    };

    MessageRow {
        key: msg.key(),
        align,
        body,
    }
}

/// Hour and minute in local time, e.g. `09:05`.
pub fn format_time(ts: &DateTime<Local>) -> String {
    ts.format("%H:%M").to_string()
}

fn meta_line(msg: &ChatMessage) -> String {
    let time = format_time(&msg.timestamp);
    match msg.role {
        SenderRole::Admin => format!("{} {}", time, SUPPORT_LABEL),
        SenderRole::Visitor => time,
    }
}
