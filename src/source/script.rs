//! Scripted support conversation used by the demo source.

use crate::message::SenderRole;

/// One scripted line: who says it and what.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptLine {
    pub role: SenderRole,
    pub content: &'static str,
}

const fn line(role: SenderRole, content: &'static str) -> ScriptLine {
    ScriptLine { role, content }
}

/// A short visitor/admin exchange exercising bubbles, wrapping and emoji rows.
pub const DEMO_CONVERSATION: &[ScriptLine] = &[
    line(SenderRole::Visitor, "Hi! I can't find where to update my billing address."),
    line(SenderRole::Admin, "Hello and welcome! Happy to help with that."),
    line(
        SenderRole::Admin,
        "Open Settings, then Account, then Billing. The address form is at the bottom of the page.",
    ),
    line(SenderRole::Visitor, "Found it, thanks"),
    line(SenderRole::Visitor, "🙏"),
    line(
        SenderRole::Admin,
        "Anything else? Reference for this chat: SUPPORT-REQUEST-0000000000000000000000000042",
    ),
    line(SenderRole::Visitor, "  👍 🎉  "),
];
