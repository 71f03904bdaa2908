#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

/// How long a transient message stays visible.
pub const MESSAGE_DURATION_MS: u64 = 5000;

/// Visual kind of a transient message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// CSS classes for the message element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "form-message form-message--success",
            Self::Error => "form-message form-message--error",
        }
    }
}

/// A transient user-facing notification.
///
/// Each message owns its own removal timer; a newer message never cuts an
/// older one short.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub id: String,
    pub kind: MessageKind,
    pub text: String,
    pub expires_at: f64,
}

impl StatusMessage {
    /// Build a message created at `now_ms` (milliseconds since the epoch).
    pub fn new(kind: MessageKind, text: impl Into<String>, now_ms: f64) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let duration_ms = MESSAGE_DURATION_MS as f64;
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            text: text.into(),
            expires_at: now_ms + duration_ms,
        }
    }
}

/// Drop the message with `id`, if it is still displayed.
pub fn remove_message(messages: &mut Vec<StatusMessage>, id: &str) {
    messages.retain(|m| m.id != id);
}
