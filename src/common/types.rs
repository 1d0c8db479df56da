use chrono::Local;
use serde::{Deserialize, Serialize};

/// Ai là người gửi tin nhắn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

/// One persisted chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub role: Role,
    pub text: String,
    pub ts: String,
}

impl ChatEntry {
    pub fn new(role: Role, text: impl Into<String>, ts: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            ts: ts.into(),
        }
    }

    pub fn user(text: impl Into<String>, ts: impl Into<String>) -> Self {
        Self::new(Role::User, text, ts)
    }

    pub fn bot(text: impl Into<String>, ts: impl Into<String>) -> Self {
        Self::new(Role::Bot, text, ts)
    }
}

/// Opaque identity of a rendered message in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageHandle(pub u64);

/// Trạng thái của luồng gửi tin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendState {
    #[default]
    Idle,
    AwaitingResponse,
    Animating,
}

impl SendState {
    pub fn label(self) -> &'static str {
        match self {
            SendState::Idle => "",
            SendState::AwaitingResponse => "Waiting for reply...",
            SendState::Animating => "Typing...",
        }
    }
}

/// Local wall-clock time as `HH:MM`.
pub fn timestamp() -> String {
    Local::now().format("%H:%M").to_string()
}
