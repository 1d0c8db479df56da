use std::path::PathBuf;

use super::types::{MessageHandle, Role, SendState};

/// Sự kiện từ chat worker gửi lên UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    Render {
        handle: MessageHandle,
        role: Role,
        text: String,
        ts: String,
    },
    Update {
        handle: MessageHandle,
        text: String,
    },
    Remove(MessageHandle),
    ClearAll,
    State(SendState),
    Exported(PathBuf),
    ExportFailed(String),
}
