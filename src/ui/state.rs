use tokio::sync::mpsc;

use crate::common::{ChatCommand, ChatEvent, MessageHandle, Role, SendState};

use super::chrome::ChromeState;

/// One message as currently drawn; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub handle: MessageHandle,
    pub role: Role,
    pub text: String,
    pub ts: String,
}

/// Trạng thái cục bộ của UI.
#[derive(Default)]
pub struct AppState {
    pub messages: Vec<RenderedMessage>,
    pub input_text: String,
    pub chrome: ChromeState,
    pub send_state: SendState,
    pub notice: Option<String>,
    /// Set by every transcript mutation, consumed by the chat area.
    pub scroll_to_end: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: ChatEvent) {
        match event {
            ChatEvent::Render {
                handle,
                role,
                text,
                ts,
            } => {
                self.messages.push(RenderedMessage {
                    handle,
                    role,
                    text,
                    ts,
                });
                self.scroll_to_end = true;
            }
            ChatEvent::Update { handle, text } => {
                if let Some(message) = self.messages.iter_mut().find(|m| m.handle == handle) {
                    message.text = text;
                    self.scroll_to_end = true;
                }
            }
            ChatEvent::Remove(handle) => {
                self.messages.retain(|message| message.handle != handle);
                self.scroll_to_end = true;
            }
            ChatEvent::ClearAll => {
                self.messages.clear();
                self.notice = None;
            }
            ChatEvent::State(state) => self.send_state = state,
            ChatEvent::Exported(path) => {
                self.notice = Some(format!("Exported to {}", path.display()));
            }
            ChatEvent::ExportFailed(err) => {
                self.notice = Some(format!("Export failed: {err}"));
            }
        }
    }

    /// Trimmed input text, or `None` when it is blank.
    pub fn pending_input(&self) -> Option<&str> {
        let text = self.input_text.trim();
        (!text.is_empty()).then_some(text)
    }

    /// Queue the input for the worker. The box is cleared only once the
    /// command is accepted, so a full queue leaves the text in place.
    pub fn dispatch_input(&mut self, sender: &mpsc::Sender<ChatCommand>) {
        let Some(text) = self.pending_input().map(str::to_string) else {
            return;
        };
        match sender.try_send(ChatCommand::Send(text)) {
            Ok(()) => self.input_text.clear(),
            Err(err) => {
                log::warn!("Failed to queue message for chat worker: {err}");
                self.notice = Some("Chat is busy, message not sent".to_string());
            }
        }
    }
}
