use tokio::sync::mpsc;

use crate::common::{ChatEvent, MessageHandle, Role, SendState};

/// Where the send flow puts visible messages.
///
/// Every mutation leaves the transcript scrolled to its newest message.
pub trait Renderer: Send {
    fn render_static(&mut self, text: &str, role: Role, ts: &str) -> MessageHandle;

    fn update(&mut self, handle: MessageHandle, text: &str);

    fn remove(&mut self, handle: MessageHandle);

    fn clear_all(&mut self);

    fn set_state(&mut self, state: SendState);
}

/// Worker-side renderer that forwards every mutation to the UI thread.
pub struct ChannelRenderer {
    event_sender: mpsc::UnboundedSender<ChatEvent>,
    next_handle: u64,
}

impl ChannelRenderer {
    pub fn new(event_sender: mpsc::UnboundedSender<ChatEvent>) -> Self {
        Self {
            event_sender,
            next_handle: 0,
        }
    }

    fn emit(&self, event: ChatEvent) {
        if let Err(err) = self.event_sender.send(event) {
            log::warn!("UI is gone, dropping render event: {:?}", err.0);
        }
    }
}

impl Renderer for ChannelRenderer {
    fn render_static(&mut self, text: &str, role: Role, ts: &str) -> MessageHandle {
        self.next_handle += 1;
        let handle = MessageHandle(self.next_handle);
        self.emit(ChatEvent::Render {
            handle,
            role,
            text: text.to_string(),
            ts: ts.to_string(),
        });
        handle
    }

    fn update(&mut self, handle: MessageHandle, text: &str) {
        self.emit(ChatEvent::Update {
            handle,
            text: text.to_string(),
        });
    }

    fn remove(&mut self, handle: MessageHandle) {
        self.emit(ChatEvent::Remove(handle));
    }

    fn clear_all(&mut self) {
        self.emit(ChatEvent::ClearAll);
    }

    fn set_state(&mut self, state: SendState) {
        self.emit(ChatEvent::State(state));
    }
}
