use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::common::{ChatEntry, Role, SendState, timestamp};
use crate::network::{Backend, BackendError};
use crate::storage::{HistoryStore, StorageError};

use super::animator::{Cancelled, animate};
use super::renderer::Renderer;

pub const PLACEHOLDER_TEXT: &str = "Thinking...";
pub const ERROR_TEXT: &str = "⚠️ Error connecting to server.";
pub const WELCOME_TEXT: &str = "Hi! I can help with placements, resumes, projects, and debugging. What do you want to work on today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input, nothing happened.
    Ignored,
    Answered,
    Failed,
    Cancelled,
}

/// Drives one exchange: echo, persist, placeholder, backend call, typed reply.
///
/// The controller only ever runs one flow at a time because `send` takes
/// `&mut self`; callers queue further input until it returns.
pub struct SendController<B, R> {
    backend: B,
    renderer: R,
    history: HistoryStore,
    typing_delay: Duration,
    cancel: CancellationToken,
    state: SendState,
}

impl<B: Backend, R: Renderer> SendController<B, R> {
    pub fn new(
        backend: B,
        renderer: R,
        history: HistoryStore,
        typing_delay: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            backend,
            renderer,
            history,
            typing_delay,
            cancel,
            state: SendState::Idle,
        }
    }

    /// Replay stored history, or greet and persist the greeting when there is none.
    pub fn initialize(&mut self) {
        let entries = self.history.load();
        if entries.is_empty() {
            let ts = timestamp();
            self.renderer.render_static(WELCOME_TEXT, Role::Bot, &ts);
            self.persist(ChatEntry::bot(WELCOME_TEXT, ts));
        } else {
            log::info!("Restoring {} history entries", entries.len());
            for entry in &entries {
                self.renderer.render_static(&entry.text, entry.role, &entry.ts);
            }
        }
        self.set_state(SendState::Idle);
    }

    pub async fn send(&mut self, raw: &str) -> SendOutcome {
        let text = raw.trim();
        if text.is_empty() {
            return SendOutcome::Ignored;
        }

        let flow_id = Uuid::new_v4();
        log::info!("[{flow_id}] sending {} chars", text.len());

        let ts = timestamp();
        self.renderer.render_static(text, Role::User, &ts);
        self.persist(ChatEntry::user(text, ts));

        let placeholder = self
            .renderer
            .render_static(PLACEHOLDER_TEXT, Role::Bot, &timestamp());
        self.set_state(SendState::AwaitingResponse);

        let result = tokio::select! {
            _ = self.cancel.cancelled() => Err(BackendError::Cancelled),
            result = self.backend.predict(text) => result,
        };
        self.renderer.remove(placeholder);

        let outcome = match result {
            Ok(reply) => {
                self.set_state(SendState::Animating);
                let typed =
                    animate(&reply, &mut self.renderer, self.typing_delay, &self.cancel).await;
                match typed {
                    Ok(typed) => {
                        self.persist(ChatEntry::bot(typed.text, typed.ts));
                        log::info!("[{flow_id}] reply shown");
                        SendOutcome::Answered
                    }
                    Err(Cancelled) => {
                        log::info!("[{flow_id}] animation cancelled");
                        SendOutcome::Cancelled
                    }
                }
            }
            Err(BackendError::Cancelled) => {
                log::info!("[{flow_id}] request cancelled");
                SendOutcome::Cancelled
            }
            Err(err) => {
                log::warn!("[{flow_id}] backend call failed: {err}");
                self.renderer
                    .render_static(ERROR_TEXT, Role::Bot, &timestamp());
                SendOutcome::Failed
            }
        };

        self.set_state(SendState::Idle);
        outcome
    }

    pub fn clear_history(&mut self) {
        if let Err(err) = self.history.clear() {
            log::warn!("Failed to clear chat history: {err}");
        }
        self.renderer.clear_all();
        log::info!("Chat history cleared");
    }

    pub fn export(&self, dir: &Path) -> Result<PathBuf, StorageError> {
        self.history.export_to(dir)
    }

    fn persist(&self, entry: ChatEntry) {
        if let Err(err) = self.history.append(entry) {
            log::warn!("Failed to persist chat entry: {err}");
        }
    }

    fn set_state(&mut self, state: SendState) {
        self.state = state;
        self.renderer.set_state(state);
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> SendState {
        self.state
    }

    #[cfg(test)]
    pub(crate) fn renderer(&self) -> &R {
        &self.renderer
    }

    #[cfg(test)]
    pub(crate) fn history(&self) -> &HistoryStore {
        &self.history
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }
}
