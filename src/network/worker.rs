use std::path::PathBuf;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::chat::{ChannelRenderer, SendController};
use crate::common::{ChatCommand, ChatEvent};

use super::client::Backend;

/// Owns the send flow and the history store; processes UI commands one at a time.
///
/// Commands wait in the channel while a flow is in flight, so a second send
/// only starts rendering after the first has gone back to idle.
pub struct ChatWorker<B: Backend> {
    controller: SendController<B, ChannelRenderer>,
    command_receiver: mpsc::Receiver<ChatCommand>,
    event_sender: mpsc::UnboundedSender<ChatEvent>,
    export_dir: PathBuf,
    cancel: CancellationToken,
}

impl<B: Backend> ChatWorker<B> {
    pub fn new(
        controller: SendController<B, ChannelRenderer>,
        command_receiver: mpsc::Receiver<ChatCommand>,
        event_sender: mpsc::UnboundedSender<ChatEvent>,
        export_dir: PathBuf,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            controller,
            command_receiver,
            event_sender,
            export_dir,
            cancel,
        }
    }

    pub async fn run(mut self) {
        self.controller.initialize();
        log::info!("Chat worker started");

        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => break,
                command = self.command_receiver.recv() => {
                    match command {
                        Some(command) => self.handle_command(command).await,
                        None => break,
                    }
                }
            }
        }

        log::info!("Chat worker stopped");
    }

    async fn handle_command(&mut self, command: ChatCommand) {
        match command {
            ChatCommand::Send(text) => {
                let outcome = self.controller.send(&text).await;
                log::debug!("Send flow finished: {outcome:?}");
            }
            ChatCommand::Clear => self.controller.clear_history(),
            ChatCommand::Export => {
                let event = match self.controller.export(&self.export_dir) {
                    Ok(path) => {
                        log::info!("Exported chat history to {}", path.display());
                        ChatEvent::Exported(path)
                    }
                    Err(err) => {
                        log::warn!("Failed to export chat history: {err}");
                        ChatEvent::ExportFailed(err.to_string())
                    }
                };
                if let Err(err) = self.event_sender.send(event) {
                    log::warn!("Failed to notify UI about export: {err}");
                }
            }
        }
    }
}
